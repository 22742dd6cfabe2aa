use regex::Regex;
use scraper::{
    ElementRef,
    Html,
    Selector,
};

use crate::{
    cards::Card,
    core::{
        utils::CleanField,
        MilimError,
    },
};

/// Entry layouts recognized on the dictionary site, decided from the
/// page's meta description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Verb,
    Noun,
    Adjective,
    Adverb,
}

// The site serves descriptions in English or Russian depending on the
// session language; both spellings dispatch to the same layout.
const DESCRIPTION_PATTERNS: &[(&str, PageKind)] = &[
    (r"(?i)^\s*Verb\s", PageKind::Verb),
    (r"(?i)^\s*Noun\s", PageKind::Noun),
    (r"(?i)^\s*Adjective\s", PageKind::Adjective),
    (r"(?i)^\s*Adverb\s", PageKind::Adverb),
    (r"(?i)^\s*Глагол\s", PageKind::Verb),
    (r"(?i)^\s*Существительное\s", PageKind::Noun),
    (r"(?i)^\s*Прилагательное\s", PageKind::Adjective),
    (r"(?i)^\s*Наречие\s", PageKind::Adverb),
];

// Conjugation table cells carry stable element ids; each one maps to the
// flags describing that form.
const VERB_FORMS: &[(&str, &str)] = &[
    ("INF-L", "VI"),
    ("AP-ms", "VPms"),
    ("AP-fs", "VPfs"),
    ("AP-mp", "VPmp"),
    ("AP-fp", "VPfp"),
    ("PERF-1s", "VS1s"),
    ("PERF-1p", "VS1p"),
    ("PERF-2ms", "VS2ms"),
    ("PERF-2fs", "VS2fs"),
    ("PERF-2mp", "VS2mp"),
    ("PERF-2fp", "VS2fp"),
    ("PERF-3ms", "VS3ms"),
    ("PERF-3fs", "VS3fs"),
    ("PERF-3p", "VS3p"),
    ("IMPF-1s", "VF1s"),
    ("IMPF-1p", "VF1p"),
    ("IMPF-2ms", "VF2ms"),
    ("IMPF-2fs", "VF2fs"),
    ("IMPF-2mp", "VF2mp"),
    ("IMPF-2fp", "VF2fp"),
    ("IMPF-3ms", "VF3ms"),
    ("IMPF-3fs", "VF3fs"),
    ("IMPF-3mp", "VF3mp"),
    ("IMPF-3fp", "VF3fp"),
    ("IMP-2ms", "V!ms"),
    ("IMP-2fs", "V!fs"),
    ("IMP-2mp", "V!mp"),
    ("IMP-2fp", "V!fp"),
];

const NOUN_FORMS: &[(&str, &str)] =
    &[("s", "Nsa"), ("p", "Npa"), ("sc", "Nsc"), ("pc", "Npc")];

const ADJECTIVE_FORMS: &[(&str, &str)] =
    &[("ms-a", "Ams"), ("fs-a", "Afs"), ("mp-a", "Amp"), ("fp-a", "Afp")];

/// Ordered (pattern, kind) registry; patterns are tried in sequence and
/// the first match wins.
pub struct HandlerRegistry {
    entries: Vec<(Regex, PageKind)>,
}

impl HandlerRegistry {
    pub fn new() -> Result<Self, MilimError> {
        let mut entries = Vec::with_capacity(DESCRIPTION_PATTERNS.len());
        for (pattern, kind) in DESCRIPTION_PATTERNS {
            entries.push((Regex::new(pattern)?, *kind));
        }
        Ok(HandlerRegistry { entries })
    }

    pub fn dispatch(&self, description: &str) -> Option<PageKind> {
        self.entries
            .iter()
            .find(|(pattern, _)| pattern.is_match(description))
            .map(|(_, kind)| *kind)
    }
}

pub fn extract(kind: PageKind, document: &Html, url: &str) -> Vec<Card> {
    match kind {
        PageKind::Verb => extract_by_id(document, url, VERB_FORMS),
        PageKind::Noun => extract_by_id(document, url, NOUN_FORMS),
        PageKind::Adjective => extract_by_id(document, url, ADJECTIVE_FORMS),
        PageKind::Adverb => extract_adverb(document, url),
    }
}

fn element_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let any_id = Selector::parse("[id]").unwrap();
    document.select(&any_id).find(|el| el.value().id() == Some(id))
}

fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>().clean_field()
}

// One card per conjugation-table id found on the page. A form needs at
// least two of word/translation/pronunciation to be worth a card; ids
// with less than that are reported as missing.
fn extract_by_id(document: &Html, url: &str, forms: &[(&str, &str)]) -> Vec<Card> {
    let word_selector = Selector::parse("span.menukad").unwrap();
    let translation_selector = Selector::parse(".meaning").unwrap();
    let pronunciation_selector = Selector::parse(".transcription").unwrap();

    let mut cards = Vec::new();
    let mut not_found: Vec<&str> = Vec::new();

    for &(id, flags) in forms {
        let Some(root) = element_by_id(document, id) else {
            not_found.push(flags);
            continue;
        };

        // the word keeps its markup; normalization strips it later
        let word = root.select(&word_selector).next().map(|el| el.html());
        let translation = root.select(&translation_selector).next().map(|el| text_of(&el));
        let pronunciation =
            root.select(&pronunciation_selector).next().map(|el| text_of(&el));

        let found = [word.is_some(), translation.is_some(), pronunciation.is_some()]
            .iter()
            .filter(|present| **present)
            .count();
        if found < 2 {
            not_found.push(flags);
            continue;
        }

        cards.push(
            Card::new(
                word.as_deref().unwrap_or(""),
                translation.as_deref().unwrap_or(""),
                pronunciation.as_deref().unwrap_or(""),
            )
            .with_flags(flags)
            .with_source(url),
        );
    }

    if !not_found.is_empty() {
        println!("Not found: {}", not_found.join(", "));
    }
    cards
}

// Adverb pages have no conjugation table: the entry hangs off a Meaning
// header instead, with the word and transcription next to it.
fn extract_adverb(document: &Html, url: &str) -> Vec<Card> {
    let header_selector = Selector::parse("h3").unwrap();
    let word_selector = Selector::parse("span.menukad").unwrap();
    let pronunciation_selector = Selector::parse(".transcription").unwrap();

    let mut cards = Vec::new();
    for header in document.select(&header_selector) {
        let title = text_of(&header);
        if title != "Meaning" && title != "Перевод" {
            continue;
        }

        let translation = header
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(|el| text_of(&el));
        let root = header.parent().and_then(ElementRef::wrap);
        let word =
            root.and_then(|r| r.select(&word_selector).next()).map(|el| el.html());
        let pronunciation = root
            .and_then(|r| r.select(&pronunciation_selector).next())
            .map(|el| text_of(&el));

        let found = [word.is_some(), translation.is_some(), pronunciation.is_some()]
            .iter()
            .filter(|present| **present)
            .count();
        if found < 2 {
            continue;
        }

        cards.push(
            Card::new(
                word.as_deref().unwrap_or(""),
                translation.as_deref().unwrap_or(""),
                pronunciation.as_deref().unwrap_or(""),
            )
            .with_flags("B")
            .with_source(url),
        );
    }
    cards
}
