pub mod filter;
pub mod flags;
pub mod identity;
pub mod normalize;
pub mod render;


pub use flags::{
    annotate_flags,
    flags_help_text,
    Flag,
    FlagSet,
};
pub use normalize::normalize;

use crate::core::utils::CleanField;

/// Namespace prepended to every row id unless the caller picks another.
pub const DEFAULT_ID_PREFIX: &str = "PGMS";

const ASK_TRANSLATION: &str = "<em style=\"font-size:14pt\">Translate:</em>";
const ASK_PRONUNCIATION: &str = "<em style=\"font-size:14pt\">Pronounce:</em>";
const ASK_SPELLING: &str = "<em style=\"font-size:14pt\">Spell:</em>";

/// Which field pair a row quizzes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    WordTranslation,
    WordPronunciation,
    PronunciationTranslation,
}

impl RowKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            RowKind::WordTranslation => "WT",
            RowKind::WordPronunciation => "WP",
            RowKind::PronunciationTranslation => "PT",
        }
    }

    fn ask_front(&self) -> &'static str {
        match self {
            RowKind::WordTranslation | RowKind::PronunciationTranslation => ASK_TRANSLATION,
            RowKind::WordPronunciation => ASK_PRONUNCIATION,
        }
    }

    fn ask_back(&self) -> &'static str {
        match self {
            RowKind::WordTranslation => ASK_TRANSLATION,
            RowKind::WordPronunciation => ASK_SPELLING,
            RowKind::PronunciationTranslation => ASK_PRONUNCIATION,
        }
    }
}

/// One line of the import file: a namespaced id, two rendered HTML
/// fragments, and the card's tags.
#[derive(Debug, Clone)]
pub struct DeckRow {
    pub id: String,
    pub kind: RowKind,
    pub front: String,
    pub back: String,
    pub tags: String,
}

/// One learnable unit extracted from a source. Value fields are fixed at
/// construction; flags and tags may only grow, and only before the card
/// goes through the filter.
#[derive(Debug, Clone)]
pub struct Card {
    word: String,
    translation: String,
    pronunciation: String,
    flags: FlagSet,
    tags: String,
    source: String,
}

impl Card {
    pub fn new(word: &str, translation: &str, pronunciation: &str) -> Self {
        Card {
            word: word.clean_field(),
            translation: translation.clean_field(),
            pronunciation: pronunciation.clean_field(),
            flags: FlagSet::default(),
            tags: String::new(),
            source: String::new(),
        }
    }

    pub fn with_flags(mut self, flags: &str) -> Self {
        self.flags = FlagSet::new(flags);
        self
    }

    pub fn with_tags(mut self, tags: &str) -> Self {
        self.tags = tags.clean_field();
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.clean_field();
        self
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn append_flags(&mut self, flags: &str) {
        self.flags.append(flags);
    }

    pub fn append_tags(&mut self, tags: &str) {
        let tags = tags.clean_field();
        if tags.is_empty() {
            return;
        }
        if !self.tags.is_empty() {
            self.tags.push(' ');
        }
        self.tags.push_str(&tags);
    }

    pub fn should_be_saved(&self, include: &[String], exclude: &[String]) -> bool {
        filter::should_keep(&self.flags, include, exclude)
    }

    pub fn uuid_stem(&self) -> String {
        identity::uuid_stem(&self.word, &self.flags, &self.source)
    }

    /// Expand the card into its import rows: one per pair of non-empty
    /// rendered fields, always in the order WT, WP, PT, all sharing one
    /// identity stem. A card that renders to nothing at all expands to
    /// zero rows.
    pub fn rows(&self, id_prefix: &str) -> Vec<DeckRow> {
        let word = render::dress_word(&self.word, &self.flags);
        let translation = render::dress_translation(&self.translation, &self.flags);
        let pronunciation = render::dress_pronunciation(&self.pronunciation, &self.flags);

        if word.is_empty() && translation.is_empty() && pronunciation.is_empty() {
            return Vec::new();
        }

        let stem = self.uuid_stem();

        let mut rows = Vec::new();
        if !word.is_empty() && !translation.is_empty() {
            rows.push(self.row(&stem, id_prefix, RowKind::WordTranslation, &word, &translation));
        }
        if !word.is_empty() && !pronunciation.is_empty() {
            rows.push(self.row(&stem, id_prefix, RowKind::WordPronunciation, &word, &pronunciation));
        }
        if !pronunciation.is_empty() && !translation.is_empty() {
            rows.push(self.row(
                &stem,
                id_prefix,
                RowKind::PronunciationTranslation,
                &pronunciation,
                &translation,
            ));
        }
        rows
    }

    fn row(&self, stem: &str, id_prefix: &str, kind: RowKind, front: &str, back: &str) -> DeckRow {
        DeckRow {
            id: format!("{}{}{}", id_prefix, kind.suffix(), stem),
            kind,
            front: format!("{}<br /><br />{}", kind.ask_front(), front),
            back: format!("{}<br /><br />{}", kind.ask_back(), back),
            tags: self.tags.clone(),
        }
    }
}
