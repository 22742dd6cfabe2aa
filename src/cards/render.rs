use std::sync::OnceLock;

use regex::Regex;

use super::{
    flags::{
        Flag,
        FlagSet,
    },
    annotate_flags,
    normalize,
};
use crate::core::utils::CleanField;

// Exactly one *stressed* syllable, anywhere in the string.
fn stress_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^*]*)\*([^*]+)\*([^*]*)$").unwrap())
}

/// The word side of a card: normalized, sized up, and colored by
/// grammatical gender. Masculine wins when a card carries both.
pub fn dress_word(word: &str, flags: &FlagSet) -> String {
    let word = normalize(word, flags);
    if word.is_empty() {
        return word;
    }
    let mut style = String::from("font-size:24pt;");
    if flags.contains(Flag::Masculine) {
        style.push_str("color:blue;");
    } else if flags.contains(Flag::Feminine) {
        style.push_str("color:red;");
    }
    format!("<span style=\"{}\">{}</span>", style, word)
}

/// The translation side, with the flag annotation appended in small
/// print when the grammar has anything to say.
pub fn dress_translation(translation: &str, flags: &FlagSet) -> String {
    let translation = translation.clean_field();
    if translation.is_empty() {
        return translation;
    }
    let mut text = format!("<span style=\"font-size:18pt;\">{}</span>", translation);
    let annotation = annotate_flags(flags);
    if !annotation.is_empty() {
        text.push_str(&format!(
            "<span style=\"font-size:12pt;\"><br />({})</span>",
            annotation
        ));
    }
    text
}

/// The pronunciation side. A `*core*` pair marks the stressed syllable,
/// which gets bold red inside the surrounding span; anything else is
/// rendered whole.
pub fn dress_pronunciation(pronunciation: &str, _flags: &FlagSet) -> String {
    let pronunciation = pronunciation.clean_field();
    if pronunciation.is_empty() {
        return pronunciation;
    }
    if let Some(caps) = stress_pattern().captures(&pronunciation) {
        format!(
            "<span style=\"font-size:18pt;\">{}<span style=\"color:red;font-weight:bold;\">{}</span>{}</span>",
            &caps[1], &caps[2], &caps[3]
        )
    } else {
        format!("<span style=\"font-size:18pt;\">{}</span>", pronunciation)
    }
}
