use scraper::Html;
use unicode_general_category::{
    get_general_category,
    GeneralCategory,
};

use super::flags::{
    Flag,
    FlagSet,
};
use crate::core::utils::CleanField;

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

pub(crate) fn is_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

/// Collapse a possibly markup-bearing field to its text content. Scraped
/// fields arrive wrapped in the site's own spans, so this is a normal
/// input shape, not an error.
pub fn strip_markup(content: &str) -> String {
    let fragment = Html::parse_fragment(content);
    fragment.root_element().text().collect::<String>().clean_field()
}

/// Reduce a raw word to bare letters, stripping the nekudot unless the
/// flags say otherwise.
///
/// Markup is dropped first, then everything that is not a Unicode Letter
/// or Mark. With the `.` sentinel set the pointed form is returned as is.
/// Otherwise all marks go, with one exception: a 2nd-person past-tense
/// verb form keeps its trailing vowel point, since that point is the only
/// thing distinguishing the masculine and feminine forms.
pub fn normalize(raw: &str, flags: &FlagSet) -> String {
    let text = strip_markup(raw);
    let pointed: String = text.chars().filter(|&c| is_letter(c) || is_mark(c)).collect();

    if flags.contains(Flag::KeepNekudot) {
        return pointed;
    }

    let bare: String = pointed.chars().filter(|&c| !is_mark(c)).collect();

    if flags.contains(Flag::SecondPerson)
        && flags.contains(Flag::Verb)
        && flags.contains(Flag::Past)
    {
        if let Some(last) = pointed.chars().last() {
            if is_mark(last) {
                let mut kept = bare;
                kept.push(last);
                return kept;
            }
        }
    }

    bare
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<span class=\"menukad\">שָׁלוֹם</span>"), "שָׁלוֹם");
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(strip_markup("<div><b>בַּיִת</b></div>"), "בַּיִת");
    }

    #[test]
    fn test_nekudot_are_stripped_by_default() {
        assert_eq!(normalize("שָׁלוֹם", &FlagSet::new("Nsa")), "שלום");
        assert_eq!(normalize("שָׁלוֹם", &FlagSet::new("")), "שלום");
    }

    #[test]
    fn test_sentinel_retains_nekudot() {
        assert_eq!(normalize("שָׁלוֹם", &FlagSet::new(".")), "שָׁלוֹם");
        assert_eq!(normalize("שָׁלוֹם", &FlagSet::new("Nsa.")), "שָׁלוֹם");
    }

    #[test]
    fn test_non_letters_are_dropped() {
        assert_eq!(normalize("שָׁלוֹם! 123", &FlagSet::new("")), "שלום");
        assert_eq!(normalize("...", &FlagSet::new("")), "");
        assert_eq!(normalize("", &FlagSet::new("")), "");
    }

    #[test]
    fn test_markup_is_stripped_before_filtering() {
        let raw = "<span class=\"menukad\">שָׁלוֹם</span>";
        assert_eq!(normalize(raw, &FlagSet::new("")), "שלום");
        assert_eq!(normalize(raw, &FlagSet::new(".")), "שָׁלוֹם");
    }

    #[test]
    fn test_second_person_past_keeps_trailing_mark() {
        // "you (f) said": the final shva is all that separates this form
        // from the masculine one
        let amart = "אָמַרְתְ";
        assert_eq!(normalize(amart, &FlagSet::new("VS2fs")), "אמרתְ");
        // without the full 2+V+S combination the mark goes
        assert_eq!(normalize(amart, &FlagSet::new("V2")), "אמרת");
        assert_eq!(normalize(amart, &FlagSet::new("VSfs")), "אמרת");
        // the sentinel takes precedence over the exception
        assert_eq!(normalize(amart, &FlagSet::new("VS2fs.")), amart);
    }

    #[test]
    fn test_second_person_past_without_trailing_mark() {
        // last character is a letter, so nothing to keep
        assert_eq!(normalize("שלום", &FlagSet::new("VS2")), "שלום");
    }

    #[test]
    fn test_retained_form_is_superset_of_marks() {
        for word in ["שָׁלוֹם", "אָמַרְתְ", "בַּיִת"] {
            let kept = normalize(word, &FlagSet::new("."));
            let bare = normalize(word, &FlagSet::new(""));
            assert!(kept.len() >= bare.len());
            let kept_letters: String = kept.chars().filter(|&c| !is_mark(c)).collect();
            assert_eq!(kept_letters, bare);
        }
    }
}
