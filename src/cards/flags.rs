use crate::core::utils::CleanField;

/// Single-character grammatical tag attached to a card. The alphabet is
/// closed and case-sensitive; characters outside it are inert but stay
/// in the raw string so they survive a re-export.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Flag {
    Masculine,
    Feminine,
    Single,
    Plural,
    FirstPerson,
    SecondPerson,
    ThirdPerson,
    Infinitive,
    Present,
    Past,
    Future,
    Imperative,
    Absolute,
    Construct,
    Verb,
    Noun,
    Adjective,
    Adverb,
    KeepNekudot,
}

impl Flag {
    pub fn from_char(c: char) -> Option<Flag> {
        match c {
            'm' => Some(Flag::Masculine),
            'f' => Some(Flag::Feminine),
            's' => Some(Flag::Single),
            'p' => Some(Flag::Plural),
            '1' => Some(Flag::FirstPerson),
            '2' => Some(Flag::SecondPerson),
            '3' => Some(Flag::ThirdPerson),
            'I' => Some(Flag::Infinitive),
            'P' => Some(Flag::Present),
            'S' => Some(Flag::Past),
            'F' => Some(Flag::Future),
            '!' => Some(Flag::Imperative),
            'a' => Some(Flag::Absolute),
            'c' => Some(Flag::Construct),
            'V' => Some(Flag::Verb),
            'N' => Some(Flag::Noun),
            'A' => Some(Flag::Adjective),
            'B' => Some(Flag::Adverb),
            '.' => Some(Flag::KeepNekudot),
            _ => None,
        }
    }
}

/// An unordered, cumulative bag of flags. Keeps the raw character string
/// around: filtering predicates compare raw characters, and unknown
/// characters must persist even though they mean nothing here.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    raw: String,
}

impl FlagSet {
    pub fn new(raw: &str) -> Self {
        FlagSet { raw: raw.clean_field() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn append(&mut self, flags: &str) {
        let flags = flags.clean_field();
        if flags.is_empty() {
            return;
        }
        if !self.raw.is_empty() {
            self.raw.push(' ');
        }
        self.raw.push_str(&flags);
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.raw.chars().any(|c| Flag::from_char(c) == Some(flag))
    }
}

/// Human-readable English annotation for a flag string, e.g. "VS2fs" ->
/// "feminine 2nd person single past". Categories come out in the fixed
/// order gender, person, number, tense, state; a category where both or
/// neither side is present says nothing at all.
pub fn annotate_flags(flags: &FlagSet) -> String {
    let mut annotations: Vec<&str> = Vec::new();

    // gender
    match (flags.contains(Flag::Masculine), flags.contains(Flag::Feminine)) {
        (true, false) => annotations.push("masculine"),
        (false, true) => annotations.push("feminine"),
        _ => {}
    }

    // person: pairwise phrasing when exactly two of the three are set
    let person = (
        flags.contains(Flag::FirstPerson),
        flags.contains(Flag::SecondPerson),
        flags.contains(Flag::ThirdPerson),
    );
    match person {
        (true, true, true) | (false, false, false) => {}
        (true, true, false) => annotations.push("1st/2nd person"),
        (true, false, true) => annotations.push("1st/3rd person"),
        (false, true, true) => annotations.push("2nd/3rd person"),
        (true, false, false) => annotations.push("1st person"),
        (false, true, false) => annotations.push("2nd person"),
        (false, false, true) => annotations.push("3rd person"),
    }

    // number
    match (flags.contains(Flag::Single), flags.contains(Flag::Plural)) {
        (true, false) => annotations.push("single"),
        (false, true) => annotations.push("plural"),
        _ => {}
    }

    // tense: at most one, first match wins
    if flags.contains(Flag::Infinitive) {
        annotations.push("infinitive");
    } else if flags.contains(Flag::Present) {
        annotations.push("present");
    } else if flags.contains(Flag::Past) {
        annotations.push("past");
    } else if flags.contains(Flag::Future) {
        annotations.push("future");
    }

    // absolute vs construct
    match (flags.contains(Flag::Absolute), flags.contains(Flag::Construct)) {
        (true, false) => annotations.push("absolute"),
        (false, true) => annotations.push("construct"),
        _ => {}
    }

    annotations.join(" ")
}

/// Shown verbatim in `--help`; the flag alphabet is part of the input
/// contract of both front-ends.
pub fn flags_help_text() -> &'static str {
    "\
# Available flags:

## Gender

m: masculine, f: feminine

## Number

p: plural, s: single

## Person

1, 2, 3

## Tense & other verb-specific

I: infinitive, P: present, S: past, F: future, !: imperative

## Noun-specific

a: absolute state, c: construct state

## Parts of speech

V: verb, N: noun, A: adjective, B: adverb

## Special handling

- . (dot) - don't remove niqqudot
"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(raw: &str) -> String {
        annotate_flags(&FlagSet::new(raw))
    }

    #[test]
    fn test_gender_cancels_when_both_present() {
        assert_eq!(annotate("mf"), "");
        assert_eq!(annotate("m"), "masculine");
        assert_eq!(annotate("f"), "feminine");
    }

    #[test]
    fn test_person_pairwise_phrasing() {
        assert_eq!(annotate("1"), "1st person");
        assert_eq!(annotate("12"), "1st/2nd person");
        assert_eq!(annotate("13"), "1st/3rd person");
        assert_eq!(annotate("23"), "2nd/3rd person");
        assert_eq!(annotate("123"), "");
    }

    #[test]
    fn test_category_order_is_fixed() {
        assert_eq!(annotate("m1s"), "masculine 1st person single");
        assert_eq!(annotate("s1m"), "masculine 1st person single");
        assert_eq!(annotate("VS2fs"), "feminine 2nd person single past");
    }

    #[test]
    fn test_tense_priority() {
        assert_eq!(annotate("IPSF"), "infinitive");
        assert_eq!(annotate("PSF"), "present");
        assert_eq!(annotate("SF"), "past");
        assert_eq!(annotate("F"), "future");
        // imperative never annotates
        assert_eq!(annotate("!"), "");
    }

    #[test]
    fn test_state_and_unknowns() {
        assert_eq!(annotate("ac"), "");
        assert_eq!(annotate("Nsa"), "single absolute");
        // unknown characters are inert but persist in the raw string
        let set = FlagSet::new("m?z");
        assert_eq!(annotate_flags(&set), "masculine");
        assert_eq!(set.raw(), "m?z");
    }

    #[test]
    fn test_flags_are_case_sensitive() {
        // 'S' is past tense, 's' is single
        assert_eq!(annotate("S"), "past");
        assert_eq!(annotate("s"), "single");
        assert_eq!(annotate("M"), "");
    }

    #[test]
    fn test_append_is_cumulative() {
        let mut set = FlagSet::new("V");
        set.append("2S");
        assert!(set.contains(Flag::Verb));
        assert!(set.contains(Flag::SecondPerson));
        assert!(set.contains(Flag::Past));
        assert_eq!(set.raw(), "V 2S");
        set.append("   ");
        assert_eq!(set.raw(), "V 2S");
    }
}
