use sha2::{
    Digest,
    Sha256,
};
use uuid::Uuid;

use super::{
    flags::FlagSet,
    normalize,
};

const SOURCE_SEPARATOR: char = '|';

/// Content-addressed identity stem shared by all rows of a card.
///
/// The word is normalized with the retention sentinel forced on, so the
/// stem never depends on whether a re-import happens to toggle `.` in
/// the flags. A non-empty source joins the hash input, keeping words
/// scraped from different pages distinct.
///
/// A card whose word normalizes to nothing and that carries no source
/// has nothing to address; it falls back to a random id and gets a new
/// identity on every run.
pub fn uuid_stem(word: &str, flags: &FlagSet, source: &str) -> String {
    let mut keyed = flags.clone();
    keyed.append(".");

    let mut rep = normalize(word, &keyed);
    if !source.is_empty() {
        rep.push(SOURCE_SEPARATOR);
        rep.push_str(source);
    }

    if rep.is_empty() {
        return Uuid::new_v4().simple().to_string();
    }

    let mut hasher = Sha256::new();
    hasher.update(rep.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_is_idempotent() {
        let flags = FlagSet::new("Nsa");
        let first = uuid_stem("שָׁלוֹם", &flags, "test#1");
        let second = uuid_stem("שָׁלוֹם", &flags, "test#1");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_stem_ignores_retention_sentinel() {
        // identity always hashes the pointed form, whatever the card's
        // own flags say about nekudot
        let with = uuid_stem("שָׁלוֹם", &FlagSet::new("Nsa."), "test#1");
        let without = uuid_stem("שָׁלוֹם", &FlagSet::new("Nsa"), "test#1");
        assert_eq!(with, without);
        // sha256("שָׁלוֹם|test#1")
        assert_eq!(with, "6bfcb0530d9db916a6f5c07a840081886e2755e06c49d98ed98b68fb81cb1d66");
    }

    #[test]
    fn test_source_participates_in_the_hash() {
        let flags = FlagSet::new("");
        let here = uuid_stem("שָׁלוֹם", &flags, "list.csv#3");
        let there = uuid_stem("שָׁלוֹם", &flags, "list.csv#4");
        assert_ne!(here, there);
        // sha256("שָׁלוֹם")
        assert_eq!(
            uuid_stem("שָׁלוֹם", &flags, ""),
            "e1e7fe52c28a29e6247a5960f2942605e32ac92580e2170d03944646cdd29b0d"
        );
    }

    #[test]
    fn test_empty_word_with_source_still_hashes() {
        let a = uuid_stem("", &FlagSet::new(""), "page#1");
        let b = uuid_stem("", &FlagSet::new(""), "page#1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fallback_id_is_unstable() {
        let a = uuid_stem("", &FlagSet::new(""), "");
        let b = uuid_stem("", &FlagSet::new(""), "");
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }
}
