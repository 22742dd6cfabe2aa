use super::flags::FlagSet;
use crate::core::utils::CleanField;

// A predicate is satisfied when every one of its characters appears in
// the card's raw flag string. An empty predicate matches nothing.
fn has_all_flags(flags: &FlagSet, wanted: &str) -> bool {
    let wanted = wanted.clean_field();
    if wanted.is_empty() {
        return false;
    }
    wanted.chars().all(|c| flags.raw().contains(c))
}

fn matches_any(flags: &FlagSet, predicates: &[String]) -> bool {
    predicates.iter().any(|p| has_all_flags(flags, p))
}

/// Decide whether a card survives the include/exclude filters.
///
/// Each predicate is conjunctive over its characters; the lists are
/// disjunctive. With both lists empty everything passes; an include
/// list alone is a whitelist; an exclude list alone is a blacklist;
/// with both present, inclusion has priority.
pub fn should_keep(flags: &FlagSet, include: &[String], exclude: &[String]) -> bool {
    if include.is_empty() && exclude.is_empty() {
        return true;
    }

    let included = matches_any(flags, include);
    if exclude.is_empty() {
        return included;
    }
    if include.is_empty() {
        return !matches_any(flags, exclude);
    }

    included || !matches_any(flags, exclude)
}
