use tracing::debug;

use crate::domain::Domain;

/// Answers "is this domain under any block-list entry" against a minimal
/// forbidden set: sorted by canonical key, with every entry that already has
/// an ancestor in the set dropped at construction time.
#[derive(Debug, Default, Clone)]
pub struct DomainChecker {
    forbidden: Vec<Domain>,
}

impl DomainChecker {
    pub fn new(mut domains: Vec<Domain>) -> Self {
        let input_len = domains.len();
        domains.sort_unstable_by(|lhs, rhs| lhs.canonical_key().cmp(rhs.canonical_key()));
        // After sorting, all descendants of a retained entry form a contiguous
        // run right behind it (their keys share its key as prefix), so one
        // adjacent pass removes every redundant entry.
        domains.dedup_by(|candidate, retained| retained.is_ancestor_of(candidate));
        debug!(input_len, retained = domains.len(), "built forbidden set");
        Self { forbidden: domains }
    }

    /// True if `domain` equals or is a subdomain of any retained entry.
    ///
    /// The only candidate ancestor is the last retained entry whose key is
    /// lexicographically <= the query's key: anything after it is > the query,
    /// and anything before it that were an ancestor would have swallowed the
    /// candidate itself during dedup.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        let upper = self
            .forbidden
            .partition_point(|entry| entry.canonical_key() <= domain.canonical_key());
        match upper.checked_sub(1) {
            Some(idx) => self.forbidden[idx].is_ancestor_of(domain),
            None => false,
        }
    }

    /// Number of retained block-list entries.
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::DomainChecker;
    use crate::domain::Domain;

    fn checker(entries: &[&str]) -> DomainChecker {
        entries.iter().copied().map(Domain::new).collect()
    }

    #[test]
    fn test_empty_blocklist_forbids_nothing() {
        let checker = checker(&[]);
        assert!(checker.is_empty());
        assert!(!checker.is_forbidden(&Domain::new("ya.ru")));
    }

    #[test]
    fn test_exact_and_subdomain_matches() {
        let checker = checker(&["ya.ru", "maps.me", "com"]);
        assert!(checker.is_forbidden(&Domain::new("ya.ru")));
        assert!(checker.is_forbidden(&Domain::new("m.ya.ru")));
        assert!(checker.is_forbidden(&Domain::new("moscow.m.ya.ru")));
        assert!(checker.is_forbidden(&Domain::new("ya.com")));
        assert!(checker.is_forbidden(&Domain::new("maps.com")));
    }

    #[test]
    fn test_non_matches() {
        let checker = checker(&["ya.ru", "maps.me", "com"]);
        assert!(!checker.is_forbidden(&Domain::new("com.m")));
        assert!(!checker.is_forbidden(&Domain::new("maps.ru")));
        assert!(!checker.is_forbidden(&Domain::new("ru")));
        assert!(!checker.is_forbidden(&Domain::new("zcom")));
    }

    #[test]
    fn test_siblings_do_not_forbid_each_other() {
        let checker = checker(&["x.b.c"]);
        assert!(!checker.is_forbidden(&Domain::new("y.b.c")));
        assert!(checker.is_forbidden(&Domain::new("a.x.b.c")));
    }

    #[test]
    fn test_redundant_descendants_are_dropped() {
        let checker = checker(&["maps.me", "m.maps.me", "edits.m.maps.me"]);
        assert_eq!(checker.len(), 1);
        assert!(checker.is_forbidden(&Domain::new("m.maps.me")));
        assert!(checker.is_forbidden(&Domain::new("other.maps.me")));
    }

    #[test]
    fn test_duplicate_entries_are_dropped() {
        let checker = checker(&["ya.ru", "ya.ru", "ya.ru"]);
        assert_eq!(checker.len(), 1);
        assert!(checker.is_forbidden(&Domain::new("ya.ru")));
    }

    #[test]
    fn test_verdicts_do_not_depend_on_input_order() {
        let entries = ["com", "m.maps.me", "ya.ru", "maps.me"];
        let reversed: Vec<&str> = entries.iter().rev().copied().collect();
        let forward = checker(&entries);
        let backward = checker(&reversed);

        for query in ["ya.ru", "ya.com", "m.ya.ru", "com.m", "maps.me", "x.maps.me", "ru"] {
            let domain = Domain::new(query);
            assert_eq!(
                forward.is_forbidden(&domain),
                backward.is_forbidden(&domain),
                "verdict diverged for {query}"
            );
        }
    }

    #[test]
    fn test_adding_redundant_descendant_changes_nothing() {
        let minimal = checker(&["b.c"]);
        let padded = checker(&["b.c", "a.b.c"]);
        assert_eq!(padded.len(), minimal.len());
        for query in ["b.c", "a.b.c", "z.a.b.c", "x.b.c", "b.c.d", "c"] {
            let domain = Domain::new(query);
            assert_eq!(minimal.is_forbidden(&domain), padded.is_forbidden(&domain));
        }
    }
}
