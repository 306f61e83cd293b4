#[derive(Debug, Clone)]
pub struct Resolution {
    pub name: Option<String>,
    pub score: f64,
}

impl Resolution {
    fn unresolved(score: f64) -> Self {
        Self { name: None, score }
    }
}

// Acceptance requires the similarity to be strictly greater than the
// threshold; equality rejects. Ties keep the earliest candidate.
pub fn resolve(query: &str, candidates: &[String], threshold: f64) -> Resolution {
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = strsim::normalized_levenshtein(query, candidate);
        let improves = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if improves {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((name, score)) if score > threshold => Resolution {
            name: Some(name.to_string()),
            score,
        },
        Some((_, score)) => Resolution::unresolved(score),
        None => Resolution::unresolved(0.0),
    }
}

pub fn resolve_exact(query: &str, candidates: &[String]) -> Resolution {
    if candidates.iter().any(|candidate| candidate == query) {
        Resolution {
            name: Some(query.to_string()),
            score: 1.0,
        }
    } else {
        Resolution::unresolved(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn identical_candidate_resolves_with_maximal_score() {
        let resolution = resolve("alice_smith", &names(&["alice_smith"]), 0.95);
        assert_eq!(resolution.name.as_deref(), Some("alice_smith"));
        assert_eq!(resolution.score, 1.0);
    }

    #[test]
    fn score_equal_to_threshold_is_rejected() {
        // one edit over four characters: similarity exactly 0.75
        let resolution = resolve("abcd", &names(&["abcx"]), 0.75);
        assert!(resolution.name.is_none());
        assert!((resolution.score - 0.75).abs() < 1e-9);

        let accepted = resolve("abcd", &names(&["abcx"]), 0.74);
        assert_eq!(accepted.name.as_deref(), Some("abcx"));
    }

    #[test]
    fn ties_keep_the_first_seen_candidate() {
        // both candidates are one edit away from the query
        let resolution = resolve("ab", &names(&["ax", "xb"]), 0.4);
        assert_eq!(resolution.name.as_deref(), Some("ax"));
    }

    #[test]
    fn empty_candidate_set_never_resolves() {
        let resolution = resolve("alice_smith", &[], 0.0);
        assert!(resolution.name.is_none());
        assert_eq!(resolution.score, 0.0);
    }

    #[test]
    fn exact_mode_requires_identical_spelling() {
        let candidates = names(&["alice_smith", "bob_jones"]);

        let hit = resolve_exact("bob_jones", &candidates);
        assert_eq!(hit.name.as_deref(), Some("bob_jones"));
        assert_eq!(hit.score, 1.0);

        let miss = resolve_exact("bob_jonez", &candidates);
        assert!(miss.name.is_none());
        assert_eq!(miss.score, 0.0);
    }
}
