//! String similarity used by the fuzzy stages.
//!
//! The resolver only depends on [`Similarity`]; swap the implementation to
//! change how names are compared without touching the pipeline.

use super::normalize::normalize_name;

/// Given two names, return a similarity score in `[0, 1]`. The resolver
/// skips candidates scored NaN.
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let score = self(a, b);
        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Normalized Levenshtein similarity over token-sorted names, so
/// "Brown AJ" and "A.J. Brown" compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortRatio;

impl Similarity for TokenSortRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let (a, b) = (sorted_tokens(a), sorted_tokens(b));
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        strsim::normalized_levenshtein(&a, &b).clamp(0.0, 1.0)
    }
}

/// Jaro-Winkler over normalized names. Rewards shared prefixes, which suits
/// short first-name misspellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(&normalize_name(a), &normalize_name(b)).clamp(0.0, 1.0)
    }
}

fn sorted_tokens(name: &str) -> String {
    let normalized = normalize_name(name);
    let mut tokens: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_sort_ignores_order_and_case() {
        let sim = TokenSortRatio;
        assert_eq!(sim.similarity("Brown AJ", "A.J. Brown"), 1.0);
        assert_eq!(sim.similarity("", ""), 1.0);
    }

    #[test]
    fn test_token_sort_scores_misspelling_high() {
        let sim = TokenSortRatio;
        let score = sim.similarity("TreVeyon Henderson", "Tre'Veon Henderson");
        assert!(score > 0.85, "score was {}", score);
        assert!(score < 1.0);
    }

    #[test]
    fn test_token_sort_scores_different_people_low() {
        let sim = TokenSortRatio;
        assert!(sim.similarity("Josh Allen", "Keenan Allen") < 0.75);
        assert!(sim.similarity("Josh Allen", "Drake Maye") < 0.5);
    }

    #[test]
    fn test_jaro_winkler_in_range() {
        let sim = JaroWinkler;
        let score = sim.similarity("DeVon Achane", "De'Von Achane");
        assert!(score > 0.9 && score <= 1.0);
        assert_eq!(sim.similarity("x", "x"), 1.0);
    }

    #[test]
    fn test_closure_similarity_is_clamped() {
        let always_high = |_: &str, _: &str| 3.0_f64;
        assert_eq!(always_high.similarity("a", "b"), 1.0);
        let negative = |_: &str, _: &str| -1.0_f64;
        assert_eq!(negative.similarity("a", "b"), 0.0);
        let undefined = |_: &str, _: &str| f64::NAN;
        assert_eq!(undefined.similarity("a", "b"), 0.0);
    }
}
