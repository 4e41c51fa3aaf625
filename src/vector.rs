use std::collections::HashMap;

/// Sparse term-frequency vector: token -> occurrence count.
pub type TermFreq = HashMap<String, u32>;

pub fn vectorize(tokens: &[String]) -> TermFreq {
    let mut tf = TermFreq::with_capacity(tokens.len());
    for t in tokens {
        *tf.entry(t.clone()).or_insert(0) += 1;
    }
    tf
}

#[inline]
fn magnitude(v: &TermFreq) -> f64 {
    v.values()
        .map(|&c| {
            let c = c as f64;
            c * c
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine of the angle between two term-frequency vectors, in `[0, 1]`.
/// Returns exactly `0.0` when either vector is empty.
pub fn cosine_similarity(a: &TermFreq, b: &TermFreq) -> f64 {
    let denom = magnitude(a) * magnitude(b);
    if denom == 0.0 {
        return 0.0;
    }

    // Only shared keys contribute; walk the smaller map.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    // Seeded fold: an empty `sum()` of f64 is -0.0.
    let dot = small
        .iter()
        .filter_map(|(k, &x)| large.get(k).map(|&y| x as f64 * y as f64))
        .fold(0.0f64, |acc, p| acc + p);

    (dot / denom).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(pairs: &[(&str, u32)]) -> TermFreq {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn vectorize_counts_occurrences() {
        let v = vectorize(&toks(&["reset", "password", "reset"]));
        assert_eq!(v.len(), 2);
        assert_eq!(v["reset"], 2);
        assert_eq!(v["password"], 1);
        assert!(vectorize(&[]).is_empty());
    }

    #[test]
    fn self_similarity_is_one() {
        let v = tf(&[("order", 2), ("track", 2), ("status", 1)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_vector_scores_exactly_zero() {
        let v = tf(&[("order", 1)]);
        let empty = TermFreq::new();
        assert_eq!(cosine_similarity(&v, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &v), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = tf(&[("asdf", 1), ("qwerty", 1)]);
        let b = tf(&[("password", 1)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert!(!cosine_similarity(&a, &b).is_sign_negative());
        assert!(!cosine_similarity(&b, &a).is_sign_negative());
    }

    #[test]
    fn similarity_is_symmetric_and_bounded() {
        let a = tf(&[("how", 1), ("reset", 1), ("password", 1)]);
        let b = tf(&[
            ("how", 1),
            ("reset", 2),
            ("password", 2),
            ("forgot", 1),
            ("change", 1),
            ("login", 1),
        ]);
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        assert_eq!(ab, ba);
        assert!((0.0..=1.0).contains(&ab));
        // dot = 5, |a| = sqrt(3), |b| = sqrt(12)
        assert!((ab - 5.0 / 6.0).abs() < 1e-12);
    }
}
