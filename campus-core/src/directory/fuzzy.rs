//! Approximate substring scoring.
//!
//! A pattern matches a text when it occurs somewhere in it with at most
//! `floor(threshold * pattern_len)` edits (insertions, deletions or
//! substitutions). The score is `edits / pattern_len`, floored at
//! [`MIN_SCORE`]; a text equal to the whole pattern scores exactly 0, and 1
//! means no match. Position in the text does not matter. Matching is
//! case-insensitive.
//!
//! Several weighted keys of one item are combined the way Fuse-style
//! searchers do: each matching key contributes `score ^ (weight * norm)`,
//! where `norm` shrinks with the number of words in the field.

/// Lowest score a match can have.
pub const MIN_SCORE: f64 = 0.001;

/// Longest pattern handled in one bit-parallel pass.
const WORD_BITS: usize = 64;

/// One searchable field of `T` and its relative weight.
pub struct WeightedKey<T> {
    pub weight: f64,
    pub get: fn(&T) -> &str,
}

/// Score `pattern` against `text`. `None` when it does not match within the
/// threshold.
pub fn score(pattern: &str, text: &str, threshold: f64) -> Option<f64> {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();
    if pattern.is_empty() {
        return Some(MIN_SCORE);
    }
    if pattern == text {
        return Some(0.0);
    }

    // Long patterns are scored chunk by chunk; a chunk that misses counts as 1
    let chunks: Vec<&[char]> = pattern.chunks(WORD_BITS).collect();
    let mut total = 0.0;
    let mut matched = false;
    for chunk in &chunks {
        match score_chunk(chunk, &text, threshold) {
            Some(s) => {
                matched = true;
                total += s;
            }
            None => total += 1.0,
        }
    }

    matched.then(|| total / chunks.len() as f64)
}

fn score_chunk(pattern: &[char], text: &[char], threshold: f64) -> Option<f64> {
    let len = pattern.len();
    let max_errors = ((threshold * len as f64).floor() as usize).min(len - 1);
    let errors = min_edits(pattern, text, max_errors)?;
    Some((errors as f64 / len as f64).max(MIN_SCORE))
}

/// Fewest edits (up to `max_errors`) with which `pattern` occurs in `text`.
///
/// Shift-and with errors: bit `i` of `state[d]` is set when the first `i + 1`
/// pattern chars match a suffix of the text read so far with at most `d`
/// edits.
fn min_edits(pattern: &[char], text: &[char], max_errors: usize) -> Option<usize> {
    let len = pattern.len();
    debug_assert!(len > 0 && len <= WORD_BITS);

    let mut masks: Vec<(char, u64)> = Vec::new();
    for (i, c) in pattern.iter().enumerate() {
        match masks.iter_mut().find(|(m, _)| m == c) {
            Some((_, bits)) => *bits |= 1 << i,
            None => masks.push((*c, 1 << i)),
        }
    }
    let mask_for = |c: char| {
        masks
            .iter()
            .find(|(m, _)| *m == c)
            .map(|(_, bits)| *bits)
            .unwrap_or(0)
    };

    let goal = 1u64 << (len - 1);
    let mut state: Vec<u64> = (0..=max_errors).map(|d| (1u64 << d) - 1).collect();
    let mut best: Option<usize> = None;

    for &c in text {
        let bits = mask_for(c);

        let mut prev_old = state[0];
        state[0] = ((state[0] << 1) | 1) & bits;
        for d in 1..=max_errors {
            let old = state[d];
            state[d] = (((old << 1) | 1) & bits) | prev_old | ((prev_old | state[d - 1]) << 1) | 1;
            prev_old = old;
        }

        if let Some(d) = state.iter().position(|s| s & goal != 0) {
            if best.map_or(true, |b| d < b) {
                best = Some(d);
            }
            if d == 0 {
                break;
            }
        }
    }

    best
}

/// Length normalisation for a field: `1 / sqrt(words)`, to 3 decimals.
fn field_norm(text: &str) -> f64 {
    let words = text.split(' ').filter(|w| !w.is_empty()).count().max(1);
    let norm = 1.0 / (words as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}

/// Rank `items` against `pattern`. Items where no key matches are dropped;
/// the rest are sorted by combined score, best first, keeping input order
/// on ties.
pub fn rank<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    pattern: &str,
    keys: &[WeightedKey<T>],
    threshold: f64,
) -> Vec<(&'a T, f64)> {
    let total_weight: f64 = keys.iter().map(|k| k.weight).sum();

    let mut ranked: Vec<(usize, &'a T, f64)> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let mut combined = 1.0;
            let mut any = false;
            for key in keys {
                let text = (key.get)(item);
                if let Some(s) = score(pattern, text, threshold) {
                    any = true;
                    // Zero would erase the other keys from the product
                    let s = if s == 0.0 { f64::EPSILON } else { s };
                    let weight = key.weight / total_weight;
                    combined *= s.powf(weight * field_norm(text));
                }
            }
            any.then_some((idx, item, combined))
        })
        .collect();

    ranked.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));
    ranked.into_iter().map(|(_, item, s)| (item, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.35;

    #[test]
    fn test_exact_substring_scores_minimum() {
        assert_eq!(score("desk", "IT Service Desk", THRESHOLD), Some(MIN_SCORE));
        assert_eq!(score("WI-FI", "Accounts, Wi-Fi, Canvas", THRESHOLD), Some(MIN_SCORE));
    }

    #[test]
    fn test_whole_field_match_scores_zero() {
        assert_eq!(score("library", "Library", THRESHOLD), Some(0.0));
        assert_eq!(score("library", "Library Help", THRESHOLD), Some(MIN_SCORE));
    }

    #[test]
    fn test_single_typo_within_threshold() {
        // one missing letter over seven chars
        let s = score("secrity", "Campus Security", THRESHOLD).unwrap();
        assert!((s - 1.0 / 7.0).abs() < 1e-9, "score {s}");
        assert!(score("libary", "Library Help", THRESHOLD).is_some());
    }

    #[test]
    fn test_too_many_edits_is_no_match() {
        assert_eq!(score("xyz", "Campus Security", THRESHOLD), None);
        assert_eq!(score("parking", "Library Help", THRESHOLD), None);
    }

    #[test]
    fn test_short_patterns_need_exact_hits() {
        // two chars allow zero edits at 0.35
        assert!(score("it", "IT Support", THRESHOLD).is_some());
        assert_eq!(score("iq", "IT Support", THRESHOLD), None);
    }

    #[test]
    fn test_long_pattern_is_chunked() {
        let text = "a".repeat(80);
        let pattern = "a".repeat(70);
        assert_eq!(score(&pattern, &text, THRESHOLD), Some(MIN_SCORE));
    }

    #[test]
    fn test_field_norm() {
        assert_eq!(field_norm("Desk"), 1.0);
        assert_eq!(field_norm("IT Service Desk"), 0.577);
    }

    struct Item {
        name: &'static str,
        note: &'static str,
    }

    #[test]
    fn test_rank_prefers_heavier_key_and_drops_misses() {
        let items = vec![
            Item { name: "Other", note: "mentions wellbeing" },
            Item { name: "Wellbeing", note: "counselling" },
            Item { name: "Nothing", note: "here" },
        ];
        let keys: [WeightedKey<Item>; 2] = [
            WeightedKey { weight: 0.7, get: |i: &Item| i.name },
            WeightedKey { weight: 0.3, get: |i: &Item| i.note },
        ];

        let ranked = rank(&items, "wellbeing", &keys, THRESHOLD);
        let names: Vec<&str> = ranked.iter().map(|(i, _)| i.name).collect();
        assert_eq!(names, vec!["Wellbeing", "Other"]);
    }

    #[test]
    fn test_exact_name_outranks_substring_with_extra_hits() {
        let items = vec![
            Item { name: "Library Services", note: "library" },
            Item { name: "Library", note: "opening hours and loans" },
        ];
        let keys: [WeightedKey<Item>; 2] = [
            WeightedKey { weight: 0.6, get: |i: &Item| i.name },
            WeightedKey { weight: 0.3, get: |i: &Item| i.note },
        ];

        let ranked = rank(&items, "library", &keys, THRESHOLD);
        let names: Vec<&str> = ranked.iter().map(|(i, _)| i.name).collect();
        assert_eq!(names, vec!["Library", "Library Services"]);
        assert!(ranked[0].1 > 0.0);
    }
}
