//! Similarity Scorer: edit-distance based closeness of two words
//!
//! similarity = (len(longer) - levenshtein(longer, shorter)) / len(longer)
//!
//! Only the longer word's length is the denominator. This is not the usual
//! normalized Levenshtein ratio, and historical scores depend on it.
//!
//! Lengths and edits are in UTF-16 code units, the unit stored scores were
//! computed in. A character outside the BMP is two units.

/// Similarity of two words in `[0.0, 1.0]`. Two empty words score 1.0.
///
/// Lengths are counted in UTF-16 code units.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();

    let (longer, shorter) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if longer.is_empty() {
        return 1.0;
    }

    let distance = edit_distance(longer, shorter);
    (longer.len() - distance) as f64 / longer.len() as f64
}

/// Levenshtein distance using a single rolling cost row over `longer`.
///
/// O(|longer| * |shorter|) time, O(|longer|) space.
fn edit_distance<T: PartialEq>(longer: &[T], shorter: &[T]) -> usize {
    let mut costs: Vec<usize> = (0..=longer.len()).collect();

    for (i, s) in shorter.iter().enumerate() {
        // diagonal (north-west) value before it gets overwritten
        let mut nw = costs[0];
        costs[0] = i + 1;
        for (j, l) in longer.iter().enumerate() {
            let substitute = if s == l { nw } else { nw + 1 };
            let cost = (1 + costs[j + 1].min(costs[j])).min(substitute);
            nw = costs[j + 1];
            costs[j + 1] = cost;
        }
    }

    costs[longer.len()]
}

// =============================================================================
// TESTS
// =============================================================================
