//! Binary search tree preorder validation.

use std::num::ParseIntError;

/// Returns whether `sequence` is the preorder traversal of some binary search tree.
///
/// Single pass with a descending stack. Popping every entry smaller than the
/// incoming value closes those left subtrees, and the last popped value becomes
/// the lower bound for everything that follows. A value below that bound can
/// no longer be placed anywhere. Values equal to the bound are accepted, so
/// `[5, 5, 5]` is valid. Empty and single-element sequences are trivially valid.
pub fn is_valid_bst_preorder(sequence: &[i64]) -> bool {
    let mut stack: Vec<i64> = Vec::with_capacity(sequence.len());
    // No i64 is below i64::MIN, so this acts as negative infinity.
    let mut lower_bound = i64::MIN;

    for &value in sequence {
        if value < lower_bound {
            return false;
        }
        while let Some(&top) = stack.last() {
            if top >= value {
                break;
            }
            lower_bound = top;
            stack.pop();
        }
        stack.push(value);
    }
    true
}

/// Parses a comma-separated list of integers. Blank input is the empty sequence.
pub fn parse_sequence(raw: &str) -> Result<Vec<i64>, ParseIntError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|token| token.trim().parse::<i64>())
        .collect()
}
