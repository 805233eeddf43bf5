//! Attribute modifier derivation.

/// Derive the modifier for an attribute score: `floor((score - 10) / 2)`.
///
/// Uses floor division (round toward negative infinity), not truncation.
/// The distinction matters for odd scores below 10: score 9 gives -1,
/// not 0, and score 1 gives -5.
///
/// # Examples
///
/// ```rust
/// use charsheet::modifier;
///
/// assert_eq!(modifier(10), 0);
/// assert_eq!(modifier(12), 1);
/// assert_eq!(modifier(9), -1);
/// assert_eq!(modifier(20), 5);
/// ```
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Format a modifier with an explicit sign, the way sheets display it.
///
/// ```rust
/// use charsheet::format_modifier;
///
/// assert_eq!(format_modifier(1), "+1");
/// assert_eq!(format_modifier(0), "+0");
/// assert_eq!(format_modifier(-2), "-2");
/// ```
pub fn format_modifier(modifier: i32) -> String {
    format!("{:+}", modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_table() {
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(20), 5);
        assert_eq!(modifier(1), -5);
    }

    #[test]
    fn test_floor_division_law() {
        // modifier(score) == modifier(score + 2) - 1, everywhere.
        for score in -5..=30 {
            assert_eq!(modifier(score), modifier(score + 2) - 1, "score {score}");
        }
    }
}
