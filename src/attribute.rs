//! Attributes and the point-buy allocator.
//!
//! Provides the fixed `Attribute` reference list and the `AttributeSet`
//! value object. An `AttributeSet` is never partially invalid: every
//! adjustment either produces a fresh set that satisfies both the
//! per-attribute floor and the pool ceiling, or is rejected with the
//! caller's set untouched.

use crate::error::RulesError;
use crate::modifier::modifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum permissible sum of all attribute scores.
pub const POOL_CEILING: i32 = 70;

/// Score every attribute starts at.
pub const DEFAULT_SCORE: i32 = 10;

/// The fixed set of core attributes.
///
/// Serializes as its name string, so it can key a JSON map in the
/// persisted character document.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// All attributes, in display order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    /// The attribute's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Constitution => "Constitution",
            Attribute::Intelligence => "Intelligence",
            Attribute::Wisdom => "Wisdom",
            Attribute::Charisma => "Charisma",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A full set of attribute scores.
///
/// Invariants: every score is at least 1 and the sum of all scores is at
/// most [`POOL_CEILING`]. The default configuration (every attribute at
/// 10, total 60) satisfies both, and [`adjust`](AttributeSet::adjust)
/// enforces them on every mutation.
///
/// # Examples
///
/// ```rust
/// use charsheet::{Attribute, AttributeSet};
///
/// let attrs = AttributeSet::new();
/// assert_eq!(attrs.score(Attribute::Strength), 10);
/// assert_eq!(attrs.total(), 60);
///
/// let raised = attrs.adjust(Attribute::Strength, 1).unwrap();
/// assert_eq!(raised.score(Attribute::Strength), 11);
/// // The original set is untouched
/// assert_eq!(attrs.score(Attribute::Strength), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    scores: BTreeMap<Attribute, i32>,
}

impl AttributeSet {
    /// Create the default set: every attribute at [`DEFAULT_SCORE`].
    pub fn new() -> Self {
        Self {
            scores: Attribute::ALL
                .iter()
                .map(|&attr| (attr, DEFAULT_SCORE))
                .collect(),
        }
    }

    /// The score for one attribute.
    pub fn score(&self, attribute: Attribute) -> i32 {
        self.scores
            .get(&attribute)
            .copied()
            .unwrap_or(DEFAULT_SCORE)
    }

    /// The modifier derived from one attribute's score.
    pub fn modifier_of(&self, attribute: Attribute) -> i32 {
        modifier(self.score(attribute))
    }

    /// The sum of all scores.
    pub fn total(&self) -> i32 {
        self.scores.values().sum()
    }

    /// Adjust one attribute by a signed delta, returning the new set.
    ///
    /// Rejects (leaving `self` untouched) if the adjusted score would
    /// drop below 1, or if the new total would exceed [`POOL_CEILING`].
    /// Only the targeted attribute changes; skill point state is never
    /// touched here, even though the skill budget reads attributes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use charsheet::{Attribute, AttributeSet, RulesError};
    ///
    /// let attrs = AttributeSet::new();
    /// let err = attrs.adjust(Attribute::Wisdom, -10).unwrap_err();
    /// assert!(matches!(err, RulesError::AttributeFloor { .. }));
    /// assert!(err.is_rejection());
    /// ```
    pub fn adjust(&self, attribute: Attribute, delta: i32) -> Result<AttributeSet, RulesError> {
        let current = self.score(attribute);
        let next = current + delta;

        if next < 1 {
            return Err(RulesError::AttributeFloor {
                attribute,
                attempted: next,
            });
        }

        let new_total = self.total() - current + next;
        if new_total > POOL_CEILING {
            return Err(RulesError::PoolCeiling {
                attempted: new_total,
                ceiling: POOL_CEILING,
            });
        }

        let mut scores = self.scores.clone();
        scores.insert(attribute, next);
        Ok(AttributeSet { scores })
    }

    /// Iterate over `(attribute, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.iter().map(|&attr| (attr, self.score(attr)))
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_satisfies_pool_ceiling() {
        let attrs = AttributeSet::new();
        assert_eq!(attrs.total(), 60);
        assert!(attrs.total() <= POOL_CEILING);
        for (_, score) in attrs.iter() {
            assert_eq!(score, DEFAULT_SCORE);
        }
    }

    #[test]
    fn test_adjust_changes_only_target() {
        let attrs = AttributeSet::new();
        let raised = attrs.adjust(Attribute::Dexterity, 1).unwrap();

        assert_eq!(raised.score(Attribute::Dexterity), 11);
        for attr in Attribute::ALL {
            if attr != Attribute::Dexterity {
                assert_eq!(raised.score(attr), 10);
            }
        }
    }

    #[test]
    fn test_adjust_rejects_below_floor() {
        let attrs = AttributeSet::new();
        let lowered = attrs.adjust(Attribute::Charisma, -9).unwrap();
        assert_eq!(lowered.score(Attribute::Charisma), 1);

        let err = lowered.adjust(Attribute::Charisma, -1).unwrap_err();
        assert_eq!(
            err,
            RulesError::AttributeFloor {
                attribute: Attribute::Charisma,
                attempted: 0,
            }
        );
    }

    #[test]
    fn test_adjust_rejects_above_ceiling() {
        let mut attrs = AttributeSet::new();
        // Raise Strength to the ceiling: 60 + 10 = 70.
        for _ in 0..10 {
            attrs = attrs.adjust(Attribute::Strength, 1).unwrap();
        }
        assert_eq!(attrs.total(), POOL_CEILING);

        let err = attrs.adjust(Attribute::Strength, 1).unwrap_err();
        assert_eq!(
            err,
            RulesError::PoolCeiling {
                attempted: 71,
                ceiling: POOL_CEILING,
            }
        );
        // Rejection left the set unchanged.
        assert_eq!(attrs.score(Attribute::Strength), 20);
        assert_eq!(attrs.total(), POOL_CEILING);
    }

    #[test]
    fn test_adjust_accepts_larger_deltas() {
        let attrs = AttributeSet::new();
        let raised = attrs.adjust(Attribute::Intelligence, 8).unwrap();
        assert_eq!(raised.score(Attribute::Intelligence), 18);
        assert_eq!(raised.total(), 68);
    }

    #[test]
    fn test_serde_round_trip() {
        let attrs = AttributeSet::new().adjust(Attribute::Strength, 4).unwrap();
        let json = serde_json::to_string(&attrs).unwrap();
        assert!(json.contains("\"Strength\":14"));

        let back: AttributeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }
}
