//! Error types for the rules engine.
//!
//! All failures raised by the engine are represented by the `RulesError`
//! enum. Rule rejections (a mutation that would break a floor or ceiling
//! invariant) are deliberately distinct from reference errors (a lookup
//! with a name absent from the static tables): the former are a normal
//! outcome of user input, the latter indicate a caller or config bug.

use crate::attribute::Attribute;
use crate::name::Name;
use thiserror::Error;

/// Errors that can occur while applying rules or resolving checks.
///
/// # Examples
///
/// ```rust
/// use charsheet::{Name, RulesError};
///
/// let err = RulesError::UnknownSkill(Name::new("Basket Weaving"));
/// println!("{}", err); // "unknown skill: Basket Weaving"
/// assert!(!err.is_rejection());
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RulesError {
    /// An attribute adjustment would drop the score below 1.
    #[error("{attribute} cannot drop below 1 (attempted {attempted})")]
    AttributeFloor { attribute: Attribute, attempted: i32 },

    /// An attribute adjustment would push the total score above the pool ceiling.
    #[error("attribute pool ceiling of {ceiling} exceeded (attempted total {attempted})")]
    PoolCeiling { attempted: i32, ceiling: i32 },

    /// A skill spend would drop that skill's points below 0.
    #[error("points in {skill} cannot drop below 0 (attempted {attempted})")]
    SkillFloor { skill: Name, attempted: i32 },

    /// A skill spend would push the total spent above the current budget.
    #[error("skill point budget of {budget} exceeded (attempted total {attempted})")]
    BudgetCeiling { attempted: i32, budget: i32 },

    /// A class name was not found in the class requirement table.
    #[error("unknown class: {0}")]
    UnknownClass(Name),

    /// A skill name was not found in the skill definition list.
    #[error("unknown skill: {0}")]
    UnknownSkill(Name),

    /// A free-form difficulty class value did not parse to an integer.
    ///
    /// Callers validate free-text DC input with
    /// [`parse_difficulty_class`](crate::check::parse_difficulty_class)
    /// before invoking the resolver.
    #[error("invalid difficulty class: {0:?}")]
    InvalidDifficultyClass(String),
}

impl RulesError {
    /// Whether this error is a rule rejection rather than a reference error.
    ///
    /// Rule rejections leave state unchanged and are an expected outcome
    /// of ordinary user intent; everything else signals a bad name or
    /// malformed input from the caller.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RulesError::AttributeFloor { .. }
                | RulesError::PoolCeiling { .. }
                | RulesError::SkillFloor { .. }
                | RulesError::BudgetCeiling { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RulesError::UnknownClass(Name::new("Warlock"));
        assert!(err.to_string().contains("Warlock"));
    }

    #[test]
    fn test_rejection_classification() {
        let rejected = RulesError::PoolCeiling {
            attempted: 71,
            ceiling: 70,
        };
        assert!(rejected.is_rejection());

        let reference = RulesError::UnknownSkill(Name::new("Juggling"));
        assert!(!reference.is_rejection());

        let malformed = RulesError::InvalidDifficultyClass("ten".to_string());
        assert!(!malformed.is_rejection());
    }

    #[test]
    fn test_floor_error_names_attribute() {
        let err = RulesError::AttributeFloor {
            attribute: Attribute::Strength,
            attempted: 0,
        };
        assert!(err.to_string().contains("Strength"));
    }
}
