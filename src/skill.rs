//! Skills and the skill point budget.
//!
//! The skill list is static reference data: each skill names the attribute
//! whose modifier governs it. `SkillPointAllocation` tracks points spent
//! per skill; the spendable budget is derived fresh from the live
//! `AttributeSet` on every spend and is never stored.

use crate::attribute::{Attribute, AttributeSet};
use crate::error::RulesError;
use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Budget granted before the Intelligence modifier is applied.
pub const BASE_SKILL_POINTS: i32 = 10;

/// Budget granted per point of Intelligence modifier.
pub const POINTS_PER_INT_MODIFIER: i32 = 4;

/// A skill and the attribute whose modifier governs it.
#[derive(Debug, Clone, Copy)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub attribute: Attribute,
}

/// The skill list, in display order.
pub const SKILL_LIST: &[SkillDefinition] = &[
    SkillDefinition { name: "Acrobatics", attribute: Attribute::Dexterity },
    SkillDefinition { name: "Animal Handling", attribute: Attribute::Wisdom },
    SkillDefinition { name: "Arcana", attribute: Attribute::Intelligence },
    SkillDefinition { name: "Athletics", attribute: Attribute::Strength },
    SkillDefinition { name: "Deception", attribute: Attribute::Charisma },
    SkillDefinition { name: "History", attribute: Attribute::Intelligence },
    SkillDefinition { name: "Insight", attribute: Attribute::Wisdom },
    SkillDefinition { name: "Intimidation", attribute: Attribute::Charisma },
    SkillDefinition { name: "Investigation", attribute: Attribute::Intelligence },
    SkillDefinition { name: "Medicine", attribute: Attribute::Wisdom },
    SkillDefinition { name: "Nature", attribute: Attribute::Intelligence },
    SkillDefinition { name: "Perception", attribute: Attribute::Wisdom },
    SkillDefinition { name: "Performance", attribute: Attribute::Charisma },
    SkillDefinition { name: "Persuasion", attribute: Attribute::Charisma },
    SkillDefinition { name: "Religion", attribute: Attribute::Intelligence },
    SkillDefinition { name: "Sleight of Hand", attribute: Attribute::Dexterity },
    SkillDefinition { name: "Stealth", attribute: Attribute::Dexterity },
    SkillDefinition { name: "Survival", attribute: Attribute::Wisdom },
];

/// Look up a skill definition by name.
pub fn definition(name: &str) -> Option<&'static SkillDefinition> {
    SKILL_LIST.iter().find(|skill| skill.name == name)
}

/// The total skill points spendable with the given attributes:
/// `10 + 4 x modifier(Intelligence)`.
///
/// Can be zero or negative when Intelligence is very low, in which case
/// every positive spend attempt is rejected.
///
/// # Examples
///
/// ```rust
/// use charsheet::{skill, Attribute, AttributeSet};
///
/// let attrs = AttributeSet::new();
/// assert_eq!(skill::max_skill_points(&attrs), 10);
///
/// let smart = attrs.adjust(Attribute::Intelligence, 8).unwrap();
/// assert_eq!(skill::max_skill_points(&smart), 26);
/// ```
pub fn max_skill_points(attributes: &AttributeSet) -> i32 {
    BASE_SKILL_POINTS + POINTS_PER_INT_MODIFIER * attributes.modifier_of(Attribute::Intelligence)
}

/// Points spent per skill.
///
/// Every known skill starts at 0. Spending is check-then-replace: a
/// spend either returns a fresh allocation satisfying both invariants
/// (no skill negative, total within the supplied budget) or rejects with
/// the caller's allocation untouched.
///
/// If attributes change after points were spent, an allocation that now
/// exceeds the freshly derived budget is left as-is; only new spend
/// attempts are checked against the current ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillPointAllocation {
    points: BTreeMap<Name, i32>,
}

impl SkillPointAllocation {
    /// Create the default allocation: every known skill at 0.
    pub fn new() -> Self {
        Self {
            points: SKILL_LIST
                .iter()
                .map(|skill| (Name::new(skill.name), 0))
                .collect(),
        }
    }

    /// Points currently spent on one skill.
    pub fn points(&self, name: &str) -> i32 {
        self.points.get(name).copied().unwrap_or(0)
    }

    /// Total points spent across all skills.
    pub fn spent_total(&self) -> i32 {
        self.points.values().sum()
    }

    /// Spend (or refund, with a negative delta) points on one skill.
    ///
    /// `budget` is the ceiling derived from the live attributes via
    /// [`max_skill_points`]. Rejects if the skill's points would drop
    /// below 0 or if the new total spent would exceed the budget; note
    /// the total check applies to refunds too, so a stale over-budget
    /// allocation stays frozen until the budget recovers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use charsheet::skill::SkillPointAllocation;
    ///
    /// let alloc = SkillPointAllocation::new();
    /// let alloc = alloc.spend("Stealth", 3, 10).unwrap();
    /// assert_eq!(alloc.points("Stealth"), 3);
    /// assert_eq!(alloc.spent_total(), 3);
    /// ```
    pub fn spend(
        &self,
        name: &str,
        delta: i32,
        budget: i32,
    ) -> Result<SkillPointAllocation, RulesError> {
        let skill = definition(name).ok_or_else(|| RulesError::UnknownSkill(Name::new(name)))?;

        let current = self.points(name);
        let next = current + delta;
        if next < 0 {
            return Err(RulesError::SkillFloor {
                skill: Name::new(skill.name),
                attempted: next,
            });
        }

        let new_total = self.spent_total() + delta;
        if new_total > budget {
            return Err(RulesError::BudgetCeiling {
                attempted: new_total,
                budget,
            });
        }

        let mut points = self.points.clone();
        points.insert(Name::new(skill.name), next);
        Ok(SkillPointAllocation { points })
    }

    /// Iterate over `(name, points)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, i32)> + '_ {
        self.points.iter().map(|(name, &points)| (name, points))
    }
}

impl Default for SkillPointAllocation {
    fn default() -> Self {
        Self::new()
    }
}
