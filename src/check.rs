//! Skill check resolution.
//!
//! A check combines a skill's spent points and its governing attribute's
//! modifier with one d20 draw against a target difficulty class. The die
//! comes from an injected [`DieRoller`] so callers control the randomness:
//! production code wraps an RNG in [`RngRoller`], tests supply fixed or
//! scripted draws.

use crate::attribute::AttributeSet;
use crate::error::RulesError;
use crate::name::Name;
use crate::skill::{definition, SkillPointAllocation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the check die.
pub const DIE_SIDES: i32 = 20;

/// Trait for the resolver's die draws.
///
/// Each call consumes one unit of randomness and must return a value in
/// the inclusive range `[1, 20]`.
pub trait DieRoller {
    /// Draw one d20.
    fn roll(&mut self) -> i32;
}

/// A roller backed by any [`rand::Rng`].
///
/// # Examples
///
/// ```rust
/// use charsheet::check::{DieRoller, RngRoller};
///
/// let mut roller = RngRoller(rand::thread_rng());
/// let die = roller.roll();
/// assert!((1..=20).contains(&die));
/// ```
pub struct RngRoller<R: Rng>(pub R);

impl<R: Rng> DieRoller for RngRoller<R> {
    fn roll(&mut self) -> i32 {
        self.0.gen_range(1..=DIE_SIDES)
    }
}

/// A roller that always returns the same face. Handy for tests.
#[derive(Debug, Clone)]
pub struct FixedRoller(pub i32);

impl DieRoller for FixedRoller {
    fn roll(&mut self) -> i32 {
        self.0
    }
}

/// A roller that replays a scripted sequence of faces, repeating the
/// last one once the script runs out.
#[derive(Debug, Clone)]
pub struct SequenceRoller {
    faces: Vec<i32>,
    next: usize,
}

impl SequenceRoller {
    pub fn new(faces: Vec<i32>) -> Self {
        Self { faces, next: 0 }
    }
}

impl DieRoller for SequenceRoller {
    fn roll(&mut self) -> i32 {
        let idx = self.next.min(self.faces.len().saturating_sub(1));
        self.next += 1;
        self.faces.get(idx).copied().unwrap_or(1)
    }
}

/// The outcome of one skill check.
///
/// Ephemeral and derived: produced fresh by every [`skill_check`] call,
/// never accumulated. The figure shown to the player is
/// [`grand_total`](CheckResult::grand_total).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The raw d20 face rolled.
    pub die: i32,
    /// Spent skill points plus the governing attribute's modifier.
    pub skill_total: i32,
    /// Whether `die + skill_total` met or beat the difficulty class.
    pub success: bool,
}

impl CheckResult {
    /// The check's total: die plus skill total.
    pub fn grand_total(&self) -> i32 {
        self.die + self.skill_total
    }
}

/// Resolve one skill check against a difficulty class.
///
/// Looks up the skill's governing attribute, derives its modifier from
/// the live attributes, adds the points spent on the skill, draws one
/// d20 from the roller, and succeeds iff the sum meets or beats `dc`.
/// No state is mutated.
///
/// # Examples
///
/// ```rust
/// use charsheet::check::{skill_check, FixedRoller};
/// use charsheet::{AttributeSet, SkillPointAllocation};
///
/// let attrs = AttributeSet::new();
/// let alloc = SkillPointAllocation::new().spend("Stealth", 2, 10).unwrap();
///
/// let result = skill_check("Stealth", 10, &attrs, &alloc, &mut FixedRoller(8)).unwrap();
/// assert_eq!(result.skill_total, 2);
/// assert_eq!(result.grand_total(), 10);
/// assert!(result.success);
/// ```
pub fn skill_check(
    skill: &str,
    dc: i32,
    attributes: &AttributeSet,
    allocation: &SkillPointAllocation,
    roller: &mut impl DieRoller,
) -> Result<CheckResult, RulesError> {
    let skill = definition(skill).ok_or_else(|| RulesError::UnknownSkill(Name::new(skill)))?;

    let skill_total = allocation.points(skill.name) + attributes.modifier_of(skill.attribute);
    let die = roller.roll();

    Ok(CheckResult {
        die,
        skill_total,
        success: die + skill_total >= dc,
    })
}

/// Parse a free-form difficulty class string.
///
/// The resolver itself takes an already-parsed integer; this is the
/// validation step for free-text DC input, surfacing
/// [`RulesError::InvalidDifficultyClass`] instead of silently defaulting.
///
/// ```rust
/// use charsheet::check::parse_difficulty_class;
///
/// assert_eq!(parse_difficulty_class("15").unwrap(), 15);
/// assert!(parse_difficulty_class("fifteen").is_err());
/// ```
pub fn parse_difficulty_class(input: &str) -> Result<i32, RulesError> {
    input
        .trim()
        .parse()
        .map_err(|_| RulesError::InvalidDifficultyClass(input.to_string()))
}
