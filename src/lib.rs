//! # charsheet - Deterministic Character-Builder Rules Engine
//!
//! A rules engine for tabletop-RPG character builders that provides:
//! - **Point-buy validation** (per-attribute floor, aggregate pool ceiling)
//! - **Pure derivations** (attribute modifiers, skill point budgets)
//! - **Class eligibility** against a minimum-requirement table
//! - **Dice-based skill checks** with injectable randomness
//!
//! ## Core Concepts
//!
//! All rules operate over two mutable value objects and static
//! reference data:
//!
//! ```text
//! [AttributeSet] ──> modifier() ──> skill budget / eligibility / checks
//! [SkillPointAllocation] ──────────────────────────┘
//! ```
//!
//! Mutations are check-then-replace: an accepted operation produces a
//! fresh snapshot, a rejected one returns a typed error and leaves the
//! old snapshot untouched. Nothing is ever partially updated.
//!
//! ### Key Features
//!
//! - **Whole-value state**: no torn state is observable mid-operation
//! - **Typed rejections**: rule rejections are distinct from bad-name
//!   reference errors ([`RulesError::is_rejection`])
//! - **Derived budgets**: the skill point budget is recomputed from the
//!   live attributes on every spend, never stored
//! - **Injectable dice**: checks draw from a [`DieRoller`] capability,
//!   so tests can script every roll
//! - **Snapshot documents**: the whole sheet serializes to the JSON
//!   shape the persistence collaborator expects
//!
//! ## Example
//!
//! ```rust
//! use charsheet::check::FixedRoller;
//! use charsheet::{Attribute, CharacterSheet};
//!
//! let mut sheet = CharacterSheet::new();
//!
//! // Point-buy: raise Intelligence to 14.
//! for _ in 0..4 {
//!     sheet.increase_attribute(Attribute::Intelligence).unwrap();
//! }
//! assert!(sheet.is_eligible("Wizard").unwrap());
//!
//! // Intelligence 14 -> modifier +2 -> budget 18.
//! assert_eq!(sheet.max_skill_points(), 18);
//! sheet.spend_skill("Arcana", 3).unwrap();
//!
//! // Arcana total 5 (3 points + 2 modifier); die 9 beats DC 14.
//! let result = sheet.skill_check("Arcana", 14, &mut FixedRoller(9)).unwrap();
//! assert!(result.success);
//! ```
//!
//! ## Modules
//!
//! - [`attribute`] - Attribute reference list and point-buy allocator
//! - [`modifier`] - Modifier derivation
//! - [`class`] - Class requirement table and eligibility
//! - [`skill`] - Skill reference list and point budget
//! - [`check`] - Dice abstraction and skill check resolution
//! - [`sheet`] - Character sheet facade and snapshot document
//! - [`store`] - Persistence collaborator seam
//! - [`name`] - Interned name identifier
//! - [`error`] - Error types

pub mod attribute;
pub mod check;
pub mod class;
pub mod error;
pub mod modifier;
pub mod name;
pub mod sheet;
pub mod skill;
pub mod store;

// Re-export main types for convenience
pub use attribute::{Attribute, AttributeSet, DEFAULT_SCORE, POOL_CEILING};
pub use error::RulesError;
pub use name::Name;
pub use sheet::{CharacterDocument, CharacterSheet};

// Re-export rules functions and reference data
pub use check::{parse_difficulty_class, CheckResult, DieRoller, RngRoller};
pub use class::{ClassRequirement, CLASS_LIST};
pub use modifier::{format_modifier, modifier};
pub use skill::{max_skill_points, SkillDefinition, SkillPointAllocation, SKILL_LIST};

// Re-export the persistence seam
pub use store::{CharacterStore, MemoryStore, StoreError};
