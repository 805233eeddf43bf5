//! The character sheet: shared state and intent-level operations.
//!
//! `CharacterSheet` owns the two mutable pieces of state (attributes and
//! skill points) plus the class selection, and exposes the operations a
//! view layer calls: adjust an attribute, spend or refund a skill point,
//! toggle a class, resolve a skill check. Every mutation is
//! check-then-replace within one call; a rejected operation leaves the
//! sheet exactly as it was.
//!
//! The sheet also defines [`CharacterDocument`], the snapshot shape
//! exchanged with the persistence collaborator.

use crate::attribute::{Attribute, AttributeSet};
use crate::check::{skill_check, CheckResult, DieRoller};
use crate::class;
use crate::error::RulesError;
use crate::name::Name;
use crate::skill::{self, SkillPointAllocation};
use serde::{Deserialize, Serialize};

/// The snapshot document exchanged with the persistence collaborator.
///
/// On save, all three keys are present (`selectedClass` may be `null`).
/// On load, any present key overwrites the corresponding sheet state
/// wholesale and any absent key leaves it untouched; a `null`
/// `selectedClass` is treated as absent. Field values are not
/// range-validated on load — the collaborator is trusted.
///
/// # Examples
///
/// ```rust
/// use charsheet::{CharacterDocument, CharacterSheet};
///
/// let doc: CharacterDocument =
///     serde_json::from_str(r#"{ "selectedClass": "Bard" }"#).unwrap();
///
/// let mut sheet = CharacterSheet::new();
/// sheet.apply(doc);
/// assert_eq!(sheet.selected_class(), Some("Bard"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_points: Option<SkillPointAllocation>,
    #[serde(default)]
    pub selected_class: Option<Name>,
}

/// A character under construction.
///
/// # Examples
///
/// ```rust
/// use charsheet::{Attribute, CharacterSheet};
///
/// let mut sheet = CharacterSheet::new();
/// sheet.increase_attribute(Attribute::Intelligence).unwrap();
/// sheet.increase_attribute(Attribute::Intelligence).unwrap();
///
/// // Intelligence 12 -> modifier +1 -> budget 14.
/// assert_eq!(sheet.max_skill_points(), 14);
/// sheet.spend_skill_point("Arcana").unwrap();
/// assert_eq!(sheet.spent_skill_points(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    attributes: AttributeSet,
    skill_points: SkillPointAllocation,
    selected_class: Option<Name>,
}

impl CharacterSheet {
    /// Create a fresh sheet: every attribute at 10, every skill at 0,
    /// no class selected.
    pub fn new() -> Self {
        Self {
            attributes: AttributeSet::new(),
            skill_points: SkillPointAllocation::new(),
            selected_class: None,
        }
    }

    /// The current attribute scores.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// The current skill point allocation.
    pub fn skill_points(&self) -> &SkillPointAllocation {
        &self.skill_points
    }

    /// The currently selected class, if any.
    pub fn selected_class(&self) -> Option<&str> {
        self.selected_class.as_ref().map(Name::as_str)
    }

    /// Adjust one attribute by a signed delta.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i32) -> Result<(), RulesError> {
        self.attributes = self.attributes.adjust(attribute, delta)?;
        Ok(())
    }

    /// Raise one attribute by 1.
    pub fn increase_attribute(&mut self, attribute: Attribute) -> Result<(), RulesError> {
        self.adjust_attribute(attribute, 1)
    }

    /// Lower one attribute by 1.
    pub fn decrease_attribute(&mut self, attribute: Attribute) -> Result<(), RulesError> {
        self.adjust_attribute(attribute, -1)
    }

    /// The modifier derived from one attribute.
    pub fn attribute_modifier(&self, attribute: Attribute) -> i32 {
        self.attributes.modifier_of(attribute)
    }

    /// The skill point budget derived from the live attributes.
    ///
    /// Recomputed on every call, never stored. Spent points already in
    /// the allocation are not clawed back if this shrinks below them.
    pub fn max_skill_points(&self) -> i32 {
        skill::max_skill_points(&self.attributes)
    }

    /// Total skill points currently spent.
    pub fn spent_skill_points(&self) -> i32 {
        self.skill_points.spent_total()
    }

    /// Spend (or refund, with a negative delta) points on one skill,
    /// checked against the freshly derived budget.
    pub fn spend_skill(&mut self, name: &str, delta: i32) -> Result<(), RulesError> {
        let budget = self.max_skill_points();
        self.skill_points = self.skill_points.spend(name, delta, budget)?;
        Ok(())
    }

    /// Spend one point on a skill.
    pub fn spend_skill_point(&mut self, name: &str) -> Result<(), RulesError> {
        self.spend_skill(name, 1)
    }

    /// Refund one point from a skill.
    pub fn refund_skill_point(&mut self, name: &str) -> Result<(), RulesError> {
        self.spend_skill(name, -1)
    }

    /// A skill's total: spent points plus its governing attribute's
    /// modifier.
    pub fn skill_total(&self, name: &str) -> Result<i32, RulesError> {
        let skill =
            skill::definition(name).ok_or_else(|| RulesError::UnknownSkill(Name::new(name)))?;
        Ok(self.skill_points.points(skill.name) + self.attributes.modifier_of(skill.attribute))
    }

    /// Whether the current attributes qualify for the named class.
    pub fn is_eligible(&self, class_name: &str) -> Result<bool, RulesError> {
        class::is_eligible(class_name, &self.attributes)
    }

    /// Select a class, or clear the selection when the named class is
    /// already selected. The selection has no back-effect on attributes
    /// or skills.
    pub fn toggle_class(&mut self, class_name: &str) -> Result<(), RulesError> {
        if class::requirement(class_name).is_none() {
            return Err(RulesError::UnknownClass(Name::new(class_name)));
        }
        self.selected_class = if self.selected_class() == Some(class_name) {
            None
        } else {
            Some(Name::new(class_name))
        };
        Ok(())
    }

    /// Resolve a skill check against the sheet's live state.
    pub fn skill_check(
        &self,
        name: &str,
        dc: i32,
        roller: &mut impl DieRoller,
    ) -> Result<CheckResult, RulesError> {
        skill_check(name, dc, &self.attributes, &self.skill_points, roller)
    }

    /// The full snapshot document for the persistence collaborator.
    pub fn snapshot(&self) -> CharacterDocument {
        CharacterDocument {
            attributes: Some(self.attributes.clone()),
            skill_points: Some(self.skill_points.clone()),
            selected_class: self.selected_class.clone(),
        }
    }

    /// Overwrite state from a loaded document.
    ///
    /// Each present key replaces its piece of state wholesale; absent
    /// keys (and a null `selectedClass`) leave the current state alone.
    pub fn apply(&mut self, document: CharacterDocument) {
        if let Some(attributes) = document.attributes {
            self.attributes = attributes;
        }
        if let Some(skill_points) = document.skill_points {
            self.skill_points = skill_points;
        }
        if let Some(selected_class) = document.selected_class {
            self.selected_class = Some(selected_class);
        }
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::FixedRoller;

    #[test]
    fn test_new_sheet_defaults() {
        let sheet = CharacterSheet::new();
        assert_eq!(sheet.attributes().total(), 60);
        assert_eq!(sheet.spent_skill_points(), 0);
        assert_eq!(sheet.max_skill_points(), 10);
        assert_eq!(sheet.selected_class(), None);
    }

    #[test]
    fn test_rejected_adjustment_leaves_sheet_unchanged() {
        let mut sheet = CharacterSheet::new();
        let before = sheet.clone();

        let err = sheet.adjust_attribute(Attribute::Strength, -10).unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(sheet, before);
    }

    #[test]
    fn test_budget_follows_attribute_changes() {
        let mut sheet = CharacterSheet::new();
        sheet.adjust_attribute(Attribute::Intelligence, 8).unwrap();
        assert_eq!(sheet.max_skill_points(), 26);

        // Spend against the larger budget, then shrink it. The spent
        // points survive; only new spends see the smaller ceiling.
        for _ in 0..12 {
            sheet.spend_skill_point("Investigation").unwrap();
        }
        sheet.adjust_attribute(Attribute::Intelligence, -8).unwrap();
        assert_eq!(sheet.max_skill_points(), 10);
        assert_eq!(sheet.spent_skill_points(), 12);

        let err = sheet.spend_skill_point("Investigation").unwrap_err();
        assert!(matches!(err, RulesError::BudgetCeiling { .. }));
        assert_eq!(sheet.spent_skill_points(), 12);
    }

    #[test]
    fn test_toggle_class() {
        let mut sheet = CharacterSheet::new();
        sheet.toggle_class("Wizard").unwrap();
        assert_eq!(sheet.selected_class(), Some("Wizard"));

        // Toggling a different class switches the selection.
        sheet.toggle_class("Bard").unwrap();
        assert_eq!(sheet.selected_class(), Some("Bard"));

        // Toggling the selected class clears it.
        sheet.toggle_class("Bard").unwrap();
        assert_eq!(sheet.selected_class(), None);

        let err = sheet.toggle_class("Paladin").unwrap_err();
        assert_eq!(err, RulesError::UnknownClass(Name::new("Paladin")));
        assert_eq!(sheet.selected_class(), None);
    }

    #[test]
    fn test_skill_total_view() {
        let mut sheet = CharacterSheet::new();
        sheet.adjust_attribute(Attribute::Dexterity, 4).unwrap();
        sheet.spend_skill("Acrobatics", 3).unwrap();

        // 3 points + Dexterity 14 modifier (+2).
        assert_eq!(sheet.skill_total("Acrobatics").unwrap(), 5);
        assert!(sheet.skill_total("Haggling").is_err());
    }

    #[test]
    fn test_check_through_the_sheet() {
        let mut sheet = CharacterSheet::new();
        sheet.spend_skill("Perception", 2).unwrap();

        let result = sheet
            .skill_check("Perception", 10, &mut FixedRoller(8))
            .unwrap();
        assert_eq!(result.grand_total(), 10);
        assert!(result.success);
    }

    #[test]
    fn test_snapshot_shape() {
        let mut sheet = CharacterSheet::new();
        sheet.toggle_class("Barbarian").unwrap();

        let json = serde_json::to_value(sheet.snapshot()).unwrap();
        assert!(json.get("attributes").is_some());
        assert!(json.get("skillPoints").is_some());
        assert_eq!(json["selectedClass"], "Barbarian");
        assert_eq!(json["attributes"]["Strength"], 10);
    }

    #[test]
    fn test_snapshot_serializes_null_class() {
        let sheet = CharacterSheet::new();
        let json = serde_json::to_value(sheet.snapshot()).unwrap();
        assert!(json["selectedClass"].is_null());
    }

    #[test]
    fn test_apply_overwrites_only_present_keys() {
        let mut sheet = CharacterSheet::new();
        sheet.adjust_attribute(Attribute::Strength, 5).unwrap();
        sheet.spend_skill("Athletics", 4).unwrap();

        // A document carrying only skill points.
        let doc: CharacterDocument =
            serde_json::from_str(r#"{ "skillPoints": { "Stealth": 7 } }"#).unwrap();
        sheet.apply(doc);

        assert_eq!(sheet.skill_points().points("Stealth"), 7);
        assert_eq!(sheet.skill_points().points("Athletics"), 0); // replaced wholesale
        assert_eq!(sheet.attributes().score(Attribute::Strength), 15); // untouched
    }

    #[test]
    fn test_apply_treats_null_class_as_absent() {
        let mut sheet = CharacterSheet::new();
        sheet.toggle_class("Wizard").unwrap();

        let doc: CharacterDocument =
            serde_json::from_str(r#"{ "selectedClass": null }"#).unwrap();
        sheet.apply(doc);

        assert_eq!(sheet.selected_class(), Some("Wizard"));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut sheet = CharacterSheet::new();
        sheet.adjust_attribute(Attribute::Charisma, 4).unwrap();
        sheet.spend_skill("Persuasion", 5).unwrap();
        sheet.toggle_class("Bard").unwrap();

        let json = serde_json::to_string(&sheet.snapshot()).unwrap();
        let doc: CharacterDocument = serde_json::from_str(&json).unwrap();

        let mut restored = CharacterSheet::new();
        restored.apply(doc);
        assert_eq!(restored, sheet);
    }
}
