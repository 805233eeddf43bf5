//! Class requirements and eligibility.
//!
//! The class requirement table is static reference data: each class names
//! the minimum score it demands per attribute. Eligibility is a pure
//! predicate over the live `AttributeSet`.

use crate::attribute::{Attribute, AttributeSet};
use crate::error::RulesError;
use crate::name::Name;

/// A class and its minimum attribute requirements.
#[derive(Debug, Clone, Copy)]
pub struct ClassRequirement {
    pub name: &'static str,
    /// Minimum score per attribute. An empty slice means the class is
    /// vacuously eligible.
    pub minimums: &'static [(Attribute, i32)],
}

/// The class requirement table.
pub const CLASS_LIST: &[ClassRequirement] = &[
    ClassRequirement {
        name: "Barbarian",
        minimums: &[
            (Attribute::Strength, 14),
            (Attribute::Dexterity, 9),
            (Attribute::Constitution, 9),
            (Attribute::Intelligence, 9),
            (Attribute::Wisdom, 9),
            (Attribute::Charisma, 9),
        ],
    },
    ClassRequirement {
        name: "Wizard",
        minimums: &[
            (Attribute::Strength, 9),
            (Attribute::Dexterity, 9),
            (Attribute::Constitution, 9),
            (Attribute::Intelligence, 14),
            (Attribute::Wisdom, 9),
            (Attribute::Charisma, 9),
        ],
    },
    ClassRequirement {
        name: "Bard",
        minimums: &[
            (Attribute::Strength, 9),
            (Attribute::Dexterity, 9),
            (Attribute::Constitution, 9),
            (Attribute::Intelligence, 9),
            (Attribute::Wisdom, 9),
            (Attribute::Charisma, 14),
        ],
    },
];

/// Look up a class requirement by name.
pub fn requirement(name: &str) -> Option<&'static ClassRequirement> {
    CLASS_LIST.iter().find(|class| class.name == name)
}

/// Whether the given attributes meet every minimum for the named class.
///
/// A class with no minimums is vacuously eligible. An unknown class name
/// is a reference error, not a rejection.
///
/// # Examples
///
/// ```rust
/// use charsheet::{class, Attribute, AttributeSet};
///
/// let attrs = AttributeSet::new();
/// assert!(!class::is_eligible("Wizard", &attrs).unwrap());
///
/// let smart = attrs.adjust(Attribute::Intelligence, 4).unwrap();
/// assert!(class::is_eligible("Wizard", &smart).unwrap());
/// ```
pub fn is_eligible(name: &str, attributes: &AttributeSet) -> Result<bool, RulesError> {
    let class = requirement(name).ok_or_else(|| RulesError::UnknownClass(Name::new(name)))?;
    Ok(class
        .minimums
        .iter()
        .all(|&(attribute, minimum)| attributes.score(attribute) >= minimum))
}

/// Names of every class the given attributes qualify for, in table order.
pub fn eligible_classes(attributes: &AttributeSet) -> Vec<&'static str> {
    CLASS_LIST
        .iter()
        .filter(|class| {
            class
                .minimums
                .iter()
                .all(|&(attribute, minimum)| attributes.score(attribute) >= minimum)
        })
        .map(|class| class.name)
        .collect()
}
