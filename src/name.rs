//! Name identifier module.
//!
//! Provides the `Name` type, an interned string identifier used for
//! skill and class names. Uses `Arc<str>` for cheap clones and fast
//! comparison.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for skills and classes.
///
/// Multiple `Name` instances with the same string content share the
/// same underlying allocation, so cloning one is a pointer copy.
///
/// # Examples
///
/// ```rust
/// use charsheet::Name;
///
/// let stealth = Name::new("Stealth");
///
/// // Can be created from string slices or owned strings
/// let stealth2: Name = "Stealth".into();
/// let stealth3: Name = String::from("Stealth").into();
///
/// assert_eq!(stealth, stealth2);
/// assert_eq!(stealth, stealth3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Name::from(s))
    }
}

impl Name {
    /// Create a new `Name` from a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use charsheet::Name;
    ///
    /// let name = Name::new("Arcana");
    /// assert_eq!(name.as_str(), "Arcana");
    /// ```
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `Name`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::borrow::Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_creation() {
        let a = Name::new("Stealth");
        let b = Name::new("Stealth");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "Stealth");
    }

    #[test]
    fn test_name_from_string() {
        let name: Name = String::from("Perception").into();
        assert_eq!(name, "Perception");
    }

    #[test]
    fn test_name_ordering() {
        let acrobatics = Name::new("Acrobatics");
        let stealth = Name::new("Stealth");
        assert!(acrobatics < stealth);
    }
}
