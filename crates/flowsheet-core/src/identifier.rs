//! Identifier management using string interning
//!
//! Diagram, node and project identifiers are compared constantly during
//! lookups, so they are stored as interned symbols via the [`Id`] type.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Efficient identifier type using string interning
///
/// # Examples
///
/// ```
/// use flowsheet_core::identifier::Id;
///
/// let tank = Id::new("aeration-tank");
/// assert_eq!(tank, Id::new("aeration-tank"));
/// assert_eq!(tank, "aeration-tank");
/// assert_eq!(tank.to_string(), "aeration-tank");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the interned string behind this identifier.
    pub fn as_string(&self) -> String {
        interner()
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        interner()
            .resolve(self.0)
            .is_some_and(|self_str| self_str == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("clarifier");
        let id2 = Id::new("clarifier");
        let id3 = Id::new("thickener");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "clarifier");
    }

    #[test]
    fn test_from_str() {
        let id: Id = "ro-skid".into();
        assert_eq!(id, Id::new("ro-skid"));
    }

    #[test]
    fn test_to_string() {
        let id = Id::new("feed-pump");
        assert_eq!(id.to_string(), "feed-pump");
        assert!(id != "feed_pump");
    }
}
