//! Presence condition vocabulary.

use std::fmt;
use std::str::FromStr;

/// Whether a file or field must, may or must not be included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Presence {
    Required,
    Optional,
    ConditionallyRequired,
    ConditionallyForbidden,
    Recommended,
}

impl Presence {
    /// All recognized values in their canonical order.
    pub const ALL: [Self; 5] = [
        Self::Required,
        Self::Optional,
        Self::ConditionallyRequired,
        Self::ConditionallyForbidden,
        Self::Recommended,
    ];

    /// Label as written in the reference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Optional => "Optional",
            Self::ConditionallyRequired => "Conditionally Required",
            Self::ConditionallyForbidden => "Conditionally Forbidden",
            Self::Recommended => "Recommended",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A presence value outside the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown presence condition: {0:?}")]
pub struct UnknownPresence(pub String);

impl FromStr for Presence {
    type Err = UnknownPresence;

    /// Exact, case-sensitive match against the reference labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPresence(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_labels() {
        for presence in Presence::ALL {
            assert_eq!(presence.as_str().parse::<Presence>(), Ok(presence));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Mandatory".parse::<Presence>(),
            Err(UnknownPresence("Mandatory".to_owned()))
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("required".parse::<Presence>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Presence::ConditionallyForbidden.to_string(),
            "Conditionally Forbidden"
        );
    }
}
