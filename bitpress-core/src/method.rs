//! Encoding method registry.
//!
//! Every encoded stream starts with a one-byte tag naming the method that
//! produced it. [`Method`] is the registry of known tags; adding a scheme
//! means adding a variant here and a dispatch arm in the crates above.

use std::fmt;

/// Wire tag of the dense fixed-width codec.
pub const DENSE_TAG: u8 = 0xC4;

/// Encoding method, identified by the tag byte leading every stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Dense fixed-width substitution coding.
    #[default]
    Dense,
    /// Unrecognized method tag.
    Unknown(u8),
}

impl Method {
    /// Resolve a wire tag to a method.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            DENSE_TAG => Self::Dense,
            other => Self::Unknown(other),
        }
    }

    /// The one-byte wire tag of this method.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Dense => DENSE_TAG,
            Self::Unknown(tag) => *tag,
        }
    }

    /// Stable lowercase method name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Whether a codec is registered for this method.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(tag) => write!(f, "unknown({tag:#04x})"),
            _ => write!(f, "{}", self.name()),
        }
    }
}
