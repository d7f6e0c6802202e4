//! # Request ID Tracking
//!
//! Generation and parsing of per-request correlation IDs.
//! Uses CUID2 for collision-resistant, URL-safe identifiers.

/// A request correlation ID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random request ID.
    #[inline]
    #[must_use]
    pub fn new() -> Self { Self(cuid2::cuid()) }

    /// Get the request ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Consume and return the inner string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String { self.0 }

    /// Parse a request ID from an incoming header value.
    ///
    /// Accepts alphanumeric identifiers of plausible CUID2 length; anything
    /// else is discarded and the caller should generate a fresh ID.
    #[must_use]
    pub fn try_from_header(value: &str) -> Option<Self> {
        let value = value.trim();
        if (20 ..= 32).contains(&value.len()) &&
            value
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            Some(Self(value.to_string()))
        }
        else {
            None
        }
    }
}

impl Default for RequestId {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let a = RequestId::new();
        let b = RequestId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_try_from_header_valid() {
        let id = "k192v2g4w3zq8h6j5k123456";
        let result = RequestId::try_from_header(id);
        assert_eq!(result.map(|r| r.into_string()), Some(id.to_string()));
    }

    #[test]
    fn test_try_from_header_invalid() {
        assert!(RequestId::try_from_header("short").is_none());
        assert!(RequestId::try_from_header("invalid!@#characters-here").is_none());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }
}
