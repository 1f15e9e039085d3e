/// Errors that can occur while committing a location to navigation history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The decoded location is not valid UTF-8
    InvalidPercentEncoding,
    /// The navigation backend refused the update
    NavigationRejected,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::NavigationRejected => "Navigation rejected",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for navigation commits
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidPercentEncoding.to_string(),
            "Invalid percent encoding"
        );
        assert_eq!(Error::NavigationRejected.to_string(), "Navigation rejected");
    }
}
