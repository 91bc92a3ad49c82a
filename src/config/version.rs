//! Omise API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for pinning the dated API
//! version sent in the `Omise-Version` request header.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Omise API version.
///
/// Omise versions are release dates (`YYYY-MM-DD`). This enum provides
/// variants for the published versions plus a `Custom` variant for any
/// other well-formed date.
///
/// # Example
///
/// ```rust
/// use omise::ApiVersion;
///
/// let version: ApiVersion = "2019-05-29".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2019_05_29);
/// assert_eq!(ApiVersion::V2017_11_02.to_string(), "2017-11-02");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2014-07-27
    V2014_07_27,
    /// API version 2015-11-17
    V2015_11_17,
    /// API version 2017-11-02
    V2017_11_02,
    /// API version 2019-05-29
    V2019_05_29,
    /// Any other well-formed version date.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest published API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2019_05_29
    }

    /// Returns `true` if this is one of the published versions.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the version as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2014_07_27 => "2014-07-27",
            Self::V2015_11_17 => "2015-11-17",
            Self::V2017_11_02 => "2017-11-02",
            Self::V2019_05_29 => "2019-05-29",
            Self::Custom(s) => s,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: YYYY-MM-DD
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return false;
        }

        let (year, month, day) = (parts[0], parts[1], parts[2]);
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return false;
        }
        if !s.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return false;
        }

        let month: u32 = month.parse().unwrap_or(0);
        let day: u32 = day.parse().unwrap_or(0);
        (1..=12).contains(&month) && (1..=31).contains(&day)
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    // Zero-padded dates order lexicographically.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2014-07-27" => Ok(Self::V2014_07_27),
            "2015-11-17" => Ok(Self::V2015_11_17),
            "2017-11-02" => Ok(Self::V2017_11_02),
            "2019-05-29" => Ok(Self::V2019_05_29),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2014-07-27".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2014_07_27
        );
        assert_eq!(
            "2015-11-17".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2015_11_17
        );
        assert_eq!(
            "2017-11-02".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2017_11_02
        );
        assert_eq!(
            " 2019-05-29 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2019_05_29
        );
    }

    #[test]
    fn test_api_version_parses_custom_dates() {
        let version: ApiVersion = "2015-11-01".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2015-11-01".to_string()));
        assert!(!version.is_known());
        assert_eq!(version.to_string(), "2015-11-01");
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("2019-05".parse::<ApiVersion>().is_err());
        assert!("2019-13-01".parse::<ApiVersion>().is_err());
        assert!("2019-05-32".parse::<ApiVersion>().is_err());
        assert!("19-05-29".parse::<ApiVersion>().is_err());
        assert!("2019/05/29".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_ordering_is_chronological() {
        assert!(ApiVersion::V2014_07_27 < ApiVersion::V2015_11_17);
        assert!(ApiVersion::V2017_11_02 < ApiVersion::V2019_05_29);
        assert!(ApiVersion::V2019_05_29 < ApiVersion::Custom("2020-01-01".to_string()));
        assert!(ApiVersion::Custom("2015-11-01".to_string()) < ApiVersion::V2015_11_17);
    }

    #[test]
    fn test_latest_is_known() {
        assert!(ApiVersion::latest().is_known());
        assert_eq!(ApiVersion::latest(), ApiVersion::V2019_05_29);
    }
}
