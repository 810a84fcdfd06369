use crate::{CoreError, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

/// How the caller authenticates against the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectMethod {
    /// Username/password login, optionally with a verification code.
    Credentials,
    /// A raw session cookie string captured from an existing login.
    Cookies,
}

impl ConnectMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectMethod::Credentials => "credentials",
            ConnectMethod::Cookies => "cookies",
        }
    }
}

impl FromStr for ConnectMethod {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credentials" => Ok(ConnectMethod::Credentials),
            "cookies" => Ok(ConnectMethod::Cookies),
            other => Err(CoreError::InvalidConnectMethod {
                value: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_methods() {
        assert_eq!(
            "credentials".parse::<ConnectMethod>().unwrap(),
            ConnectMethod::Credentials
        );
        assert_eq!(
            "cookies".parse::<ConnectMethod>().unwrap(),
            ConnectMethod::Cookies
        );
    }

    #[test]
    fn rejects_unknown_method() {
        let err = "oauth".parse::<ConnectMethod>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConnectMethod { .. }));
    }

    #[test]
    fn round_trips_as_str() {
        for method in [ConnectMethod::Credentials, ConnectMethod::Cookies] {
            assert_eq!(method.as_str().parse::<ConnectMethod>().unwrap(), method);
        }
    }
}
