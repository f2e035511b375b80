//! HTTP Basic credential decoding.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;

/// Username/password pair carried by a `Basic` authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Why an authorization header value could not be decoded.
///
/// Every variant collapses to a 401 challenge at the transport boundary; the
/// distinction exists for logging and tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasicAuthError {
    #[error("authorization scheme is not Basic")]
    UnsupportedScheme,

    #[error("credential payload is not valid base64")]
    InvalidBase64,

    #[error("credential payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("credential payload has no ':' separator")]
    MissingSeparator,
}

/// Decode an `Authorization` header value of the form
/// `Basic <base64(username:password)>`.
///
/// The password may itself contain `:`; only the first separator splits the
/// pair.
pub fn decode_basic(header_value: &str) -> Result<BasicCredentials, BasicAuthError> {
    let payload = header_value
        .strip_prefix("Basic ")
        .ok_or(BasicAuthError::UnsupportedScheme)?;

    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|_| BasicAuthError::InvalidBase64)?;

    let text = String::from_utf8(bytes).map_err(|_| BasicAuthError::InvalidUtf8)?;

    let (username, password) = text
        .split_once(':')
        .ok_or(BasicAuthError::MissingSeparator)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;

    fn encode(pair: &str) -> String {
        format!("Basic {}", BASE64.encode(pair))
    }

    #[test]
    fn decodes_a_well_formed_header() {
        let creds = decode_basic(&encode("user:password")).unwrap();

        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "password");
    }

    #[test]
    fn splits_on_the_first_separator_only() {
        let creds = decode_basic(&encode("user:pa:ss")).unwrap();

        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pa:ss");
    }

    #[test]
    fn rejects_non_basic_schemes() {
        assert_eq!(
            decode_basic("Bearer abc123"),
            Err(BasicAuthError::UnsupportedScheme)
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        assert_eq!(
            decode_basic("Basic %%%"),
            Err(BasicAuthError::InvalidBase64)
        );
    }

    #[test]
    fn rejects_non_utf8_payloads() {
        let header = format!("Basic {}", BASE64.encode([0xff, 0xfe, 0xfd]));

        assert_eq!(decode_basic(&header), Err(BasicAuthError::InvalidUtf8));
    }

    #[test]
    fn rejects_payloads_without_a_separator() {
        assert_eq!(
            decode_basic(&encode("userpassword")),
            Err(BasicAuthError::MissingSeparator)
        );
    }
}
