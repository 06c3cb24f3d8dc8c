//! # Webhook Handshake Verification
//!
//! Meta proves webhook URL ownership with a one-time GET request carrying
//! `hub.mode`, `hub.verify_token` and `hub.challenge` query parameters.
//! The gateway answers 200 with the challenge echoed verbatim when the
//! token matches, 403 on a mismatch, and 404 when the parameters are
//! missing entirely.

use gateway_core::{GatewayError, GatewayResult};
use serde::Deserialize;

/// The only subscription mode Meta sends
pub const SUBSCRIBE_MODE: &str = "subscribe";

/// Query parameters of the handshake request
///
/// All fields are optional: a missing `hub.mode` or `hub.verify_token` is a
/// distinct outcome (404) from a mismatched one (403).
#[derive(Debug, Default, Deserialize)]
pub struct VerifyParams {
    /// Should be `"subscribe"`
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// Token configured in the Meta dashboard
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// Challenge string to echo back on success
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Decide the handshake outcome for a verification request.
///
/// Returns the challenge to echo back on success. The challenge may be the
/// empty string; it is returned byte-for-byte, never re-encoded.
pub fn verify_subscription(params: &VerifyParams, expected_token: &str) -> GatewayResult<String> {
    let (Some(mode), Some(token)) = (params.mode.as_deref(), params.verify_token.as_deref())
    else {
        return Err(GatewayError::MissingParameters);
    };

    if mode == SUBSCRIBE_MODE && token == expected_token {
        Ok(params.challenge.clone().unwrap_or_default())
    } else {
        Err(GatewayError::TokenMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "verify-me";

    fn params(mode: Option<&str>, token: Option<&str>, challenge: Option<&str>) -> VerifyParams {
        VerifyParams {
            mode: mode.map(String::from),
            verify_token: token.map(String::from),
            challenge: challenge.map(String::from),
        }
    }

    #[test]
    fn test_missing_params_is_404() {
        let cases = [
            params(None, None, None),
            params(Some("subscribe"), None, Some("c")),
            params(None, Some(TOKEN), Some("c")),
        ];

        for p in cases {
            let err = verify_subscription(&p, TOKEN).unwrap_err();
            assert_eq!(err.status_code(), 404);
        }
    }

    #[test]
    fn test_matching_token_echoes_challenge() {
        let p = params(Some("subscribe"), Some(TOKEN), Some("1158201444"));
        assert_eq!(verify_subscription(&p, TOKEN).unwrap(), "1158201444");
    }

    #[test]
    fn test_absent_challenge_echoes_empty_string() {
        let p = params(Some("subscribe"), Some(TOKEN), None);
        assert_eq!(verify_subscription(&p, TOKEN).unwrap(), "");
    }

    #[test]
    fn test_wrong_token_is_403() {
        let p = params(Some("subscribe"), Some("not-the-token"), Some("c"));
        let err = verify_subscription(&p, TOKEN).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_wrong_mode_is_403() {
        let p = params(Some("unsubscribe"), Some(TOKEN), Some("c"));
        let err = verify_subscription(&p, TOKEN).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_query_param_names_deserialize() {
        let json = r#"{"hub.mode":"subscribe","hub.verify_token":"t","hub.challenge":"ch"}"#;
        let p: VerifyParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.mode.as_deref(), Some("subscribe"));
        assert_eq!(p.verify_token.as_deref(), Some("t"));
        assert_eq!(p.challenge.as_deref(), Some("ch"));
    }
}
