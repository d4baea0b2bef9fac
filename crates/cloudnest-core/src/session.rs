//! Session token inspection
//!
//! The bearer token payload is decoded locally so the client can show
//! who is logged in and notice a lapsed session without a round trip.
//! Nothing here verifies the signature; the backend stays the authority
//! on whether a token is accepted.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, TimeZone, Utc};
use cloudnest_types::AuthClaims;

use crate::error::{CloudNestError, Result};

/// Decode the claims out of a bearer token without validating it.
pub fn parse_claims(token: &str) -> Result<AuthClaims> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(CloudNestError::MalformedToken);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| CloudNestError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| CloudNestError::MalformedToken)
}

/// When the token lapses, if its claims decode and carry an expiry.
pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    let claims = parse_claims(token).ok()?;
    Utc.timestamp_opt(claims.exp?, 0).single()
}

/// Claims of a still-valid session. Malformed and lapsed tokens both
/// read as "no session", which sends the user back to login.
pub fn active_claims(token: &str, now: DateTime<Utc>) -> Option<AuthClaims> {
    let claims = parse_claims(token).ok()?;
    if let Some(expiry) = claims.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single()) {
        if expiry < now {
            return None;
        }
    }
    Some(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn token_with_exp(exp: i64) -> String {
        let payload = serde_json::json!({
            "userId": "4c7c2a4e-5a1f-4f2b-9d3e-8b7a6c5d4e3f",
            "name": "Dana",
            "email": "dana@example.com",
            "exp": exp,
        });
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn decodes_claims_from_payload_segment() {
        let token = token_with_exp(2_000_000_000);
        let claims = parse_claims(&token).unwrap();
        assert_eq!(claims.email, "dana@example.com");
        assert_eq!(
            claims.user_id,
            "4c7c2a4e-5a1f-4f2b-9d3e-8b7a6c5d4e3f"
                .parse::<Uuid>()
                .unwrap()
        );
    }

    #[test]
    fn wrong_segment_count_is_malformed() {
        assert!(parse_claims("only-one-segment").is_err());
        assert!(parse_claims("a.b").is_err());
        assert!(parse_claims("a.b.c.d").is_err());
    }

    #[test]
    fn garbage_payload_is_malformed() {
        assert!(parse_claims("aGVhZGVy.!!!not-base64!!!.c2ln").is_err());
        let not_json = URL_SAFE_NO_PAD.encode("plain text");
        assert!(parse_claims(&format!("aGVhZGVy.{not_json}.c2ln")).is_err());
    }

    #[test]
    fn padded_payloads_still_decode() {
        let token = token_with_exp(2_000_000_000);
        let mut parts: Vec<&str> = token.split('.').collect();
        let padded = format!("{}==", parts[1]);
        parts[1] = &padded;
        let reassembled = parts.join(".");
        assert!(parse_claims(&reassembled).is_ok());
    }

    #[test]
    fn lapsed_token_reads_as_no_session() {
        let now = Utc::now();
        let stale = token_with_exp((now - Duration::hours(1)).timestamp());
        assert!(active_claims(&stale, now).is_none());

        let fresh = token_with_exp((now + Duration::hours(1)).timestamp());
        assert!(active_claims(&fresh, now).is_some());
    }

    #[test]
    fn token_without_exp_never_lapses() {
        let payload = serde_json::json!({
            "userId": "4c7c2a4e-5a1f-4f2b-9d3e-8b7a6c5d4e3f",
            "name": "Dana",
            "email": "dana@example.com",
        });
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
        let token = format!("aGVhZGVy.{payload}.c2ln");

        assert!(active_claims(&token, Utc::now()).is_some());
        assert!(expires_at(&token).is_none());
    }

    #[test]
    fn malformed_token_reads_as_no_session() {
        assert!(active_claims("not a token", Utc::now()).is_none());
    }
}
