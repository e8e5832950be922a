use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
use crate::state::security_config::SecurityConfig;

/// Access tokens are valid for 24 hours from issuance.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims carried by our access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Authenticated user id; always positive
    pub sub: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

fn unix_seconds(t: SystemTime) -> i64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Mint an HS256 access token for `sub` at time `now`.
///
/// `sub` must be a positive user id; zero and negative values are caller
/// bugs and are rejected without producing a token.
pub fn mint_access_token(
    sub: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AuthError> {
    if sub <= 0 {
        return Err(AuthError::InvalidSubject);
    }

    let iat = unix_seconds(now);
    let claims = Claims {
        sub,
        iat,
        exp: iat + ACCESS_TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Verify an access token and return its claims.
///
/// The input is attacker-controlled. The algorithm is pinned to the
/// configured one, so an `alg` substituted in the header fails as malformed
/// rather than being honored. Signature comparison is constant-time inside
/// `jsonwebtoken`. Expiry is checked with zero leeway: `now >= exp` fails.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = true;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::BadSignature,
        _ => AuthError::MalformedToken,
    })?;

    // The decode-time check admits a token in its final second (exp == now);
    // the contract is `now >= exp` rejects.
    if unix_seconds(SystemTime::now()) >= claims.exp {
        return Err(AuthError::Expired);
    }

    // A correctly signed token with a non-positive subject cannot have been
    // minted here; treat it as forged.
    if claims.sub <= 0 {
        return Err(AuthError::MalformedToken);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    use super::{mint_access_token, verify_access_token, Claims, ACCESS_TOKEN_TTL_SECS};
    use crate::auth::error::AuthError;
    use crate::state::security_config::SecurityConfig;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    #[test]
    fn mint_and_verify_roundtrip() {
        let security = test_security();
        let now = SystemTime::now();

        let token = mint_access_token(42, now, &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp, claims.iat + ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn subject_zero_is_rejected_at_issuance() {
        let security = test_security();
        let result = mint_access_token(0, SystemTime::now(), &security);
        assert_eq!(result, Err(AuthError::InvalidSubject));

        let result = mint_access_token(-7, SystemTime::now(), &security);
        assert_eq!(result, Err(AuthError::InvalidSubject));
    }

    #[test]
    fn token_expires_after_ttl() {
        let security = test_security();
        // 25 hours ago, so the 24-hour token is past its expiry
        let then = SystemTime::now() - Duration::from_secs(25 * 60 * 60);

        let token = mint_access_token(1, then, &security).unwrap();
        assert_eq!(
            verify_access_token(&token, &security),
            Err(AuthError::Expired)
        );
    }

    #[test]
    fn token_expires_exactly_at_ttl_boundary() {
        let security = test_security();
        // exp lands at (or just before) now; `now >= exp` must reject
        let then = SystemTime::now() - Duration::from_secs(ACCESS_TOKEN_TTL_SECS as u64);

        let token = mint_access_token(1, then, &security).unwrap();
        assert_eq!(
            verify_access_token(&token, &security),
            Err(AuthError::Expired)
        );
    }

    #[test]
    fn wrong_secret_fails_signature_check() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let security_b = SecurityConfig::new("secret-B".as_bytes());

        let token = mint_access_token(1, SystemTime::now(), &security_a).unwrap();
        assert_eq!(
            verify_access_token(&token, &security_b),
            Err(AuthError::BadSignature)
        );
    }

    #[test]
    fn tampered_signature_fails_signature_check() {
        let security = test_security();
        let token = mint_access_token(1, SystemTime::now(), &security).unwrap();

        let (head, sig) = token.rsplit_once('.').unwrap();
        let mut sig_bytes: Vec<u8> = sig.bytes().collect();
        sig_bytes[0] = if sig_bytes[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{head}.{}", String::from_utf8(sig_bytes).unwrap());
        assert_ne!(tampered, token);

        assert_eq!(
            verify_access_token(&tampered, &security),
            Err(AuthError::BadSignature)
        );
    }

    #[test]
    fn tampered_payload_fails_signature_check() {
        let security = test_security();
        let token = mint_access_token(1, SystemTime::now(), &security).unwrap();

        // Splice in the payload of a token minted for another subject while
        // keeping the original signature.
        let other = mint_access_token(2, SystemTime::now(), &security).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = other.split('.').nth(1).unwrap();
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert_eq!(
            verify_access_token(&forged, &security),
            Err(AuthError::BadSignature)
        );
    }

    #[test]
    fn garbage_strings_are_malformed() {
        let security = test_security();
        for input in ["", "not-a-jwt", "a.b", "a.b.c", "....."] {
            assert_eq!(
                verify_access_token(input, &security),
                Err(AuthError::MalformedToken),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn algorithm_substitution_is_malformed() {
        let security = test_security();
        let claims = Claims {
            sub: 1,
            iat: 0,
            exp: i64::MAX,
        };
        // Signed with the right secret but the wrong algorithm; the pinned
        // validation must refuse it before trusting any claim.
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert_eq!(
            verify_access_token(&token, &security),
            Err(AuthError::MalformedToken)
        );
    }

    #[test]
    fn correctly_signed_zero_subject_is_rejected() {
        let security = test_security();
        let now = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let claims = Claims {
            sub: 0,
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert_eq!(
            verify_access_token(&token, &security),
            Err(AuthError::MalformedToken)
        );
    }
}
