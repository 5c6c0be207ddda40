//! Session token and password hashing behavior, exercised through the
//! crate's public API.

use secrecy::SecretString;

use ignitionlab_lib::auth;

fn secret() -> SecretString {
    SecretString::from("integration-test-secret".to_string())
}

#[test]
fn test_issued_token_carries_username_and_issuer() {
    let token = auth::create_access_token("workshop-tech", &secret()).unwrap();

    let claims = auth::verify_token(&token, &secret()).unwrap();
    assert_eq!(claims.sub, "workshop-tech");
    assert_eq!(claims.iss, auth::SESSION_ISSUER);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_token_lifetime_is_24_hours() {
    let token = auth::create_access_token("workshop-tech", &secret()).unwrap();
    let claims = auth::verify_token(&token, &secret()).unwrap();

    let lifetime = claims.exp - claims.iat;
    assert_eq!(lifetime as i64, auth::ACCESS_TOKEN_TTL_SECS);
}

#[test]
fn test_tampered_token_is_rejected() {
    let token = auth::create_access_token("workshop-tech", &secret()).unwrap();

    // Flip a character in the payload segment.
    let mut parts: Vec<String> = token.split('.').map(|s| s.to_string()).collect();
    assert_eq!(parts.len(), 3);
    parts[1] = format!("x{}", &parts[1][1..]);
    let tampered = parts.join(".");

    assert!(auth::verify_token(&tampered, &secret()).is_err());
}

#[test]
fn test_garbage_token_is_rejected() {
    assert!(auth::verify_token("not-a-jwt", &secret()).is_err());
    assert!(auth::verify_token("", &secret()).is_err());
}

#[test]
fn test_password_round_trip_and_distinct_hashes() {
    let first = auth::hash_password("Stage2@Remap").unwrap();
    let second = auth::hash_password("Stage2@Remap").unwrap();

    // bcrypt salts per call; equal passwords must still verify.
    assert_ne!(first, second);
    assert!(auth::verify_password("Stage2@Remap", &first));
    assert!(auth::verify_password("Stage2@Remap", &second));
    assert!(!auth::verify_password("stage2@remap", &first));
}
