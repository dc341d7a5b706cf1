use registrar::config::jwt::JwtConfig;
use registrar::middleware::principal::Role;
use registrar::utils::errors::AccessError;
use registrar::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();
    let subject_id = Uuid::new_v4();

    let result = create_access_token(subject_id, Role::Student, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_verify_token_success() {
    let jwt_config = get_test_jwt_config();
    let subject_id = Uuid::new_v4();

    let token = create_access_token(subject_id, Role::Faculty, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, subject_id.to_string());
    assert_eq!(claims.role, "faculty");
}

#[test]
fn test_token_contains_correct_role_for_all_roles() {
    let jwt_config = get_test_jwt_config();
    let subject_id = Uuid::new_v4();

    for (role, expected) in [
        (Role::Admin, "admin"),
        (Role::Faculty, "faculty"),
        (Role::Student, "student"),
    ] {
        let token = create_access_token(subject_id, role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, expected);
    }
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(matches!(result, Err(AccessError::InvalidCredential)));
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let subject_id = Uuid::new_v4();

    let token = create_access_token(subject_id, Role::Student, &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    let result = verify_token(&token, &wrong_jwt_config);

    assert!(matches!(result, Err(AccessError::InvalidCredential)));
}

#[test]
fn test_verify_token_expired() {
    // Issue a token that expired an hour ago; expiry must be reported
    // distinctly from a malformed or forged token.
    let expired_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: -3600,
    };
    let subject_id = Uuid::new_v4();

    let token = create_access_token(subject_id, Role::Admin, &expired_config).unwrap();
    let result = verify_token(&token, &expired_config);

    assert!(matches!(result, Err(AccessError::ExpiredCredential)));
}

#[test]
fn test_verify_token_empty() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert!(matches!(result, Err(AccessError::InvalidCredential)));
    }
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();
    let subject_id = Uuid::new_v4();

    let token = create_access_token(subject_id, Role::Student, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_create_token_different_subjects_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let subject_id1 = Uuid::new_v4();
    let subject_id2 = Uuid::new_v4();

    let token1 = create_access_token(subject_id1, Role::Student, &jwt_config).unwrap();
    let token2 = create_access_token(subject_id2, Role::Student, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.sub, subject_id1.to_string());
    assert_eq!(claims2.sub, subject_id2.to_string());
}
