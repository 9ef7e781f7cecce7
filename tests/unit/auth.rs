use roadmap_backend::config::AuthConfig;
use roadmap_backend::db::models::auth::AuthUser;
use roadmap_backend::middleware::auth::AuthService;
use uuid::Uuid;

fn auth_service() -> AuthService {
    AuthService::new(AuthConfig {
        jwt_secret: "unit-test-secret".to_string(),
        access_token_expires_in: 3600,
        refresh_token_expires_in: 604_800,
        otp_code_ttl: 600,
    })
}

#[test]
fn access_token_round_trips() {
    let service = auth_service();
    let user = AuthUser {
        id: Uuid::new_v4(),
        email: "jane@example.com".to_string(),
    };

    let token = service.generate_access_token(&user).unwrap();
    let claims = service.verify_token(&token).unwrap();

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert!(claims.exp > claims.iat);
}

#[test]
fn garbage_and_foreign_tokens_are_rejected() {
    let service = auth_service();
    assert!(service.verify_token("not-a-jwt").is_err());

    let other = AuthService::new(AuthConfig {
        jwt_secret: "a-different-secret".to_string(),
        access_token_expires_in: 3600,
        refresh_token_expires_in: 604_800,
        otp_code_ttl: 600,
    });
    let user = AuthUser {
        id: Uuid::new_v4(),
        email: "jane@example.com".to_string(),
    };
    let token = other.generate_access_token(&user).unwrap();
    assert!(service.verify_token(&token).is_err());
}

#[test]
fn refresh_tokens_are_minted_per_call() {
    let service = auth_service();
    let user_id = Uuid::new_v4();
    let first = service.generate_refresh_token(user_id).unwrap();
    let second = service.generate_refresh_token(user_id).unwrap();
    // Distinct jti per token.
    assert_ne!(first, second);
}
