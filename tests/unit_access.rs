use coursedeck::middleware::admin::check_admin;
use coursedeck::middleware::auth::AuthUser;
use coursedeck::modules::auth::model::Claims;
use uuid::Uuid;

fn create_test_auth_user(is_admin: bool) -> AuthUser {
    AuthUser(Claims {
        sub: Uuid::new_v4().to_string(),
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        is_admin,
        exp: 9999999999,
        iat: 1234567890,
    })
}

#[test]
fn test_check_admin_allows_admin() {
    let auth_user = create_test_auth_user(true);
    assert!(check_admin(&auth_user).is_ok());
}

#[test]
fn test_check_admin_rejects_non_admin() {
    let auth_user = create_test_auth_user(false);
    assert!(check_admin(&auth_user).is_err());
}

#[test]
fn test_auth_user_exposes_claims() {
    let user_id = Uuid::new_v4();
    let auth_user = AuthUser(Claims {
        sub: user_id.to_string(),
        email: "claims@example.com".to_string(),
        name: "Claims Holder".to_string(),
        is_admin: false,
        exp: 9999999999,
        iat: 1234567890,
    });

    assert_eq!(auth_user.user_id().unwrap(), user_id);
    assert_eq!(auth_user.email(), "claims@example.com");
    assert!(!auth_user.is_admin());
}

#[test]
fn test_auth_user_invalid_sub_is_error() {
    let auth_user = AuthUser(Claims {
        sub: "garbage".to_string(),
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        is_admin: false,
        exp: 9999999999,
        iat: 1234567890,
    });

    assert!(auth_user.user_id().is_err());
}
