use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn rejected_login_statuses_mean_invalid_credentials() {
    for status in [400, 401, 403, 404] {
        assert_eq!(auth_status_error(status), AuthError::InvalidCredentials, "{status}");
    }
}

#[test]
fn other_statuses_are_server_failures() {
    assert_eq!(auth_status_error(500), AuthError::Server(500));
    assert_eq!(auth_status_error(429), AuthError::Server(429));
}

#[test]
fn token_from_login_rejects_blank_token() {
    let body = LoginResponse {
        first_name: String::new(),
        last_name: String::new(),
        email: "a@b.com".to_owned(),
        access_token: "  ".to_owned(),
        id: "u1".to_owned(),
    };
    assert_eq!(token_from_login(body), Err(AuthError::MissingField("accessToken")));
}

#[test]
fn token_from_login_returns_opaque_token() {
    let body = LoginResponse {
        first_name: "Ada".to_owned(),
        last_name: "L".to_owned(),
        email: "a@b.com".to_owned(),
        access_token: "abc123".to_owned(),
        id: "u1".to_owned(),
    };
    assert_eq!(token_from_login(body), Ok("abc123".to_owned()));
}

#[test]
fn check_sign_up_requires_account_id() {
    let missing = SignUpResponse {
        id: String::new(),
        first_name: "Ada".to_owned(),
        last_name: "L".to_owned(),
        email: "a@b.com".to_owned(),
    };
    assert_eq!(check_sign_up(missing), Err(AuthError::MissingField("_id")));
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_service_reports_network_error_outside_browser() {
    let service = HttpCredentialService::new(ConsoleConfig::default());
    let creds = Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    let result = futures::executor::block_on(service.authenticate(&creds));
    assert!(matches!(result, Err(AuthError::Network(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn dashboard_fetch_reports_network_error_outside_browser() {
    let result = futures::executor::block_on(fetch_dashboard(ConsoleConfig::default(), "abc123"));
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[test]
fn sign_up_rejection_keeps_server_message() {
    let body = MessageResponse { message: " Email already exists ".to_owned() };
    assert_eq!(sign_up_status_error(409, Some(body)), AuthError::Rejected("Email already exists".to_owned()));
}

#[test]
fn sign_up_rejection_without_message_is_server_failure() {
    assert_eq!(sign_up_status_error(500, None), AuthError::Server(500));
    let blank = MessageResponse { message: String::new() };
    assert_eq!(sign_up_status_error(400, Some(blank)), AuthError::Server(400));
}
