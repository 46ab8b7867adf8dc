use super::*;

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "hunter22".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter22"));
}

#[test]
fn sign_up_request_debug_redacts_password() {
    let req = SignUpRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@library.lk".to_owned(),
        password: "secret99".to_owned(),
        role: SIGN_UP_ROLE.to_owned(),
    };
    assert!(!format!("{req:?}").contains("secret99"));
}

#[test]
fn sign_up_request_serializes_camel_case() {
    let req = SignUpRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@library.lk".to_owned(),
        password: "secret99".to_owned(),
        role: SIGN_UP_ROLE.to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["lastName"], "Lovelace");
    assert_eq!(value["role"], "staff");
}

#[test]
fn login_response_reads_access_token_and_id() {
    let body = r#"{"firstName":"Ada","lastName":"L","email":"a@b.com","accessToken":"abc123","_id":"u1"}"#;
    let resp: LoginResponse = serde_json::from_str(body).expect("parse");
    assert_eq!(resp.access_token, "abc123");
    assert_eq!(resp.id, "u1");
}

#[test]
fn login_response_requires_access_token() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"_id":"u1"}"#).is_err());
}

#[test]
fn issued_book_resolves_missing_nested_fields_to_defaults() {
    let body = r#"{"_id":"i1","status":"Not Returned","dueDate":"2025-01-10"}"#;
    let issue: IssuedBook = serde_json::from_str(body).expect("parse");
    assert_eq!(issue.status, IssueStatus::NotReturned);
    assert_eq!(issue.book_title(), UNTITLED_BOOK);
    assert_eq!(issue.reader_name(), UNKNOWN_READER);
}

#[test]
fn issued_book_uses_nested_values_when_present() {
    let body = r#"{"_id":"i2","status":"Returned","dueDate":"2025-01-10",
        "book":{"title":"Dune"},"reader":{"name":"Nimal"}}"#;
    let issue: IssuedBook = serde_json::from_str(body).expect("parse");
    assert_eq!(issue.status, IssueStatus::Returned);
    assert_eq!(issue.book_title(), "Dune");
    assert_eq!(issue.reader_name(), "Nimal");
}

#[test]
fn issued_book_blank_or_null_title_falls_back() {
    let body = r#"{"_id":"i3","status":"Returned","book":{"title":null},"reader":{"name":"  "}}"#;
    let issue: IssuedBook = serde_json::from_str(body).expect("parse");
    assert_eq!(issue.book_title(), UNTITLED_BOOK);
    assert_eq!(issue.reader_name(), UNKNOWN_READER);
}

#[test]
fn unexpected_status_is_unknown() {
    let issue: IssuedBook = serde_json::from_str(r#"{"_id":"i4","status":"Lost"}"#).expect("parse");
    assert_eq!(issue.status, IssueStatus::Unknown);
}

#[test]
fn issued_books_payload_accepts_wrapped_and_bare_shapes() {
    let wrapped: IssuedBooksPayload =
        serde_json::from_str(r#"{"message":"ok","data":[{"_id":"i1","status":"Returned"}]}"#).expect("parse");
    assert_eq!(wrapped.into_vec().len(), 1);

    let bare: IssuedBooksPayload =
        serde_json::from_str(r#"[{"_id":"i1","status":"Returned"},{"_id":"i2","status":"Returned"}]"#)
            .expect("parse");
    assert_eq!(bare.into_vec().len(), 2);

    let missing: IssuedBooksPayload = serde_json::from_str(r#"{"message":"empty"}"#).expect("parse");
    assert!(missing.into_vec().is_empty());
}
