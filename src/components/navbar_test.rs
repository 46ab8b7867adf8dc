use super::*;

#[test]
fn auth_screens_hide_all_actions() {
    for path in ["/login", "/signup"] {
        assert!(navbar_actions(path, &Session::signed_out()).is_empty());
        assert!(navbar_actions(path, &Session::signed_in("abc123")).is_empty());
    }
}

#[test]
fn signed_out_visitor_sees_login() {
    assert_eq!(navbar_actions("/", &Session::signed_out()), vec![NavAction::Login]);
}

#[test]
fn signed_in_staff_see_dashboard_and_logout() {
    assert_eq!(
        navbar_actions("/dashboard/book", &Session::signed_in("abc123")),
        vec![NavAction::Dashboard, NavAction::Logout]
    );
}

#[test]
fn restoring_session_offers_nothing() {
    assert!(navbar_actions("/dashboard", &Session::restoring()).is_empty());
}
