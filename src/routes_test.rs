use super::*;

#[test]
fn auth_screens_are_public() {
    assert_eq!(classify("/"), RouteAccess::Public);
    assert_eq!(classify("/login"), RouteAccess::Public);
    assert_eq!(classify("/signup"), RouteAccess::Public);
}

#[test]
fn dashboard_screens_are_protected() {
    for path in ["/dashboard", "/dashboard/book", "/dashboard/reader", "/dashboard/issuebook"] {
        assert_eq!(classify(path), RouteAccess::Protected, "{path}");
    }
}

#[test]
fn unknown_paths_fail_closed() {
    assert_eq!(classify("/admin"), RouteAccess::Protected);
    assert_eq!(classify("/dashboard/unknown"), RouteAccess::Protected);
}

#[test]
fn from_path_ignores_single_trailing_slash() {
    assert_eq!(AppRoute::from_path("/dashboard/"), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::from_path("/dashboard//"), None);
}

#[test]
fn every_route_round_trips_through_its_path() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}
