use super::*;

#[test]
fn paths_match_segments() {
    for route in AppRoute::ALL {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn from_path_round_trips_every_route() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_tolerates_trailing_slash() {
    assert_eq!(AppRoute::from_path("/dashboard/"), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
}

#[test]
fn from_path_rejects_unknown() {
    assert_eq!(AppRoute::from_path("/register"), None);
    assert_eq!(AppRoute::from_path(""), None);
}

#[test]
fn only_home_and_login_are_public() {
    let public: Vec<_> = AppRoute::ALL.into_iter().filter(|r| !r.is_protected()).collect();
    assert_eq!(public, vec![AppRoute::Home, AppRoute::Login]);
}

#[test]
fn anonymous_nav_shows_home_and_login() {
    let labels: Vec<_> = nav_links(false).iter().map(|r| r.label()).collect();
    assert_eq!(labels, ["Home", "Login"]);
}

#[test]
fn member_nav_shows_onboarding_sections() {
    let labels: Vec<_> = nav_links(true).iter().map(|r| r.label()).collect();
    assert_eq!(
        labels,
        ["Dashboard", "KYC Profile", "UBO Declaration", "PEP Declaration", "Documents"]
    );
}

#[test]
fn is_protected_path_checks_route_table() {
    assert!(is_protected_path("/documents"));
    assert!(!is_protected_path("/login"));
    assert!(!is_protected_path("/nowhere"));
}
