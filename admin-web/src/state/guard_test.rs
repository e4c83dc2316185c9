use super::*;

// =============================================================
// login screen
// =============================================================

#[test]
fn login_with_token_redirects_to_root() {
    assert_eq!(
        before_navigate(LOGIN_PATH, true),
        RouteDecision::Redirect(ROOT_PATH.to_owned())
    );
}

#[test]
fn login_without_token_allows() {
    assert_eq!(before_navigate(LOGIN_PATH, false), RouteDecision::Allow);
}

#[test]
fn login_with_query_is_still_the_login_screen() {
    assert_eq!(
        before_navigate("/login?redirect=%2Fgames", false),
        RouteDecision::Allow
    );
}

// =============================================================
// protected screens
// =============================================================

#[test]
fn protected_with_token_allows() {
    assert_eq!(before_navigate("/games", true), RouteDecision::Allow);
    assert_eq!(before_navigate("/", true), RouteDecision::Allow);
}

#[test]
fn protected_without_token_redirects_with_return_param() {
    assert_eq!(
        before_navigate("/games", false),
        RouteDecision::Redirect("/login?redirect=%2Fgames".to_owned())
    );
}

#[test]
fn return_param_preserves_target_query() {
    assert_eq!(
        before_navigate("/games?page=2", false),
        RouteDecision::Redirect("/login?redirect=%2Fgames%3Fpage%3D2".to_owned())
    );
}
