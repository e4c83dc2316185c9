use super::*;

// =============================================================
// login screen
// =============================================================

#[test]
fn login_with_token_redirects_home() {
    assert_eq!(
        before_navigate(LOGIN_PATH, true),
        RouteDecision::Redirect(HOME_PATH.to_owned())
    );
}

#[test]
fn login_without_token_allows() {
    assert_eq!(before_navigate(LOGIN_PATH, false), RouteDecision::Allow);
}

#[test]
fn login_with_query_is_still_the_login_screen() {
    assert_eq!(
        before_navigate("/login?redirect=%2Fcart", false),
        RouteDecision::Allow
    );
}

// =============================================================
// public browsing
// =============================================================

#[test]
fn catalog_is_browsable_without_a_session() {
    assert_eq!(before_navigate("/", false), RouteDecision::Allow);
    assert_eq!(before_navigate("/games/42", false), RouteDecision::Allow);
    assert_eq!(before_navigate("/search?q=zelda", false), RouteDecision::Allow);
}

#[test]
fn prefix_match_is_per_segment() {
    // "/cartoons" shares a prefix with "/cart" but is a different screen.
    assert_eq!(before_navigate("/cartoons", false), RouteDecision::Allow);
}

// =============================================================
// protected screens
// =============================================================

#[test]
fn protected_with_token_allows() {
    assert_eq!(before_navigate("/cart", true), RouteDecision::Allow);
    assert_eq!(before_navigate("/orders/7", true), RouteDecision::Allow);
    assert_eq!(before_navigate("/profile", true), RouteDecision::Allow);
}

#[test]
fn protected_without_token_redirects_with_return_param() {
    assert_eq!(
        before_navigate("/cart", false),
        RouteDecision::Redirect("/login?redirect=%2Fcart".to_owned())
    );
    assert_eq!(
        before_navigate("/orders/7", false),
        RouteDecision::Redirect("/login?redirect=%2Forders%2F7".to_owned())
    );
}

#[test]
fn return_param_preserves_target_query() {
    assert_eq!(
        before_navigate("/orders?status=PENDING", false),
        RouteDecision::Redirect("/login?redirect=%2Forders%3Fstatus%3DPENDING".to_owned())
    );
}
