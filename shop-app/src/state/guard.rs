//! Route guard for the shopper app.
//!
//! Unlike an admin console, most of the app is public: anyone can browse
//! the catalog and read reviews without an account. Only the screens tied
//! to a shopper identity are gated, by path prefix. The check is
//! synchronous and reads only the already-loaded session state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Login screen path.
pub const LOGIN_PATH: &str = "/login";
/// Landing screen, used when a signed-in shopper hits the login screen.
pub const HOME_PATH: &str = "/";

/// Path prefixes that require a session.
const PROTECTED_PREFIXES: &[&str] = &["/cart", "/orders", "/checkout", "/profile"];

const REDIRECT_PARAM_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'=')
    .add(b'?');

/// Outcome of a navigation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Decide whether a navigation to `target` may proceed.
///
/// Public screens always pass. A logged-out shopper heading for a
/// protected screen is sent to the login page with the requested path
/// riding along as the `redirect` query parameter, so login can bounce
/// them straight back.
pub fn before_navigate(target: &str, authenticated: bool) -> RouteDecision {
    let path = target.split('?').next().unwrap_or(target);
    if path == LOGIN_PATH {
        if authenticated {
            RouteDecision::Redirect(HOME_PATH.to_owned())
        } else {
            RouteDecision::Allow
        }
    } else if authenticated || !is_protected(path) {
        RouteDecision::Allow
    } else {
        let back = utf8_percent_encode(target, REDIRECT_PARAM_ENCODE_SET);
        RouteDecision::Redirect(format!("{LOGIN_PATH}?redirect={back}"))
    }
}
