//! Route guard for the admin console.
//!
//! The check is synchronous and reads only the already-loaded session
//! state; it never touches the network. Every console screen except the
//! login page requires a session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Login screen path.
pub const LOGIN_PATH: &str = "/login";
/// Application root, used when a signed-in user hits the login screen.
pub const ROOT_PATH: &str = "/";

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

/// Decide whether a navigation to `target` may proceed.
///
/// Unauthenticated access to a console screen redirects to the login page
/// with the originally requested path riding along as the `redirect`
/// query parameter, so the login page can send the operator back.
pub fn before_navigate(target: &str, authenticated: bool) -> RouteDecision {
    let path = target.split('?').next().unwrap_or(target);
    if path == LOGIN_PATH {
        if authenticated {
            RouteDecision::Redirect(ROOT_PATH.to_owned())
        } else {
            RouteDecision::Allow
        }
    } else if authenticated {
        RouteDecision::Allow
    } else {
        let back = utf8_percent_encode(target, REDIRECT_PARAM_ENCODE_SET);
        RouteDecision::Redirect(format!("{LOGIN_PATH}?redirect={back}"))
    }
}
