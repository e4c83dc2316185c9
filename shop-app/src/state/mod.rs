//! Client-side state: the shopper's session and the route guard.

pub mod guard;
pub mod session;
