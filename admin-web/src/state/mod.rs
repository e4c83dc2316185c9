//! Client-side session state and navigation rules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted token/profile pair; `guard` is the pure
//! navigation policy consulted before every route change.

pub mod guard;
pub mod session;
