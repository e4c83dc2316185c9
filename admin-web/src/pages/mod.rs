//! Console pages. Thin by design: everything interesting happens in
//! `net` and `state`.

pub mod dashboard;
pub mod games;
pub mod login;
