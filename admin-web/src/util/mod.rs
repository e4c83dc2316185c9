//! Small shared utilities.

pub mod storage;
