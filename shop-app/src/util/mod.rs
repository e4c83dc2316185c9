//! Small shared helpers.

pub mod image_url;
pub mod storage;
