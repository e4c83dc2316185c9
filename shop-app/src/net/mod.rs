//! HTTP request pipeline and REST endpoint wrappers.
//!
//! DESIGN
//! ======
//! `http` owns the shared pipeline; `api` is one thin function per REST
//! operation, grouped the way the backend groups its controllers; `types`
//! holds the wire DTOs; `error` is the caller-facing error taxonomy.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
