//! HTTP request pipeline and REST endpoint wrappers.
//!
//! DESIGN
//! ======
//! `http` owns the shared pipeline (base address, bearer injection, 401
//! handling, error classification); `api` is one thin function per REST
//! operation; `types` holds the wire DTOs; `error` is the caller-facing
//! error taxonomy.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
