// src/fetch/mod.rs
// =============================================================================
// This module downloads things over HTTP.
//
// Submodules:
// - http: the HttpClient trait, its response type, and the reqwest-backed
//   implementation used by the binary
//
// The mirror pipeline only talks to the HttpClient trait, so tests can swap
// in an in-memory client and count how many requests were made.
// =============================================================================

pub mod http;

pub use http::{BodyMode, FetchError, HttpClient, ReqwestClient};
