//! Networking modules for the analysis backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `types` defines the wire schema and the
//! one-time resolution of its optional fields into render-ready form.

pub mod api;
pub mod types;
