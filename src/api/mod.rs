//! Exchange REST API plumbing: request signing, signed dispatch, wire types.

pub mod auth;
pub mod client;
pub mod types;
