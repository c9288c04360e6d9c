//! Adapters: inbound (HTTP) and outbound (data files) implementations.

pub mod inbound;
pub mod outbound;
