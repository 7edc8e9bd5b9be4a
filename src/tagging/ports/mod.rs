//! Port contracts for tagging-service clients.
//!
//! Ports define infrastructure-agnostic interfaces consumed by the
//! resolution and dispatch services.

pub mod client;

pub use client::{
    AcceptsApiKey, AcceptsCredentials, TaggingClient, TaggingClientError, TaggingClientResult,
};
