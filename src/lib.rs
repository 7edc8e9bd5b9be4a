//! Folksonomy: multi-service content tagging dispatcher.
//!
//! This crate resolves heterogeneous service configuration into live
//! tagging-service clients and aggregates tag results across all of them.
//!
//! # Architecture
//!
//! Folksonomy follows hexagonal architecture principles:
//!
//! - **Domain**: Pure configuration and tag value objects with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for tagging-service clients
//! - **Adapters**: Concrete implementations of ports (vendor APIs,
//!   in-memory test doubles)
//!
//! # Modules
//!
//! - [`tagging`]: Descriptor resolution, client registry, and fan-out
//!   dispatch

pub mod tagging;
