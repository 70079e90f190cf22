//! Core types for the Zootour concierge stack.
//!
//! The heart of this crate is the [`Catalog`]: an immutable, indexed
//! view over a fixed set of records loaded once at startup. Both data
//! services (animals and shows) are deployments of the same catalog,
//! differing only in record schema and index keys.

pub use {
    agent::Agent,
    catalog::Catalog,
    config::{ConfigError, ServiceConfig},
    error::LoadError,
    loader::{load, load_or_empty},
    record::{Animal, Record, Show},
};

mod agent;
mod catalog;
mod config;
mod error;
mod loader;
mod record;
