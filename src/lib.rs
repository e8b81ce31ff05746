//! A thin asynchronous CRUD layer over a hosted document database.
//!
//! Documents are JSON objects grouped into named collections. The
//! [`Collections`] facade exposes four operations (add, get, update, remove),
//! each a single round trip to whichever [`StoreClient`] it was built with:
//! `RestClient` for the hosted service (feature `rest`, on by default),
//! [`MemoryClient`] for tests and local development.

mod client;
mod collections;
mod config;
mod document;
mod error;
mod memory;
#[cfg(feature = "rest")]
mod rest;

pub use client::StoreClient;
pub use collections::Collections;
pub use config::{StoreConfig, DEFAULT_ENDPOINT};
pub use document::{Document, Fields};
pub use error::StoreError;
pub use memory::MemoryClient;
#[cfg(feature = "rest")]
pub use rest::RestClient;
