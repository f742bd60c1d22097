//! HTTP access module.
//!
//! This module provides:
//! - The `Fetcher` trait the pipeline stages are written against
//! - A `reqwest` implementation of it

pub mod client;

pub use client::{Fetcher, RemoteFile, SiteClient};
