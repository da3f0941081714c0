//! # Syrins Share Core
//!
//! Shared, I/O-free logic for Syrins Share: listing models, path naming
//! helpers, MIME and language lookup, listing normalization, client-side
//! search, and the per-minute API token.
//!
//! This crate contains no tokio, reqwest, or filesystem dependencies. The
//! `syrins-share` crate wires it to the HTTP backend and the CLI.

pub mod display;
pub mod filter;
pub mod language;
pub mod mime;
pub mod models;
pub mod naming;
pub mod normalize;
pub mod token;
