//! # Syrins Share
//!
//! Client for the Syrins Share snippet archive and image gallery.
//!
//! The backend exposes two listings behind a per-minute shared-secret
//! token. This crate fetches them, normalizes every raw record into a
//! display-ready entry (via [`share_core`]), and offers the list, search,
//! detail, and download operations the `share` CLI is built on.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐   ┌─────────────┐   ┌──────────────┐
//! │ TokenGenerator │──▶│  ApiClient  │──▶│ TextListing  │
//! │ secret + minute│   │ X-API-Token │   │ ImageListing │
//! └────────────────┘   └─────────────┘   └──────┬───────┘
//!                                               ▼
//!                                        ┌──────────────┐
//!                                        │ ListingView  │──▶ list / get / actions
//!                                        └──────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`auth`] | Shared secret and token generation |
//! | [`client`] | Authenticated HTTP access |
//! | [`listing`] | Text and image listing normalizers |
//! | [`view`] | Listing state with stale-response guard |
//! | [`actions`] | Download and share actions |
//! | [`list`] | `share files` / `share images` |
//! | [`get`] | `share file` / `share image` |

pub mod actions;
pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod get;
pub mod list;
pub mod listing;
pub mod logging;
pub mod view;

pub use share_core;
