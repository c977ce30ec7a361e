//! # slayer-lookup
//!
//! Lookup client for the Demon Slayer REST API: characters, breathing styles
//! and demons, rendered into display-ready records.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Name normalization, image cleanup, records, view state (always available)
//! 2. **HTTP API** — `LookupHttp` with opt-in retry policies
//! 3. **High-Level Client** — `LookupClient` with per-category sub-clients, and the `Dashboard`
//! 4. **Server** — Static page server (`server` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use slayer_lookup::prelude::*;
//!
//! let client = LookupClient::builder().build()?;
//!
//! let tanjiro = client.characters().get("Tanjiro Kamado").await?;
//! for line in tanjiro.detail_lines() {
//!     println!("{line}");
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, name normalization and image URL cleanup.
pub mod shared;

/// Domain modules (vertical slices): records and view state.
pub mod domain;

/// Lookup error types.
pub mod error;

/// Network and asset constants.
pub mod network;

/// Environment configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `LookupClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

/// `Dashboard` — owner of the per-section view state.
#[cfg(feature = "http")]
pub mod dashboard;

// ── Layer 4: Server ──────────────────────────────────────────────────────────

/// Static page server.
#[cfg(feature = "server")]
pub mod server;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{
        clean_image_url, normalize_name, resolve_image, Category, Endpoint, RouteLayout,
    };

    // Domain types
    pub use crate::domain::record::wire::{ApiRecord, RecordResponse};
    pub use crate::domain::record::{DetailField, DetailItem, DisplayResult, DETAIL_FIELDS};
    pub use crate::domain::view::{SectionState, SectionView};

    // Errors + config
    pub use crate::config::Config;
    pub use crate::error::{HttpError, LookupError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_CHARACTER, PLACEHOLDER_IMAGE};

    // HTTP client + sub-client
    #[cfg(feature = "http")]
    pub use crate::client::{LookupClient, LookupClientBuilder, LookupSubClient};
    #[cfg(feature = "http")]
    pub use crate::dashboard::Dashboard;
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
