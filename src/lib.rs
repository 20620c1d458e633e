//! # staffdb
//!
//! A menu-driven employee record manager with:
//! - An in-memory record store keyed by integer id
//! - A per-id history of every record ever inserted
//! - JSON export of the history to a file on demand
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Menu Session                           │
//! │              (read prompt, dispatch command)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RecordStore │─────────▶│  Exporter   │
//!   │ table + log │  history │   (JSON)    │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod export;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StaffError, Result};
pub use config::Config;
pub use record::Employee;
pub use store::RecordStore;
pub use export::Exporter;
pub use menu::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of staffdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
