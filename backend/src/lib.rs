//! # Period Sync
//!
//! Calendar-period hierarchy generator for data synchronizers.
//!
//! Given a date range and a reference "now", the service produces for each
//! granularity (Day, Week, Month, Quarter, Year) a contiguous sequence of
//! period records covering the range. Every record carries a stable id, a
//! display name, its signed offset from the current period, a localized
//! semantic label, the ids of the coarser periods enclosing it, and a link to
//! its predecessor of the same granularity.
//!
//! ## Architecture
//!
//! - [`api`]: request and response types
//! - [`models`]: granularities, intervals, records and locales
//! - [`services`]: identifier minting, calendar arithmetic, containment and
//!   hierarchy assembly
//! - [`config`]: TOML/environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use period_sync::models::{Granularity, Locale};
//! use period_sync::services::{DateSpan, HierarchyBuilder};
//!
//! let today = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
//! let span = DateSpan::new(
//!     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 1, 28).unwrap(),
//! )
//! .unwrap();
//!
//! let weeks = HierarchyBuilder::new(today, Locale::English)
//!     .build_granularity(&span, Granularity::Week)
//!     .unwrap();
//! assert_eq!(weeks[1].name, "2023W01 (last week)");
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{PeriodError, PeriodResult};
