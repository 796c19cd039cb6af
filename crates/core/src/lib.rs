//! # SIMRS Core
//!
//! Core logic for the hospital-operations dashboard.
//!
//! This crate contains pure computations over in-memory record arrays:
//! - Dashboard metrics aggregation (revenue/cost totals, margin, claim and
//!   audit counts, payer-mix distribution, chart series)
//! - A generic table renderer projecting records into formatted rows via
//!   per-entity column specifications
//! - Locale formatting helpers (IDR currency, dates)
//! - Bundled demo fixtures standing in for an external data store
//!
//! Everything here is synchronous and side-effect free: inputs are borrowed,
//! outputs are new values, and every derived figure is recomputed per call.
//! Callers that need stability across renders memoize on their side.
//!
//! **No presentation concerns**: terminal/text layout belongs to the
//! `simrs-dash` binary.

pub mod error;
pub mod fixtures;
pub mod format;
pub mod metrics;
pub mod table;

pub use error::{OpsError, OpsResult};
pub use metrics::{
    recent_activity, revenue_series, ActivityLine, DashboardSummary, PayerMix, PayerSlice,
    RevenuePoint,
};
pub use table::{
    render_rows, render_table, Cell, CellValue, Column, RecordSet, Row, TableView, Tone,
};
