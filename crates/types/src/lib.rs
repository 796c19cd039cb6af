//! # SIMRS Types
//!
//! Record shapes for the hospital-operations dashboard.
//!
//! This crate defines the five data sets the dashboard consumes (audit log,
//! patient registration, clinical records, staffing, billing) together with
//! their closed status enumerations. Records are plain immutable values:
//! they carry no behaviour beyond derived accessors, and every derived view
//! is recomputed from the source records rather than stored.
//!
//! **No presentation concerns**: formatting, column layouts and aggregation
//! belong in `simrs-core`.

pub mod records;
pub mod status;

pub use records::{
    AuditLogEntry, BillingRecord, ClinicalRecord, PatientRecord, StaffRecord,
};
pub use status::{
    AgentKind, ClaimStatus, DelegationStatus, PayerCategory, RegistrationType, UnknownValueError,
};
