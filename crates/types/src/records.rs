//! The five dashboard record shapes.
//!
//! Field names follow the upstream wire schema so fixtures and serde stay
//! aligned with the source system. Ids are unique within their own
//! collection; `patient_id`/`recorded_by_staff_id` on clinical and billing
//! records are weak references (relation only, existence not enforced).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{
    AgentKind, ClaimStatus, DelegationStatus, PayerCategory, RegistrationType,
};

/// One entry in the agent delegation audit trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub log_id: u64,
    pub timestamp: DateTime<Utc>,
    pub request_origin: String,
    pub user_request_text: String,
    pub delegated_agent: AgentKind,
    pub transaction_id: String,
    pub delegation_status: DelegationStatus,
}

/// Front-office patient registration record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    /// National identity number (NIK).
    pub nik: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub contact_number: String,
    pub registration_date: NaiveDate,
    pub appointment_timestamp: DateTime<Utc>,
    pub registration_type: RegistrationType,
}

/// Electronic medical record detail line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub record_detail_id: u64,
    /// Weak reference into the patient collection.
    pub patient_id: String,
    pub encounter_id: String,
    pub encounter_date: DateTime<Utc>,
    pub diagnosis_icd_code: String,
    pub procedure_icd_code: Option<String>,
    /// URI of the full clinical notes document in the external store.
    pub clinical_notes_uri: String,
    /// Weak reference into the staff collection.
    pub recorded_by_staff_id: String,
    pub data_integrity_hash: String,
}

/// HR staff roster entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub staff_id: String,
    pub staff_name: String,
    pub role_or_position: String,
    pub department: String,
    pub assigned_shift_schedule: String,
    pub contact_info: String,
    pub is_active: bool,
}

/// Billing line with activity-based unit cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillingRecord {
    pub billing_id: u64,
    /// Weak reference into the patient collection.
    pub patient_id: String,
    pub encounter_id: String,
    pub service_date: NaiveDate,
    pub total_charge: f64,
    pub insurance_name: String,
    pub claim_status: ClaimStatus,
    /// Absent exactly while the claim is unpaid (assumed, not enforced).
    pub payment_received_date: Option<NaiveDate>,
    /// Precomputed activity-based cost for the billed services.
    pub unit_cost_abc: f64,
}

impl BillingRecord {
    /// Gross margin for this line. Derived, never stored; may be negative
    /// when the costed services exceed the charge.
    pub fn margin(&self) -> f64 {
        self.total_charge - self.unit_cost_abc
    }

    /// Payer bucket for this line, classified from the insurer name.
    pub fn payer_category(&self) -> PayerCategory {
        PayerCategory::classify(&self.insurance_name)
    }
}
