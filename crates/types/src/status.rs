//! Closed enumerations used by the dashboard record shapes.
//!
//! Each enum carries its upstream wire string (the label the source system
//! emits and the tables display) via `as_str`/`FromStr`. Serde uses the same
//! strings, so fixtures and any future external feed share one vocabulary.

use serde::{Deserialize, Serialize};

/// Error returned when a wire string does not name a known enum value.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownValueError {
    kind: &'static str,
    value: String,
}

impl UnknownValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Outcome of a simulated task handoff recorded in the agent audit log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelegationStatus {
    Success,
    Failure,
    Pending,
}

impl DelegationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DelegationStatus::Success => "Success",
            DelegationStatus::Failure => "Failure",
            DelegationStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for DelegationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DelegationStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(DelegationStatus::Success),
            "Failure" => Ok(DelegationStatus::Failure),
            "Pending" => Ok(DelegationStatus::Pending),
            other => Err(UnknownValueError::new("delegation status", other)),
        }
    }
}

/// How a patient entered the hospital. Wire strings are the Indonesian
/// registration labels used by the source system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationType {
    /// "Rawat Jalan" - outpatient visit.
    #[serde(rename = "Rawat Jalan")]
    Outpatient,
    /// "Rawat Inap" - inpatient admission.
    #[serde(rename = "Rawat Inap")]
    Inpatient,
    /// "UGD" - emergency department.
    #[serde(rename = "UGD")]
    Emergency,
}

impl RegistrationType {
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationType::Outpatient => "Rawat Jalan",
            RegistrationType::Inpatient => "Rawat Inap",
            RegistrationType::Emergency => "UGD",
        }
    }
}

impl std::fmt::Display for RegistrationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegistrationType {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rawat Jalan" => Ok(RegistrationType::Outpatient),
            "Rawat Inap" => Ok(RegistrationType::Inpatient),
            "UGD" => Ok(RegistrationType::Emergency),
            other => Err(UnknownValueError::new("registration type", other)),
        }
    }
}

/// Claim lifecycle state on a billing record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Denied,
}

impl ClaimStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Denied => "Denied",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClaimStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClaimStatus::Pending),
            "Approved" => Ok(ClaimStatus::Approved),
            "Denied" => Ok(ClaimStatus::Denied),
            other => Err(UnknownValueError::new("claim status", other)),
        }
    }
}

/// The agent a logged request was delegated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    #[serde(rename = "Manage Hospital Operations")]
    Main,
    #[serde(rename = "Patient Management Subagent")]
    Patient,
    #[serde(rename = "Medical Records Subagent")]
    Medical,
    #[serde(rename = "Staff Management Subagent")]
    Staff,
    #[serde(rename = "Billing And Insurance Subagent")]
    Billing,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Main => "Manage Hospital Operations",
            AgentKind::Patient => "Patient Management Subagent",
            AgentKind::Medical => "Medical Records Subagent",
            AgentKind::Staff => "Staff Management Subagent",
            AgentKind::Billing => "Billing And Insurance Subagent",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payer bucket for the payer-mix distribution.
///
/// Categorisation is owned here as a closed enum, computed once from the
/// free-text insurer name instead of being re-derived at every render site.
/// The matching rule itself is preserved from the source system: a substring
/// check for "BPJS", an exact match for "Self Pay", everything else private.
/// The substring check is known to over-match (an insurer named
/// "BPJS-adjacent Corp" would land in the BPJS bucket); that behaviour is
/// kept intact until the upstream system emits a category of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayerCategory {
    /// National public insurance (BPJS Kesehatan and variants).
    Bpjs,
    /// Any private insurer.
    Private,
    /// Uninsured, paying out of pocket.
    SelfPay,
}

impl PayerCategory {
    /// Classify an insurer name. Every name falls into exactly one bucket.
    pub fn classify(insurance_name: &str) -> Self {
        if insurance_name.contains("BPJS") {
            PayerCategory::Bpjs
        } else if insurance_name == "Self Pay" {
            PayerCategory::SelfPay
        } else {
            PayerCategory::Private
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PayerCategory::Bpjs => "BPJS",
            PayerCategory::Private => "Private",
            PayerCategory::SelfPay => "Self Pay",
        }
    }
}

impl std::fmt::Display for PayerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
