//! Generic table rendering.
//!
//! One renderer, five tables: each record kind gets a column specification
//! (a slice of headers paired with cell extractors), and `render_rows`
//! projects any record slice through its spec into presentation-ready rows.
//! The five dashboard table views are therefore data, not five renderers.
//!
//! Rendering never mutates or validates the input records. A missing
//! optional field renders as the `-` placeholder; a status string the tone
//! table does not know falls back to the neutral tone.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use simrs_types::{AuditLogEntry, BillingRecord, ClinicalRecord, PatientRecord, StaffRecord};

use crate::error::OpsResult;
use crate::format::{format_date, format_idr, format_timestamp};

/// Visual style tag attached to status-like cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Negative,
    Warning,
    Info,
    Highlight,
    Critical,
    Neutral,
}

/// Fixed lookup from known status/category strings to a tone. Unknown
/// values get the neutral tone rather than an error.
pub fn tone_for(status: &str) -> Tone {
    match status {
        "Success" | "Approved" | "Active" => Tone::Positive,
        "Failure" | "Denied" => Tone::Negative,
        "Pending" => Tone::Warning,
        "Rawat Jalan" => Tone::Info,
        "Rawat Inap" => Tone::Highlight,
        "UGD" => Tone::Critical,
        _ => Tone::Neutral,
    }
}

/// Typed value extracted from a record, before display formatting.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
    Currency(f64),
    /// Currency whose sign carries meaning (margins): renders with a
    /// positive or negative tone.
    SignedCurrency(f64),
    Status(String),
    /// Absent optional field; renders as the placeholder.
    Missing,
}

/// One formatted table cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    pub tone: Option<Tone>,
}

/// One column of a table view: a header and the extractor producing the
/// cell value for a record.
pub struct Column<R> {
    pub header: &'static str,
    pub cell: fn(&R) -> CellValue,
}

/// One rendered row; cells align with the view's headers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A complete rendered table view.
#[derive(Debug, Serialize)]
pub struct TableView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Row>,
}

impl TableView {
    /// Look up a cell by row index and column header.
    pub fn cell(&self, row: usize, header: &str) -> Option<&Cell> {
        let col = self.headers.iter().position(|h| *h == header)?;
        self.rows.get(row)?.cells.get(col)
    }

    /// Serialise the view for machine-readable output.
    pub fn to_json(&self) -> OpsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn render_cell(value: CellValue) -> Cell {
    match value {
        CellValue::Text(text) => Cell { text, tone: None },
        CellValue::Timestamp(ts) => Cell {
            text: format_timestamp(ts),
            tone: None,
        },
        CellValue::Date(date) => Cell {
            text: format_date(date),
            tone: None,
        },
        CellValue::Currency(amount) => Cell {
            text: format_idr(amount),
            tone: None,
        },
        CellValue::SignedCurrency(amount) => Cell {
            text: format_idr(amount),
            tone: Some(if amount >= 0.0 {
                Tone::Positive
            } else {
                Tone::Negative
            }),
        },
        CellValue::Status(status) => Cell {
            tone: Some(tone_for(&status)),
            text: status,
        },
        CellValue::Missing => Cell {
            text: "-".into(),
            tone: None,
        },
    }
}

/// Project records through a column spec, one row per record in input
/// order. An empty input renders zero rows.
pub fn render_rows<R>(records: &[R], columns: &[Column<R>]) -> Vec<Row> {
    records
        .iter()
        .map(|record| Row {
            cells: columns
                .iter()
                .map(|column| render_cell((column.cell)(record)))
                .collect(),
        })
        .collect()
}

/// Column spec for the agent audit log table.
pub const AUDIT_LOG_COLUMNS: &[Column<AuditLogEntry>] = &[
    Column {
        header: "Log ID",
        cell: |r: &AuditLogEntry| CellValue::Text(format!("#{}", r.log_id)),
    },
    Column {
        header: "Timestamp",
        cell: |r: &AuditLogEntry| CellValue::Timestamp(r.timestamp),
    },
    Column {
        header: "Origin",
        cell: |r: &AuditLogEntry| CellValue::Text(r.request_origin.clone()),
    },
    Column {
        header: "Request",
        cell: |r: &AuditLogEntry| CellValue::Text(r.user_request_text.clone()),
    },
    Column {
        header: "Delegated To",
        cell: |r: &AuditLogEntry| CellValue::Text(r.delegated_agent.to_string()),
    },
    Column {
        header: "Ref ID",
        cell: |r: &AuditLogEntry| CellValue::Text(r.transaction_id.clone()),
    },
    Column {
        header: "Status",
        cell: |r: &AuditLogEntry| CellValue::Status(r.delegation_status.to_string()),
    },
];

/// Column spec for the patient registration table.
pub const PATIENT_COLUMNS: &[Column<PatientRecord>] = &[
    Column {
        header: "Patient ID",
        cell: |r: &PatientRecord| CellValue::Text(r.patient_id.clone()),
    },
    Column {
        header: "NIK",
        cell: |r: &PatientRecord| CellValue::Text(r.nik.clone()),
    },
    Column {
        header: "Full Name",
        cell: |r: &PatientRecord| CellValue::Text(r.full_name.clone()),
    },
    Column {
        header: "DOB",
        cell: |r: &PatientRecord| CellValue::Date(r.date_of_birth),
    },
    Column {
        header: "Contact",
        cell: |r: &PatientRecord| CellValue::Text(r.contact_number.clone()),
    },
    Column {
        header: "Reg. Date",
        cell: |r: &PatientRecord| CellValue::Date(r.registration_date),
    },
    Column {
        header: "Type",
        cell: |r: &PatientRecord| CellValue::Status(r.registration_type.to_string()),
    },
];

/// Column spec for the clinical records table.
pub const CLINICAL_COLUMNS: &[Column<ClinicalRecord>] = &[
    Column {
        header: "Record ID",
        cell: |r: &ClinicalRecord| CellValue::Text(r.record_detail_id.to_string()),
    },
    Column {
        header: "Patient ID",
        cell: |r: &ClinicalRecord| CellValue::Text(r.patient_id.clone()),
    },
    Column {
        header: "Encounter",
        cell: |r: &ClinicalRecord| CellValue::Text(r.encounter_id.clone()),
    },
    Column {
        header: "Date",
        cell: |r: &ClinicalRecord| CellValue::Date(r.encounter_date.date_naive()),
    },
    Column {
        header: "Diagnosis (ICD)",
        cell: |r: &ClinicalRecord| CellValue::Text(r.diagnosis_icd_code.clone()),
    },
    Column {
        header: "Procedure (ICD)",
        cell: |r: &ClinicalRecord| match &r.procedure_icd_code {
            Some(code) => CellValue::Text(code.clone()),
            None => CellValue::Missing,
        },
    },
    Column {
        header: "Notes URI",
        cell: |r: &ClinicalRecord| CellValue::Text(r.clinical_notes_uri.clone()),
    },
    Column {
        header: "Integrity Hash",
        cell: |r: &ClinicalRecord| CellValue::Text(r.data_integrity_hash.clone()),
    },
];

/// Column spec for the staff roster table.
pub const STAFF_COLUMNS: &[Column<StaffRecord>] = &[
    Column {
        header: "Staff ID",
        cell: |r: &StaffRecord| CellValue::Text(r.staff_id.clone()),
    },
    Column {
        header: "Name",
        cell: |r: &StaffRecord| CellValue::Text(r.staff_name.clone()),
    },
    Column {
        header: "Role",
        cell: |r: &StaffRecord| CellValue::Text(r.role_or_position.clone()),
    },
    Column {
        header: "Department",
        cell: |r: &StaffRecord| CellValue::Text(r.department.clone()),
    },
    Column {
        header: "Shift",
        cell: |r: &StaffRecord| CellValue::Text(r.assigned_shift_schedule.clone()),
    },
    Column {
        header: "Status",
        cell: |r: &StaffRecord| {
            CellValue::Status(if r.is_active { "Active" } else { "Inactive" }.into())
        },
    },
];

/// Column spec for the billing table, including the derived margin column.
pub const BILLING_COLUMNS: &[Column<BillingRecord>] = &[
    Column {
        header: "Bill ID",
        cell: |r: &BillingRecord| CellValue::Text(r.billing_id.to_string()),
    },
    Column {
        header: "Patient",
        cell: |r: &BillingRecord| CellValue::Text(r.patient_id.clone()),
    },
    Column {
        header: "Encounter",
        cell: |r: &BillingRecord| CellValue::Text(r.encounter_id.clone()),
    },
    Column {
        header: "Insurance",
        cell: |r: &BillingRecord| CellValue::Text(r.insurance_name.clone()),
    },
    Column {
        header: "Total Charge",
        cell: |r: &BillingRecord| CellValue::Currency(r.total_charge),
    },
    Column {
        header: "Unit Cost (ABC)",
        cell: |r: &BillingRecord| CellValue::Currency(r.unit_cost_abc),
    },
    Column {
        header: "Margin",
        cell: |r: &BillingRecord| CellValue::SignedCurrency(r.margin()),
    },
    Column {
        header: "Status",
        cell: |r: &BillingRecord| CellValue::Status(r.claim_status.to_string()),
    },
];

/// Tagged union over the five record collections, so callers can hold "the
/// selected data set" as one value and render it with one call.
pub enum RecordSet {
    AuditLog(Vec<AuditLogEntry>),
    Patients(Vec<PatientRecord>),
    Clinical(Vec<ClinicalRecord>),
    Staff(Vec<StaffRecord>),
    Billing(Vec<BillingRecord>),
}

impl RecordSet {
    pub fn len(&self) -> usize {
        match self {
            RecordSet::AuditLog(records) => records.len(),
            RecordSet::Patients(records) => records.len(),
            RecordSet::Clinical(records) => records.len(),
            RecordSet::Staff(records) => records.len(),
            RecordSet::Billing(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn view<R>(
    title: &'static str,
    subtitle: &'static str,
    records: &[R],
    columns: &[Column<R>],
) -> TableView {
    TableView {
        title,
        subtitle,
        headers: columns.iter().map(|c| c.header).collect(),
        rows: render_rows(records, columns),
    }
}

/// Render the table view for a record set, dispatching to its column spec.
pub fn render_table(set: &RecordSet) -> TableView {
    match set {
        RecordSet::AuditLog(records) => view(
            "AGENT_AUDIT_LOG",
            "Internal Control & Delegation Trail",
            records,
            AUDIT_LOG_COLUMNS,
        ),
        RecordSet::Patients(records) => view(
            "PATIENT_REGISTRATION",
            "Administrative Front-Office Data",
            records,
            PATIENT_COLUMNS,
        ),
        RecordSet::Clinical(records) => view(
            "RME_CLINICAL_DATA",
            "Medical Records & Diagnosis (ICD)",
            records,
            CLINICAL_COLUMNS,
        ),
        RecordSet::Staff(records) => view(
            "STAFF_MANAGEMENT",
            "HR & Segregation of Duties",
            records,
            STAFF_COLUMNS,
        ),
        RecordSet::Billing(records) => view(
            "BILLING_FINANCE",
            "Financial Accountability & ABC Costing",
            records,
            BILLING_COLUMNS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use simrs_types::ClaimStatus;

    #[test]
    fn renders_one_row_per_record_in_order() {
        let patients = fixtures::demo_patients();
        let rows = render_rows(&patients, PATIENT_COLUMNS);
        assert_eq!(rows.len(), patients.len());
        for (row, patient) in rows.iter().zip(&patients) {
            assert_eq!(row.cells[0].text, patient.patient_id);
        }
    }

    #[test]
    fn empty_input_renders_zero_rows() {
        let rows = render_rows(&[], BILLING_COLUMNS);
        assert!(rows.is_empty());

        let table = render_table(&RecordSet::Billing(Vec::new()));
        assert!(table.rows.is_empty());
        assert_eq!(table.headers.len(), BILLING_COLUMNS.len());
    }

    #[test]
    fn each_row_aligns_with_the_headers() {
        let table = render_table(&RecordSet::AuditLog(fixtures::demo_logs()));
        for row in &table.rows {
            assert_eq!(row.cells.len(), table.headers.len());
        }
    }

    #[test]
    fn missing_procedure_code_renders_placeholder() {
        let mut clinical = fixtures::demo_clinical();
        clinical[0].procedure_icd_code = None;

        let table = render_table(&RecordSet::Clinical(clinical));
        let cell = table.cell(0, "Procedure (ICD)").expect("cell exists");
        assert_eq!(cell.text, "-");
        assert_eq!(cell.tone, None);
    }

    #[test]
    fn status_cells_carry_tones() {
        let table = render_table(&RecordSet::Billing(fixtures::demo_billing()));
        // Fixture order: Approved, Pending, Approved.
        assert_eq!(
            table.cell(0, "Status").expect("cell").tone,
            Some(Tone::Positive)
        );
        assert_eq!(
            table.cell(1, "Status").expect("cell").tone,
            Some(Tone::Warning)
        );
    }

    #[test]
    fn registration_types_map_to_distinct_tones() {
        let table = render_table(&RecordSet::Patients(fixtures::demo_patients()));
        // Fixture order: Rawat Jalan, Rawat Inap, UGD, ...
        assert_eq!(table.cell(0, "Type").expect("cell").tone, Some(Tone::Info));
        assert_eq!(
            table.cell(1, "Type").expect("cell").tone,
            Some(Tone::Highlight)
        );
        assert_eq!(
            table.cell(2, "Type").expect("cell").tone,
            Some(Tone::Critical)
        );
    }

    #[test]
    fn unknown_status_falls_back_to_neutral() {
        assert_eq!(tone_for("Escalated"), Tone::Neutral);
        assert_eq!(tone_for(""), Tone::Neutral);
        // Tone matching is case-sensitive.
        assert_eq!(tone_for("pending"), Tone::Neutral);
    }

    #[test]
    fn margin_column_is_derived_and_toned_by_sign() {
        let mut billing = fixtures::demo_billing();
        billing[0].total_charge = 90_000.0;
        billing[0].unit_cost_abc = 120_000.0;

        let table = render_table(&RecordSet::Billing(billing));
        let cell = table.cell(0, "Margin").expect("cell");
        assert_eq!(cell.text, "-Rp 30.000,00");
        assert_eq!(cell.tone, Some(Tone::Negative));

        // Fixture row 2: 5 400 000 - 4 900 000.
        let cell = table.cell(1, "Margin").expect("cell");
        assert_eq!(cell.text, "Rp 500.000,00");
        assert_eq!(cell.tone, Some(Tone::Positive));
    }

    #[test]
    fn currency_and_date_cells_use_locale_formats() {
        let table = render_table(&RecordSet::Billing(fixtures::demo_billing()));
        assert_eq!(
            table.cell(0, "Total Charge").expect("cell").text,
            "Rp 750.000,00"
        );

        let table = render_table(&RecordSet::Patients(fixtures::demo_patients()));
        assert_eq!(table.cell(0, "DOB").expect("cell").text, "12/05/1980");
    }

    #[test]
    fn table_titles_match_their_data_sets() {
        let table = render_table(&RecordSet::Staff(fixtures::demo_staff()));
        assert_eq!(table.title, "STAFF_MANAGEMENT");
        assert_eq!(table.cell(0, "Status").expect("cell").text, "Active");
        assert_eq!(
            table.cell(0, "Status").expect("cell").tone,
            Some(Tone::Positive)
        );
    }

    #[test]
    fn pending_claim_rows_match_summary_count() {
        let billing = fixtures::demo_billing();
        let table = render_table(&RecordSet::Billing(billing.clone()));
        let rendered_pending = (0..table.rows.len())
            .filter(|&i| table.cell(i, "Status").map(|c| c.text.as_str()) == Some("Pending"))
            .count();
        let counted = billing
            .iter()
            .filter(|b| b.claim_status == ClaimStatus::Pending)
            .count();
        assert_eq!(rendered_pending, counted);
    }

    #[test]
    fn view_serialises_to_json() {
        let table = render_table(&RecordSet::AuditLog(fixtures::demo_logs()));
        let json = table.to_json().expect("serialize");
        assert!(json.contains("AGENT_AUDIT_LOG"));
        assert!(json.contains("\"tone\""));
    }
}
