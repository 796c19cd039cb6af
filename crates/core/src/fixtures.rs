//! Bundled demo data for the dashboard.
//!
//! All records in this module are hardcoded and fictional. They stand in for
//! the external data store a production deployment would fetch from; the
//! aggregator and renderer never know the difference.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use simrs_types::{
    AgentKind, AuditLogEntry, BillingRecord, ClaimStatus, ClinicalRecord, DelegationStatus,
    PatientRecord, RegistrationType, StaffRecord,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("fixture timestamp is valid")
}

/// Five registered patients across the three registration types.
pub fn demo_patients() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            patient_id: "P001".into(),
            nik: "3201010101010001".into(),
            full_name: "Budi Santoso".into(),
            date_of_birth: date(1980, 5, 12),
            contact_number: "081234567890".into(),
            registration_date: date(2023, 10, 1),
            appointment_timestamp: timestamp(2023, 10, 27, 9, 0, 0),
            registration_type: RegistrationType::Outpatient,
        },
        PatientRecord {
            patient_id: "P002".into(),
            nik: "3201010101010002".into(),
            full_name: "Siti Aminah".into(),
            date_of_birth: date(1992, 11, 20),
            contact_number: "081298765432".into(),
            registration_date: date(2023, 10, 5),
            appointment_timestamp: timestamp(2023, 10, 27, 10, 30, 0),
            registration_type: RegistrationType::Inpatient,
        },
        PatientRecord {
            patient_id: "P003".into(),
            nik: "3201010101010003".into(),
            full_name: "Ahmad Yani".into(),
            date_of_birth: date(1975, 3, 15),
            contact_number: "081345678901".into(),
            registration_date: date(2023, 10, 12),
            appointment_timestamp: timestamp(2023, 10, 28, 8, 0, 0),
            registration_type: RegistrationType::Emergency,
        },
        PatientRecord {
            patient_id: "P004".into(),
            nik: "3201010101010004".into(),
            full_name: "Dewi Lestari".into(),
            date_of_birth: date(1988, 7, 7),
            contact_number: "081456789012".into(),
            registration_date: date(2023, 10, 20),
            appointment_timestamp: timestamp(2023, 10, 28, 11, 0, 0),
            registration_type: RegistrationType::Outpatient,
        },
        PatientRecord {
            patient_id: "P005".into(),
            nik: "3201010101010005".into(),
            full_name: "Eko Prasetyo".into(),
            date_of_birth: date(1960, 1, 1),
            contact_number: "081567890123".into(),
            registration_date: date(2023, 10, 25),
            appointment_timestamp: timestamp(2023, 10, 29, 14, 0, 0),
            registration_type: RegistrationType::Inpatient,
        },
    ]
}

/// Three active staff members.
pub fn demo_staff() -> Vec<StaffRecord> {
    vec![
        StaffRecord {
            staff_id: "S001".into(),
            staff_name: "Dr. Rina Melati".into(),
            role_or_position: "Dokter Spesialis Penyakit Dalam".into(),
            department: "Internal Medicine".into(),
            assigned_shift_schedule: "08:00 - 16:00".into(),
            contact_info: "rina.melati@hospital.id".into(),
            is_active: true,
        },
        StaffRecord {
            staff_id: "S002".into(),
            staff_name: "Ns. Joko Anwar".into(),
            role_or_position: "Kepala Perawat".into(),
            department: "Inpatient Ward".into(),
            assigned_shift_schedule: "07:00 - 15:00".into(),
            contact_info: "joko.anwar@hospital.id".into(),
            is_active: true,
        },
        StaffRecord {
            staff_id: "S003".into(),
            staff_name: "Bpk. Heri Finansyah".into(),
            role_or_position: "Billing Manager".into(),
            department: "Finance".into(),
            assigned_shift_schedule: "09:00 - 17:00".into(),
            contact_info: "heri.fin@hospital.id".into(),
            is_active: true,
        },
    ]
}

/// Three clinical record lines, one per encounter.
pub fn demo_clinical() -> Vec<ClinicalRecord> {
    vec![
        ClinicalRecord {
            record_detail_id: 101,
            patient_id: "P001".into(),
            encounter_id: "E-2023-001".into(),
            encounter_date: timestamp(2023, 10, 27, 9, 15, 0),
            diagnosis_icd_code: "E11.9".into(),
            procedure_icd_code: Some("89.7".into()),
            clinical_notes_uri: "gs://fhir-store/notes/E-2023-001.json".into(),
            recorded_by_staff_id: "S001".into(),
            data_integrity_hash: "a1b2c3d4".into(),
        },
        ClinicalRecord {
            record_detail_id: 102,
            patient_id: "P002".into(),
            encounter_id: "E-2023-002".into(),
            encounter_date: timestamp(2023, 10, 27, 11, 0, 0),
            diagnosis_icd_code: "J18.9".into(),
            procedure_icd_code: Some("93.96".into()),
            clinical_notes_uri: "gs://fhir-store/notes/E-2023-002.json".into(),
            recorded_by_staff_id: "S001".into(),
            data_integrity_hash: "e5f6g7h8".into(),
        },
        ClinicalRecord {
            record_detail_id: 103,
            patient_id: "P003".into(),
            encounter_id: "E-2023-003".into(),
            encounter_date: timestamp(2023, 10, 28, 8, 10, 0),
            diagnosis_icd_code: "I10".into(),
            procedure_icd_code: Some("89.52".into()),
            clinical_notes_uri: "gs://fhir-store/notes/E-2023-003.json".into(),
            recorded_by_staff_id: "S001".into(),
            data_integrity_hash: "i9j0k1l2".into(),
        },
    ]
}

/// Three billing lines covering all payer buckets and a pending claim.
pub fn demo_billing() -> Vec<BillingRecord> {
    vec![
        BillingRecord {
            billing_id: 5001,
            patient_id: "P001".into(),
            encounter_id: "E-2023-001".into(),
            service_date: date(2023, 10, 27),
            total_charge: 750_000.0,
            insurance_name: "BPJS Kesehatan".into(),
            claim_status: ClaimStatus::Approved,
            payment_received_date: Some(date(2023, 10, 30)),
            unit_cost_abc: 680_000.0,
        },
        BillingRecord {
            billing_id: 5002,
            patient_id: "P002".into(),
            encounter_id: "E-2023-002".into(),
            service_date: date(2023, 10, 27),
            total_charge: 5_400_000.0,
            insurance_name: "Prudential".into(),
            claim_status: ClaimStatus::Pending,
            payment_received_date: None,
            unit_cost_abc: 4_900_000.0,
        },
        BillingRecord {
            billing_id: 5003,
            patient_id: "P003".into(),
            encounter_id: "E-2023-003".into(),
            service_date: date(2023, 10, 28),
            total_charge: 120_000.0,
            insurance_name: "Self Pay".into(),
            claim_status: ClaimStatus::Approved,
            payment_received_date: Some(date(2023, 10, 28)),
            unit_cost_abc: 90_000.0,
        },
    ]
}

/// Four audit-log entries, one of them a failed delegation.
pub fn demo_logs() -> Vec<AuditLogEntry> {
    vec![
        AuditLogEntry {
            log_id: 1001,
            timestamp: timestamp(2023, 10, 27, 8, 0, 5),
            request_origin: "System Trigger".into(),
            user_request_text: "Daily Sync Patient Data".into(),
            delegated_agent: AgentKind::Patient,
            transaction_id: "SYS-001".into(),
            delegation_status: DelegationStatus::Success,
        },
        AuditLogEntry {
            log_id: 1002,
            timestamp: timestamp(2023, 10, 27, 9, 15, 30),
            request_origin: "Klinisi (Dr. Rina)".into(),
            user_request_text: "Update diagnosis for P001".into(),
            delegated_agent: AgentKind::Medical,
            transaction_id: "E-2023-001".into(),
            delegation_status: DelegationStatus::Success,
        },
        AuditLogEntry {
            log_id: 1003,
            timestamp: timestamp(2023, 10, 27, 9, 45, 0),
            request_origin: "System Auto-Bill".into(),
            user_request_text: "Generate Invoice for E-2023-001".into(),
            delegated_agent: AgentKind::Billing,
            transaction_id: "5001".into(),
            delegation_status: DelegationStatus::Success,
        },
        AuditLogEntry {
            log_id: 1004,
            timestamp: timestamp(2023, 10, 27, 12, 0, 0),
            request_origin: "Admin HR".into(),
            user_request_text: "Verify shift attendance".into(),
            delegated_agent: AgentKind::Staff,
            transaction_id: "SHIFT-88".into(),
            delegation_status: DelegationStatus::Failure,
        },
    ]
}
