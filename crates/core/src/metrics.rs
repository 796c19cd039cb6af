//! Dashboard metrics aggregation.
//!
//! Pure functions from billing, patient and audit-log arrays to the summary
//! figures and chart series the dashboard displays. Nothing here caches:
//! every call walks the input slices again.

use serde::Serialize;
use simrs_types::{AuditLogEntry, BillingRecord, DelegationStatus, PatientRecord, PayerCategory};
use tracing::debug;

use crate::error::OpsResult;
use crate::format::format_time_hm;

/// Scalar summary figures for the dashboard stat cards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub total_cost: f64,
    /// Gross margin over revenue, in percent. `None` when there is no
    /// revenue to take a margin of (never NaN or infinite).
    pub gross_margin_percent: Option<f64>,
    /// Raw count of registered patients. No activity window is applied.
    pub active_patient_count: usize,
    pub pending_claim_count: usize,
    pub audit_failure_count: usize,
    pub payer_mix: PayerMix,
}

impl DashboardSummary {
    /// Compute the summary from the three source data sets.
    pub fn compute(
        billing: &[BillingRecord],
        patients: &[PatientRecord],
        logs: &[AuditLogEntry],
    ) -> Self {
        let total_revenue: f64 = billing.iter().map(|b| b.total_charge).sum();
        let total_cost: f64 = billing.iter().map(|b| b.unit_cost_abc).sum();

        let gross_margin_percent = if total_revenue == 0.0 {
            None
        } else {
            Some((total_revenue - total_cost) / total_revenue * 100.0)
        };

        let pending_claim_count = billing
            .iter()
            .filter(|b| b.claim_status == simrs_types::ClaimStatus::Pending)
            .count();

        let audit_failure_count = logs
            .iter()
            .filter(|l| l.delegation_status == DelegationStatus::Failure)
            .count();

        let summary = Self {
            total_revenue,
            total_cost,
            gross_margin_percent,
            active_patient_count: patients.len(),
            pending_claim_count,
            audit_failure_count,
            payer_mix: PayerMix::tally(billing),
        };

        debug!(
            billing = billing.len(),
            patients = patients.len(),
            logs = logs.len(),
            pending = summary.pending_claim_count,
            failures = summary.audit_failure_count,
            "computed dashboard summary"
        );

        summary
    }

    /// Serialise the summary for machine-readable output.
    pub fn to_json(&self) -> OpsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Billing record counts per payer bucket. The three buckets partition the
/// input: their counts always sum to the billing array length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PayerMix {
    pub bpjs: usize,
    pub private: usize,
    pub self_pay: usize,
}

impl PayerMix {
    /// Count billing records into payer buckets.
    pub fn tally(billing: &[BillingRecord]) -> Self {
        let mut mix = PayerMix::default();
        for record in billing {
            match record.payer_category() {
                PayerCategory::Bpjs => mix.bpjs += 1,
                PayerCategory::Private => mix.private += 1,
                PayerCategory::SelfPay => mix.self_pay += 1,
            }
        }
        mix
    }

    pub fn total(&self) -> usize {
        self.bpjs + self.private + self.self_pay
    }

    /// Pie-chart slices in display order.
    pub fn slices(&self) -> [PayerSlice; 3] {
        [
            PayerSlice {
                label: PayerCategory::Bpjs.label(),
                count: self.bpjs,
            },
            PayerSlice {
                label: PayerCategory::Private.label(),
                count: self.private,
            },
            PayerSlice {
                label: PayerCategory::SelfPay.label(),
                count: self.self_pay,
            },
        ]
    }
}

/// One slice of the payer-mix distribution chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PayerSlice {
    pub label: &'static str,
    pub count: usize,
}

/// One bar-chart point: revenue against costed spend for a billing line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub billing_id: u64,
    pub revenue: f64,
    pub cost: f64,
}

/// Chart series for the revenue-vs-cost bar chart, one point per billing
/// record in input order.
pub fn revenue_series(billing: &[BillingRecord]) -> Vec<RevenuePoint> {
    billing
        .iter()
        .map(|b| RevenuePoint {
            billing_id: b.billing_id,
            revenue: b.total_charge,
            cost: b.unit_cost_abc,
        })
        .collect()
}

/// One line of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityLine {
    /// Time of day (`hh:mm`, UTC).
    pub time: String,
    pub agent: String,
    pub request: String,
    pub status: DelegationStatus,
}

/// Project the first `limit` log entries into activity-feed lines,
/// preserving input order.
pub fn recent_activity(logs: &[AuditLogEntry], limit: usize) -> Vec<ActivityLine> {
    logs.iter()
        .take(limit)
        .map(|log| ActivityLine {
            time: format_time_hm(log.timestamp),
            agent: log.delegated_agent.to_string(),
            request: log.user_request_text.clone(),
            status: log.delegation_status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use simrs_types::{AgentKind, ClaimStatus, RegistrationType};

    fn billing(id: u64, charge: f64, cost: f64, insurer: &str, status: ClaimStatus) -> BillingRecord {
        BillingRecord {
            billing_id: id,
            patient_id: format!("P{id:03}"),
            encounter_id: format!("E-2023-{id:03}"),
            service_date: NaiveDate::from_ymd_opt(2023, 10, 27).expect("valid date"),
            total_charge: charge,
            insurance_name: insurer.into(),
            claim_status: status,
            payment_received_date: None,
            unit_cost_abc: cost,
        }
    }

    fn patient(id: &str) -> PatientRecord {
        PatientRecord {
            patient_id: id.into(),
            nik: "3201010101010001".into(),
            full_name: "Budi Santoso".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 5, 12).expect("valid date"),
            contact_number: "081234567890".into(),
            registration_date: NaiveDate::from_ymd_opt(2023, 10, 1).expect("valid date"),
            appointment_timestamp: Utc.with_ymd_and_hms(2023, 10, 27, 9, 0, 0).unwrap(),
            registration_type: RegistrationType::Outpatient,
        }
    }

    fn log(id: u64, status: DelegationStatus) -> AuditLogEntry {
        AuditLogEntry {
            log_id: id,
            timestamp: Utc.with_ymd_and_hms(2023, 10, 27, 8, 0, 5).unwrap(),
            request_origin: "System Trigger".into(),
            user_request_text: "Daily Sync Patient Data".into(),
            delegated_agent: AgentKind::Patient,
            transaction_id: format!("SYS-{id:03}"),
            delegation_status: status,
        }
    }

    #[test]
    fn computes_reference_scenario_totals() {
        let billing = [
            billing(5001, 750_000.0, 680_000.0, "BPJS Kesehatan", ClaimStatus::Approved),
            billing(5002, 5_400_000.0, 4_900_000.0, "Prudential", ClaimStatus::Pending),
            billing(5003, 120_000.0, 90_000.0, "Self Pay", ClaimStatus::Approved),
        ];

        let summary = DashboardSummary::compute(&billing, &[], &[]);
        assert_eq!(summary.total_revenue, 6_270_000.0);
        assert_eq!(summary.total_cost, 5_670_000.0);

        let margin = summary.gross_margin_percent.expect("revenue is non-zero");
        assert!((margin - 9.569_377_99).abs() < 0.01, "margin was {margin}");
    }

    #[test]
    fn zero_revenue_yields_no_margin() {
        let summary = DashboardSummary::compute(&[], &[], &[]);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.gross_margin_percent, None);
    }

    #[test]
    fn margin_may_be_negative() {
        let billing = [billing(
            5001,
            90_000.0,
            120_000.0,
            "Self Pay",
            ClaimStatus::Approved,
        )];

        let summary = DashboardSummary::compute(&billing, &[], &[]);
        let margin = summary.gross_margin_percent.expect("revenue is non-zero");
        assert!(margin < 0.0, "margin was {margin}");
    }

    #[test]
    fn counts_only_pending_claims() {
        let billing = [
            billing(1, 100.0, 50.0, "Prudential", ClaimStatus::Pending),
            billing(2, 100.0, 50.0, "Prudential", ClaimStatus::Approved),
            billing(3, 100.0, 50.0, "Prudential", ClaimStatus::Denied),
            billing(4, 100.0, 50.0, "Prudential", ClaimStatus::Pending),
        ];

        let summary = DashboardSummary::compute(&billing, &[], &[]);
        assert_eq!(summary.pending_claim_count, 2);
    }

    #[test]
    fn patient_count_is_raw_length() {
        let patients = [patient("P001"), patient("P002"), patient("P003")];
        let summary = DashboardSummary::compute(&[], &patients, &[]);
        assert_eq!(summary.active_patient_count, 3);
    }

    #[test]
    fn one_failure_among_four_logs() {
        let logs = [
            log(1001, DelegationStatus::Success),
            log(1002, DelegationStatus::Success),
            log(1003, DelegationStatus::Success),
            log(1004, DelegationStatus::Failure),
        ];

        let summary = DashboardSummary::compute(&[], &[], &logs);
        assert_eq!(summary.audit_failure_count, 1);
    }

    #[test]
    fn payer_mix_buckets_the_reference_insurers() {
        let billing = [
            billing(1, 100.0, 50.0, "BPJS Kesehatan", ClaimStatus::Approved),
            billing(2, 100.0, 50.0, "Prudential", ClaimStatus::Approved),
            billing(3, 100.0, 50.0, "Self Pay", ClaimStatus::Approved),
        ];

        let mix = PayerMix::tally(&billing);
        assert_eq!(
            mix,
            PayerMix {
                bpjs: 1,
                private: 1,
                self_pay: 1
            }
        );
    }

    #[test]
    fn payer_mix_partitions_every_input() {
        let insurers = [
            "BPJS Kesehatan",
            "BPJS Ketenagakerjaan",
            "BPJS-adjacent Corp",
            "Prudential",
            "Allianz",
            "Self Pay",
            "self pay",
            "",
        ];
        let billing: Vec<BillingRecord> = insurers
            .iter()
            .enumerate()
            .map(|(i, name)| billing(i as u64, 100.0, 50.0, name, ClaimStatus::Approved))
            .collect();

        let mix = PayerMix::tally(&billing);
        assert_eq!(mix.total(), billing.len());
        // The substring rule claims the oddly named insurer for BPJS and the
        // exact-match rule leaves lowercase "self pay" with the private bucket.
        assert_eq!(mix.bpjs, 3);
        assert_eq!(mix.private, 4);
        assert_eq!(mix.self_pay, 1);
    }

    #[test]
    fn payer_slices_follow_display_order() {
        let mix = PayerMix {
            bpjs: 2,
            private: 1,
            self_pay: 3,
        };
        let slices = mix.slices();
        assert_eq!(slices[0].label, "BPJS");
        assert_eq!(slices[0].count, 2);
        assert_eq!(slices[1].label, "Private");
        assert_eq!(slices[2].label, "Self Pay");
        assert_eq!(slices[2].count, 3);
    }

    #[test]
    fn revenue_series_preserves_input_order() {
        let billing = [
            billing(5002, 5_400_000.0, 4_900_000.0, "Prudential", ClaimStatus::Pending),
            billing(5001, 750_000.0, 680_000.0, "BPJS Kesehatan", ClaimStatus::Approved),
        ];

        let series = revenue_series(&billing);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].billing_id, 5002);
        assert_eq!(series[0].revenue, 5_400_000.0);
        assert_eq!(series[1].billing_id, 5001);
        assert_eq!(series[1].cost, 680_000.0);
    }

    #[test]
    fn recent_activity_takes_a_prefix() {
        let logs = [
            log(1, DelegationStatus::Success),
            log(2, DelegationStatus::Failure),
            log(3, DelegationStatus::Success),
            log(4, DelegationStatus::Pending),
        ];

        let feed = recent_activity(&logs, 3);
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].time, "08:00");
        assert_eq!(feed[1].status, DelegationStatus::Failure);
        assert_eq!(feed[0].agent, "Patient Management Subagent");

        // Fewer entries than the limit is fine.
        let feed = recent_activity(&logs[..2], 3);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn summary_serialises_to_json() {
        let summary = DashboardSummary::compute(&[], &[], &[]);
        let json = summary.to_json().expect("serialize");
        assert!(json.contains("\"gross_margin_percent\": null"));
        assert!(json.contains("\"payer_mix\""));
    }
}
