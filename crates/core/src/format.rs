//! Locale display formatting.
//!
//! The dashboard presents figures the way the Indonesian source system does:
//! Rupiah amounts with `.` thousands grouping and `,` decimals, and
//! `dd/mm/yyyy` dates. Formatting is deterministic (no environment-dependent
//! locale lookup) so rendered output is stable across hosts.

use chrono::{DateTime, NaiveDate, Utc};

/// Format an amount as Indonesian Rupiah, e.g. `Rp 750.000,00`.
///
/// Negative amounts render with a leading minus: `-Rp 30.000,00`.
pub fn format_idr(amount: f64) -> String {
    let negative = amount < 0.0;
    // Work in whole cents to avoid float artefacts in the fraction.
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_thousands(whole);
    if negative {
        format!("-Rp {grouped},{fraction:02}")
    } else {
        format!("Rp {grouped},{fraction:02}")
    }
}

/// Group a whole number with `.` separators, id-ID style.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a calendar date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a timestamp as `dd/mm/yyyy hh:mm` (UTC).
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}

/// Format just the time of day as `hh:mm` (UTC), for the activity feed.
pub fn format_time_hm(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// Format a margin percentage to one decimal place, e.g. `9.6%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
