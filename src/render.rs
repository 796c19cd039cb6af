//! Plain-text layout for table views and the dashboard summary.
//!
//! Presentation only: everything printable is already computed and formatted
//! by `simrs-core`; this module just pads columns and arranges lines.

use simrs_core::format::{format_idr, format_percent};
use simrs_core::metrics::{ActivityLine, RevenuePoint};
use simrs_core::{DashboardSummary, TableView};

/// Lay a rendered table out as padded text columns.
pub fn table_to_text(view: &TableView) -> String {
    let mut widths: Vec<usize> = view.headers.iter().map(|h| h.len()).collect();
    for row in &view.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.text.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{}  -  {}\n", view.title, view.subtitle));

    let header_line: Vec<String> = view
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{h:<w$}"))
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    out.push_str(&"-".repeat(header_line.join("  ").len()));
    out.push('\n');

    for row in &view.rows {
        let line: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell.text))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    if view.rows.is_empty() {
        out.push_str("(no records)\n");
    }

    out
}

/// Lay the dashboard summary out: stat cards, revenue series, payer mix and
/// the recent-activity feed.
pub fn summary_to_text(
    summary: &DashboardSummary,
    series: &[RevenuePoint],
    feed: &[ActivityLine],
) -> String {
    let margin = match summary.gross_margin_percent {
        Some(value) => format_percent(value),
        None => "n/a".to_string(),
    };

    let mut out = String::new();
    out.push_str("HOSPITAL OPERATIONS DASHBOARD\n\n");
    out.push_str(&format!(
        "Total Revenue    {}  ({} gross margin)\n",
        format_idr(summary.total_revenue),
        margin
    ));
    out.push_str(&format!(
        "Total Cost       {}\n",
        format_idr(summary.total_cost)
    ));
    out.push_str(&format!(
        "Active Patients  {}\n",
        summary.active_patient_count
    ));
    out.push_str(&format!(
        "Pending Claims   {}\n",
        summary.pending_claim_count
    ));
    out.push_str(&format!(
        "Audit Alerts     {}  (agent delegation failures)\n",
        summary.audit_failure_count
    ));

    out.push_str("\nFinancial Performance (Revenue vs Cost)\n");
    for point in series {
        out.push_str(&format!(
            "  #{:<6} revenue {:>18}  cost {:>18}\n",
            point.billing_id,
            format_idr(point.revenue),
            format_idr(point.cost)
        ));
    }

    out.push_str("\nPayer Mix\n");
    for slice in summary.payer_mix.slices() {
        out.push_str(&format!("  {:<9} {}\n", slice.label, slice.count));
    }

    out.push_str("\nRecent Agent Activity\n");
    for line in feed {
        out.push_str(&format!(
            "  {}  [{}] {}  ({})\n",
            line.time, line.agent, line.request, line.status
        ));
    }

    out
}
