//! Application state for the display layer.
//!
//! The selected view is explicit state owned here and updated through a
//! single entry point, rather than a free-floating mutable variable. The
//! core crates stay stateless; only this binary knows which view is active.

use clap::ValueEnum;

/// The views the dashboard offers, one per data set plus the summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    /// Metrics summary with charts and recent activity.
    Dashboard,
    /// Agent delegation audit trail.
    Logs,
    /// Patient registration records.
    Patients,
    /// Clinical record details.
    Clinical,
    /// Staff roster.
    Staff,
    /// Billing and claims.
    Billing,
}

impl ViewKind {
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Dashboard,
        ViewKind::Logs,
        ViewKind::Patients,
        ViewKind::Clinical,
        ViewKind::Staff,
        ViewKind::Billing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "dashboard",
            ViewKind::Logs => "logs",
            ViewKind::Patients => "patients",
            ViewKind::Clinical => "clinical",
            ViewKind::Staff => "staff",
            ViewKind::Billing => "billing",
        }
    }
}

/// View-selection state for one run of the display layer.
#[derive(Clone, Debug)]
pub struct AppState {
    active_view: ViewKind,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_view: ViewKind::Dashboard,
        }
    }

    /// The single entry point for changing the active view.
    pub fn select(&mut self, view: ViewKind) {
        self.active_view = view;
    }

    pub fn active_view(&self) -> ViewKind {
        self.active_view
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
