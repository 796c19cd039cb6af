mod render;
mod state;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use simrs_core::{fixtures, recent_activity, render_table, revenue_series};
use simrs_core::{DashboardSummary, RecordSet};
use state::{AppState, ViewKind};

/// Number of audit-log entries shown in the dashboard activity feed.
const ACTIVITY_FEED_LEN: usize = 3;

#[derive(Parser)]
#[command(name = "simrs")]
#[command(about = "Hospital operations dashboard over bundled demo data")]
struct Cli {
    /// Emit the selected view as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metrics summary (default)
    Dashboard,
    /// Show one of the record tables
    View {
        /// Which data set to render
        #[arg(value_enum)]
        view: ViewKind,
    },
    /// List the available views
    ListViews,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("simrs=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut state = AppState::new();

    match cli.command {
        Some(Commands::ListViews) => {
            for view in ViewKind::ALL {
                println!("{}", view.name());
            }
            return Ok(());
        }
        Some(Commands::View { view }) => state.select(view),
        Some(Commands::Dashboard) | None => state.select(ViewKind::Dashboard),
    }

    let view = state.active_view();
    info!(view = view.name(), "rendering view");

    match view {
        ViewKind::Dashboard => {
            let billing = fixtures::demo_billing();
            let patients = fixtures::demo_patients();
            let logs = fixtures::demo_logs();

            let summary = DashboardSummary::compute(&billing, &patients, &logs);
            if cli.json {
                println!("{}", summary.to_json()?);
            } else {
                let series = revenue_series(&billing);
                let feed = recent_activity(&logs, ACTIVITY_FEED_LEN);
                print!("{}", render::summary_to_text(&summary, &series, &feed));
            }
        }
        ViewKind::Logs => print_table(RecordSet::AuditLog(fixtures::demo_logs()), cli.json)?,
        ViewKind::Patients => {
            print_table(RecordSet::Patients(fixtures::demo_patients()), cli.json)?
        }
        ViewKind::Clinical => {
            print_table(RecordSet::Clinical(fixtures::demo_clinical()), cli.json)?
        }
        ViewKind::Staff => print_table(RecordSet::Staff(fixtures::demo_staff()), cli.json)?,
        ViewKind::Billing => print_table(RecordSet::Billing(fixtures::demo_billing()), cli.json)?,
    }

    Ok(())
}

/// Render one record table to stdout.
fn print_table(set: RecordSet, json: bool) -> anyhow::Result<()> {
    let table = render_table(&set);
    if json {
        println!("{}", table.to_json()?);
    } else {
        print!("{}", render::table_to_text(&table));
    }
    Ok(())
}
