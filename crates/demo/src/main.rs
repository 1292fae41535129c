// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use grievance_domain::{FormUpdate, GrievanceCategory};
use grievance_gateway::StubGateway;
use grievance_persistence::FileSlot;
use grievance_session::{IncomingFile, Notice, Session, SystemClock};
use std::time::Duration;
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::{info, warn};

/// Grievance Demo - scripted walkthrough of the grievance form wizard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the draft file
    #[arg(short, long, default_value = "grievance-draft.json")]
    draft: String,

    /// Simulated gateway latency in milliseconds
    #[arg(short, long, default_value_t = 1500)]
    latency_ms: u64,

    /// Initial location query, e.g. "step=2"
    #[arg(short, long)]
    query: Option<String>,

    /// Restore a found draft instead of discarding it
    #[arg(short, long)]
    restore: bool,
}

type DemoSession = Session<FileSlot, StubGateway, SystemClock>;

/// The incident date used by the walkthrough: thirty days ago, so the
/// date rule passes whenever the demo runs.
fn recent_incident_date() -> Result<String, time::error::Format> {
    let date = OffsetDateTime::now_utc().date() - time::Duration::days(30);
    date.format(&format_description!("[year]-[month]-[day]"))
}

fn fill_personal(session: &mut DemoSession) -> Result<(), grievance_session::SessionError> {
    session.edit(FormUpdate {
        full_name: Some(String::from("Asha Rao")),
        email: Some(String::from("asha.rao@example.com")),
        phone: Some(String::from("9876543210")),
        address: Some(String::from("14 Lake View Road, Pune")),
        ..FormUpdate::default()
    })
}

fn fill_grievance(
    session: &mut DemoSession,
    incident_date: String,
) -> Result<(), grievance_session::SessionError> {
    session.edit(FormUpdate {
        category: Some(GrievanceCategory::Billing),
        subject: Some(String::from("Double charge on invoice 4417")),
        description: Some("I was charged twice for the same invoice in May. ".repeat(3)),
        incident_date: Some(incident_date),
        ..FormUpdate::default()
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing grievance form walkthrough");

    let slot: FileSlot = FileSlot::new(&args.draft);
    let gateway: StubGateway = StubGateway::new(Duration::from_millis(args.latency_ms));
    let mut session: DemoSession =
        Session::new(slot, gateway, SystemClock, args.query.as_deref());

    if let Some(draft) = session.pending_draft() {
        info!(step = draft.current_step, "found a saved draft");
        if args.restore {
            session.restore_draft()?;
            info!(location = %session.location(), "draft restored");
        } else {
            session.discard_and_start_new()?;
            info!("draft discarded, starting fresh");
        }
    }

    info!(step = %session.state().step, location = %session.location(), "session ready");

    // Step 0: personal details.
    fill_personal(&mut session)?;
    session.autosave_tick();
    session.next()?;
    info!(step = %session.state().step, "personal details accepted");

    // Step 1: grievance details.
    fill_grievance(&mut session, recent_incident_date()?)?;
    session.autosave_tick();
    session.next()?;
    info!(step = %session.state().step, "grievance details accepted");

    // Step 2: supporting documents.
    let receipt: IncomingFile = IncomingFile {
        name: String::from("receipt.pdf"),
        declared_type: String::from("application/pdf"),
        bytes: b"%PDF-1.4 demo receipt".to_vec(),
    };
    let rejections = session.attach_files(vec![receipt]).await?;
    for rejection in &rejections {
        warn!(file = %rejection.name, reason = %rejection.reason, "file rejected");
    }
    session.autosave_tick();
    session.next()?;
    info!(step = %session.state().step, "documents accepted");

    // Step 3: review, confirm, submit.
    session.edit(FormUpdate {
        agreed_to_terms: Some(true),
        ..FormUpdate::default()
    })?;
    info!("submitting");
    session.submit().await?;

    match session.take_notice() {
        Some(notice @ Notice::Success(_)) => {
            info!(message = %notice.message(), "submission accepted");
        }
        Some(notice @ Notice::Error(_)) => {
            warn!(message = %notice.message(), "submission failed");
        }
        None => {
            for (field, message) in session.state().errors.entries() {
                warn!(field = %field, %message, "validation error");
            }
        }
    }

    info!(step = %session.state().step, location = %session.location(), "walkthrough finished");
    Ok(())
}
