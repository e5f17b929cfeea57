//! casewatch - poll USCIS case status, report, and notify on change.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use casewatch::cli::Cli;
use casewatch::config::Config;
use casewatch::elapsed;
use casewatch::error::{CasewatchError, EXIT_GENERAL_ERROR, EXIT_INVALID_CASE, EXIT_SUCCESS};
use casewatch::fetch::{FetchOutcome, StatusFetcher};
use casewatch::mail::{Notification, Notifier, RelayMailer};
use casewatch::report::{Report, DASHES};
use casewatch::tracker::ChangeTracker;

fn main() {
    // Keep the report clean on stdout; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            if let Some(CasewatchError::InvalidCaseNumber(case)) =
                err.downcast_ref::<CasewatchError>()
            {
                println!(
                    "\n{DASHES}\nThe case number entered ({case}) is invalid! Try again..\n{DASHES}\n"
                );
                EXIT_INVALID_CASE
            } else {
                eprintln!("casewatch: {err:#}");
                EXIT_GENERAL_ERROR
            }
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<()> {
    let fetcher = StatusFetcher::new()?;
    let snapshot = match fetcher
        .poll(&cli.casenumber)
        .context("polling case status")?
    {
        FetchOutcome::Ok(snapshot) => snapshot,
        FetchOutcome::Invalid => {
            return Err(CasewatchError::InvalidCaseNumber(cli.casenumber.clone()).into());
        }
    };

    let today = snapshot.fetched_at.date_naive();
    let elapsed_days = elapsed::days_since(&snapshot.detail, today).unwrap_or_else(|err| {
        warn!("reporting elapsed days as unknown: {err}");
        elapsed::UNKNOWN
    });

    let state_dir = cli
        .state_dir
        .clone()
        .unwrap_or_else(ChangeTracker::default_state_dir);
    let change = ChangeTracker::new(state_dir)
        .check_and_update(&cli.casenumber, &snapshot.headline)
        .context("updating the status record")?;

    let report = Report {
        case_number: &cli.casenumber,
        status: snapshot.headline.trim(),
        elapsed_days,
        previous: change.previous.as_deref(),
        changed: change.changed,
        generated_at: snapshot.fetched_at,
        detail: cli.detail.then_some(snapshot.detail.as_str()),
    };
    let plain = report.render_plain();
    println!("{plain}");

    // Email notification on status change only.
    let recipients = cli.recipients();
    if change.changed && !recipients.is_empty() {
        let config = Config::load(cli.config.as_deref())?;
        let mail_config = config.mail.ok_or(CasewatchError::MailNotConfigured)?;
        let mailer = RelayMailer::new(mail_config)?;
        mailer
            .send(&Notification {
                subject: format!("Your USCIS Case {} Status Change Notice", cli.casenumber),
                html: report.render_html(),
                text: plain,
                recipients,
            })
            .context("sending change notification")?;
    }

    Ok(())
}
