//! Extraction → elapsed-days → report over a canned response body.

use chrono::{Local, NaiveDate, TimeZone};

use casewatch::elapsed;
use casewatch::page;
use casewatch::report::Report;
use casewatch::tracker::ChangeTracker;

const RESPONSE_BODY: &str = r#"<!DOCTYPE html>
<html><body>
<div class="container">
  <div class="rows text-center">
    <h1>Case Was Received</h1>
    <p>As of May 1, 2022, we received your case and sent you a receipt
       notice. Our Virtual Assistant can answer your questions.</p>
  </div>
</div>
</body></html>"#;

#[test]
fn full_run_from_page_to_report() {
    let headline = page::heading_text(RESPONSE_BODY).unwrap();
    let detail = page::centered_paragraph_text(RESPONSE_BODY).unwrap();
    assert_eq!(headline, "Case Was Received");

    let today = NaiveDate::from_ymd_opt(2022, 5, 16).unwrap();
    let elapsed_days = elapsed::days_since(&detail, today).unwrap();
    assert_eq!(elapsed_days, 15);

    let dir = tempfile::tempdir().unwrap();
    let tracker = ChangeTracker::new(dir.path().to_path_buf());
    let change = tracker.check_and_update("IOE0912345678", &headline).unwrap();

    let report = Report {
        case_number: "IOE0912345678",
        status: &headline,
        elapsed_days,
        previous: change.previous.as_deref(),
        changed: change.changed,
        generated_at: Local.with_ymd_and_hms(2022, 5, 16, 9, 30, 0).unwrap(),
        detail: Some(&detail),
    };

    let plain = report.render_plain();
    assert!(plain.contains("Your USCIS Case [IOE0912345678]"));
    assert!(plain.contains("Current Status \t\t: Case Was Received"));
    assert!(plain.contains("Days since received \t: 15"));
    assert!(plain.contains("Previous Status \t: None"));
    assert!(plain.contains("Changed? \t\t: false"));
    assert!(plain.contains("Detail:\nAs of May 1, 2022, we received your case"));

    let html = report.render_html();
    assert!(html.contains("Days since received &emsp;: 15"));
    assert!(!html.contains('\n'));
}

#[test]
fn invalid_page_has_no_headline_and_writes_nothing() {
    let body = r#"<html><body>
      <div class="rows text-center">
        <p>Validation Error(s): You must enter a valid receipt number.</p>
      </div>
    </body></html>"#;

    assert_eq!(page::heading_text(body), None);

    // The run stops before the tracker on an invalid page; the record
    // directory stays empty.
    let dir = tempfile::tempdir().unwrap();
    let tracker = ChangeTracker::new(dir.path().to_path_buf());
    assert!(!tracker.record_path("ABC1234567").exists());
}
