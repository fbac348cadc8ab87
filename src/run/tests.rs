//! Scan loop tests.

use std::time::Duration;

use super::*;
use crate::dns::StaticTxtResolver;
use crate::error_handling::LookupError;

/// Resolver whose lookups never complete.
struct HangingResolver;

impl TxtResolver for HangingResolver {
    async fn lookup_txt(&self, _name: &str) -> Result<Vec<String>, LookupError> {
        std::future::pending().await
    }
}

async fn run(input: &str, resolver: &StaticTxtResolver) -> (String, ScanReport) {
    let mut output = Vec::new();
    let report = run_pipeline(
        input.as_bytes(),
        &mut output,
        resolver,
        &CancellationToken::new(),
    )
    .await
    .expect("pipeline should not fail on in-memory I/O");
    (String::from_utf8(output).unwrap(), report)
}

#[tokio::test]
async fn test_extracts_report_domain() {
    let resolver = StaticTxtResolver::new().with_records(
        "_dmarc.example.org",
        ["v=dmarc1; p=reject; rua=mailto:dmarc@reports.example.org"],
    );
    let (output, report) = run("example.org\n", &resolver).await;
    assert_eq!(output, "reports.example.org\n");
    assert_eq!(report.domains, 1);
    assert_eq!(report.txt_records, 1);
    assert_eq!(report.extracted, 1);
    assert_eq!(report.stats.count(Outcome::Extracted), 1);
    assert!(!report.interrupted);
}

#[tokio::test]
async fn test_lookup_failure_continues_with_next_domain() {
    let resolver = StaticTxtResolver::new()
        .with_failure("_dmarc.nodmarc.test", "SERVFAIL")
        .with_records(
            "_dmarc.example.org",
            ["v=DMARC1; p=none; rua=mailto:agg@example.org"],
        );
    let (output, report) = run("nodmarc.test\nexample.org\n", &resolver).await;
    assert_eq!(output, "example.org\n");
    assert_eq!(report.domains, 2);
    assert_eq!(report.stats.count(Outcome::LookupFailed), 1);
}

#[tokio::test]
async fn test_blank_lines_and_whitespace_are_ignored() {
    let resolver = StaticTxtResolver::new().with_records(
        "_dmarc.example.org",
        ["v=DMARC1; rua=mailto:agg@example.net"],
    );
    let (output, report) = run("\n   \n  example.org  \n\n", &resolver).await;
    assert_eq!(output, "example.net\n");
    assert_eq!(report.domains, 1);
}

#[tokio::test]
async fn test_multiple_qualifying_records_yield_multiple_lines() {
    let resolver = StaticTxtResolver::new().with_records(
        "_dmarc.example.org",
        [
            "v=DMARC1; rua=mailto:a@one.example",
            "v=spf1 -all",
            "v=DMARC1; rua=mailto:b@two.example",
        ],
    );
    let (output, report) = run("example.org", &resolver).await;
    assert_eq!(output, "one.example\ntwo.example\n");
    assert_eq!(report.txt_records, 3);
    assert_eq!(report.extracted, 2);
    // "v=spf1 -all" parses as a single tag and has no rua
    assert_eq!(report.stats.count(Outcome::MissingRua), 1);
}

#[tokio::test]
async fn test_bad_records_are_skipped() {
    let resolver = StaticTxtResolver::new()
        .with_records("_dmarc.malformed.test", ["v=DMARC1; reject"])
        .with_records("_dmarc.badaddr.test", ["v=DMARC1; rua=mailto:nobody"])
        .with_records("_dmarc.norua.test", ["v=DMARC1 p=reject"])
        .with_records(
            "_dmarc.good.test",
            ["v=DMARC1; p=reject; rua=mailto:r@good.test"],
        );
    let (output, report) = run(
        "malformed.test\nbadaddr.test\nnorua.test\ngood.test\n",
        &resolver,
    )
    .await;
    assert_eq!(output, "good.test\n");
    assert_eq!(report.stats.count(Outcome::MalformedTag), 1);
    assert_eq!(report.stats.count(Outcome::InvalidAddress), 1);
    assert_eq!(report.stats.count(Outcome::MissingRua), 1);
    assert_eq!(report.stats.total_failures(), 2);
}

#[tokio::test]
async fn test_record_is_lowercased_before_parsing() {
    let resolver = StaticTxtResolver::new().with_records(
        "_dmarc.example.org",
        ["  V=DMARC1; P=REJECT; RUA=mailto:DMARC@Reports.Example.ORG  "],
    );
    let (output, _) = run("example.org", &resolver).await;
    assert_eq!(output, "reports.example.org\n");
}

#[tokio::test]
async fn test_domain_without_records_produces_nothing() {
    let resolver = StaticTxtResolver::new();
    let (output, report) = run("unknown.test\n", &resolver).await;
    assert!(output.is_empty());
    assert_eq!(report.stats.count(Outcome::LookupFailed), 1);
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_stop_the_run() {
    let resolver = StaticTxtResolver::new()
        .with_records("_dmarc.a.test", ["v=DMARC1; rua=mailto:r@a-reports.test"])
        .with_records("_dmarc.b.test", ["v=DMARC1; rua=mailto:r@b-reports.test"]);

    let mut output = Vec::new();
    let report = run_pipeline(
        &b"a.test\nbad\xff.test\nb.test\n"[..],
        &mut output,
        &resolver,
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(output, b"a-reports.test\nb-reports.test\n");
    assert_eq!(report.domains, 3);
    assert_eq!(report.stats.count(Outcome::LookupFailed), 1);
}

#[tokio::test]
async fn test_crlf_line_endings() {
    let resolver = StaticTxtResolver::new().with_records(
        "_dmarc.example.org",
        ["v=DMARC1; rua=mailto:agg@example.net"],
    );
    let (output, report) = run("example.org\r\n", &resolver).await;
    assert_eq!(output, "example.net\n");
    assert_eq!(report.domains, 1);
}

#[tokio::test]
async fn test_empty_input() {
    let (output, report) = run("", &StaticTxtResolver::new()).await;
    assert!(output.is_empty());
    assert_eq!(report.domains, 0);
    assert!(!report.interrupted);
}

#[tokio::test]
async fn test_cancelled_before_start_reads_nothing() {
    let resolver = StaticTxtResolver::new().with_records(
        "_dmarc.example.org",
        ["v=DMARC1; rua=mailto:agg@example.org"],
    );
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut output = Vec::new();
    let report = run_pipeline(&b"example.org\n"[..], &mut output, &resolver, &cancel)
        .await
        .unwrap();
    assert!(output.is_empty());
    assert_eq!(report.domains, 0);
    assert!(report.interrupted);
}

#[tokio::test]
async fn test_cancel_interrupts_hanging_lookup() {
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let mut output = Vec::new();
    let report = tokio::time::timeout(
        Duration::from_secs(5),
        run_pipeline(&b"slow.test\nnext.test\n"[..], &mut output, &HangingResolver, &cancel),
    )
    .await
    .expect("cancellation should end the run promptly")
    .unwrap();

    assert!(report.interrupted);
    assert_eq!(report.domains, 1);
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_cancel_interrupts_blocked_read() {
    // The write half stays open, so reading blocks until cancellation
    let (reader, _writer) = tokio::io::duplex(64);
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let mut output = Vec::new();
    let report = tokio::time::timeout(
        Duration::from_secs(5),
        run_pipeline(
            tokio::io::BufReader::new(reader),
            &mut output,
            &StaticTxtResolver::new(),
            &cancel,
        ),
    )
    .await
    .expect("cancellation should end the run promptly")
    .unwrap();

    assert!(report.interrupted);
    assert_eq!(report.domains, 0);
}
