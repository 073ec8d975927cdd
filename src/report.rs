// src/report.rs
// Pass/fail tally for one probe run. Created by the runner, returned
// to the caller, discarded after the summary is printed.

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub passed: u32,
    pub failed: u32,
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    pub fn record_fail(&mut self, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(message.into());
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Print the end-of-run summary block.
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(50));
        println!("TEST SUMMARY");
        println!("{}", "=".repeat(50));
        println!("Total checks: {}", self.total());
        println!("Passed: {}", self.passed);
        println!("Failed: {}", self.failed);

        if !self.errors.is_empty() {
            println!("\nErrors:");
            for error in &self.errors {
                println!("- {error}");
            }
        }

        println!("{}", "=".repeat(50));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_match_recorded_checks() {
        let mut report = CheckReport::new();
        report.record_pass();
        report.record_pass();
        report.record_fail("navigation_links: GET /faq: expected status 200, got 404");

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(!report.is_success());
    }

    #[test]
    fn empty_report_is_success() {
        let report = CheckReport::new();
        assert!(report.is_success());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn report_serializes_counts_and_errors() {
        let mut report = CheckReport::new();
        report.record_pass();
        report.record_fail("landing_page: connection refused");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["passed"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["errors"][0], "landing_page: connection refused");
    }
}
