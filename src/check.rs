//! Per-domain orchestration.
//!
//! Each domain is resolved by both resolvers, classified into a
//! [`CheckOutcome`], reported, and dropped. Nothing is carried between domains
//! except the counters in [`CheckReport`].

use std::io::{self, Write};
use std::time::Instant;

use crate::compare::compare;
use crate::error_handling::FailureStats;
use crate::report::{write_banner, write_result, write_summary};
use crate::resolver::{resolve_or_empty, AddressResolver, AddressSet};

/// Terminal state of one domain check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Neither resolver produced addresses.
    BothFailed,
    /// Only the system resolver failed.
    SystemFailed,
    /// Only the DoH resolver failed. Not treated as suspicious.
    DohFailed,
    /// Both succeeded and were compared. `suspicious` holds system-only addresses.
    Compared {
        /// System-only addresses
        suspicious: AddressSet,
    },
}

impl CheckOutcome {
    /// Classifies two address sets, where an empty set marks a failed lookup.
    pub fn classify(system: &AddressSet, doh: &AddressSet) -> Self {
        match (system.is_empty(), doh.is_empty()) {
            (true, true) => CheckOutcome::BothFailed,
            (true, false) => CheckOutcome::SystemFailed,
            (false, true) => CheckOutcome::DohFailed,
            (false, false) => CheckOutcome::Compared {
                suspicious: compare(system, doh),
            },
        }
    }

    /// A comparison ran and found system-only addresses.
    pub fn is_discrepancy(&self) -> bool {
        matches!(self, CheckOutcome::Compared { suspicious } if !suspicious.is_empty())
    }

    /// No comparison was possible.
    pub fn is_inconclusive(&self) -> bool {
        !matches!(self, CheckOutcome::Compared { .. })
    }
}

/// Outcome for one domain, with both address sets for reporting.
///
/// An empty `system` or `doh` set means that resolver failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheckResult {
    /// Domain as given on the command line
    pub domain: String,
    /// Addresses from the system resolver
    pub system: AddressSet,
    /// Addresses from the DoH resolver
    pub doh: AddressSet,
    /// Classification of the two sets
    pub outcome: CheckOutcome,
}

impl DomainCheckResult {
    /// Builds and classifies the result for `domain`.
    pub fn new(domain: impl Into<String>, system: AddressSet, doh: AddressSet) -> Self {
        let outcome = CheckOutcome::classify(&system, &doh);
        DomainCheckResult {
            domain: domain.into(),
            system,
            doh,
            outcome,
        }
    }

    /// Addresses flagged for this domain (empty unless a comparison found some).
    pub fn suspicious(&self) -> Option<&AddressSet> {
        match &self.outcome {
            CheckOutcome::Compared { suspicious } if !suspicious.is_empty() => Some(suspicious),
            _ => None,
        }
    }
}

/// Summary of a run over several domains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Number of domains checked
    pub total_domains: usize,
    /// Domains where both answers were compared and matched
    pub clean: usize,
    /// Domains with system-only addresses
    pub discrepancies: usize,
    /// Domains where at least one resolver failed
    pub inconclusive: usize,
    /// Lookup failures over the whole run (diagnostic only)
    pub lookup_failures: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl CheckReport {
    /// No domain produced a discrepancy. Inconclusive domains do not count.
    pub fn all_clear(&self) -> bool {
        self.discrepancies == 0
    }

    /// Process exit code: 0 when all clear, 1 when any discrepancy was found.
    pub fn exit_code(&self) -> i32 {
        if self.all_clear() {
            0
        } else {
            1
        }
    }

    fn record(&mut self, outcome: &CheckOutcome) {
        self.total_domains += 1;
        if outcome.is_discrepancy() {
            self.discrepancies += 1;
        } else if outcome.is_inconclusive() {
            self.inconclusive += 1;
        } else {
            self.clean += 1;
        }
    }
}

/// Checks domains by comparing a system resolver against a trusted DoH resolver.
pub struct Checker<S, D> {
    system: S,
    doh: D,
    stats: FailureStats,
}

impl<S: AddressResolver, D: AddressResolver> Checker<S, D> {
    /// Creates a checker with fresh failure counters.
    pub fn new(system: S, doh: D) -> Self {
        Checker {
            system,
            doh,
            stats: FailureStats::new(),
        }
    }

    /// Failure counters accumulated by this checker.
    pub fn stats(&self) -> &FailureStats {
        &self.stats
    }

    /// Resolves `domain` through both resolvers and classifies the result.
    ///
    /// The two lookups are independent and run concurrently; the result only
    /// depends on both answers.
    pub async fn check_domain(&self, domain: &str) -> DomainCheckResult {
        let (system, doh) = tokio::join!(
            resolve_or_empty(&self.system, domain, &self.stats),
            resolve_or_empty(&self.doh, domain, &self.stats),
        );
        let result = DomainCheckResult::new(domain, system, doh);
        match &result.outcome {
            CheckOutcome::Compared { suspicious } if !suspicious.is_empty() => {
                log::debug!("{}: {} suspicious address(es)", domain, suspicious.len())
            }
            outcome => log::debug!("{}: {:?}", domain, outcome),
        }
        result
    }

    /// Checks `domains` one at a time, writing each result to `out` as soon as
    /// it is known.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `out` fails; resolver failures are reported
    /// as inconclusive results.
    pub async fn run<W: Write>(&self, domains: &[String], out: &mut W) -> io::Result<CheckReport> {
        let start = Instant::now();
        let mut report = CheckReport::default();

        write_banner(out)?;
        for domain in domains {
            let result = self.check_domain(domain).await;
            write_result(out, &result)?;
            report.record(&result.outcome);
        }

        report.lookup_failures = self.stats.total();
        report.elapsed_seconds = start.elapsed().as_secs_f64();
        write_summary(out, &report)?;
        out.flush()?;

        self.stats.log_summary();
        log::info!(
            "Checked {} domain(s) in {:.1}s: {} clean, {} discrepant, {} inconclusive",
            report.total_domains,
            report.elapsed_seconds,
            report.clean,
            report.discrepancies,
            report.inconclusive
        );
        Ok(report)
    }
}
