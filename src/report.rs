//! Console report rendering.
//!
//! Writes result lines for stdout. Diagnostics never go through here; they
//! are emitted through `log` to stderr.

use std::io::{self, Write};

use crate::check::{CheckOutcome, CheckReport, DomainCheckResult};
use crate::config::NO_ADDRESSES_PLACEHOLDER;
use crate::resolver::AddressSet;

pub const BANNER: &str = "--- DNS Integrity Check ---";
pub const FOOTER: &str = "--- Check Complete ---";

/// Formats a set as `{a, b}`, or the failure placeholder when empty.
pub fn format_address_set(set: &AddressSet) -> String {
    if set.is_empty() {
        return NO_ADDRESSES_PLACEHOLDER.to_string();
    }
    let joined = set
        .iter()
        .map(|ip| ip.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", joined)
}

/// The verdict line(s) for one domain.
pub fn verdict_lines(result: &DomainCheckResult) -> Vec<String> {
    let domain = &result.domain;
    match &result.outcome {
        CheckOutcome::BothFailed => {
            vec![format!("[-] Could not resolve {} via either method.", domain)]
        }
        CheckOutcome::SystemFailed => vec![format!(
            "[-] System resolver failed for {}, skipping comparison.",
            domain
        )],
        CheckOutcome::DohFailed => vec![format!(
            "[-] DoH resolver failed for {}, skipping comparison.",
            domain
        )],
        CheckOutcome::Compared { suspicious } if !suspicious.is_empty() => vec![
            format!("[!] WARNING: Potential DNS Spoofing Detected for {}!", domain),
            format!(
                "    Suspicious IPs (System only): {}",
                format_address_set(suspicious)
            ),
        ],
        CheckOutcome::Compared { .. } => vec![format!(
            "[+] OK: System and DoH resolutions match for {}.",
            domain
        )],
    }
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)
}

/// Writes the full block for one domain.
pub fn write_result<W: Write>(out: &mut W, result: &DomainCheckResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[*] Checking domain: {}", result.domain)?;
    writeln!(out, "    System IPs: {}", format_address_set(&result.system))?;
    writeln!(out, "    DoH IPs   : {}", format_address_set(&result.doh))?;
    for line in verdict_lines(result) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Writes the closing summary line.
pub fn write_summary<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", FOOTER)?;
    if report.all_clear() {
        writeln!(out, "Result: No discrepancies detected in the checked domains.")
    } else {
        writeln!(out, "Result: Discrepancies detected. Review warnings above.")
    }
}
