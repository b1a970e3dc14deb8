//! dns_integrity library: DNS spoofing detection by dual resolution
//!
//! Each domain is resolved twice, once through the host's configured resolver
//! and once through a trusted DNS-over-HTTPS provider. IPv4 addresses only the
//! host resolver returned are reported as suspicious. A failed lookup on
//! either side makes the domain inconclusive, never suspicious.
//!
//! # Example
//!
//! ```no_run
//! use dns_integrity::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: vec!["example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_check(config, &mut std::io::stdout()).await?;
//! std::process::exit(report.exit_code());
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod check;
mod compare;
pub mod config;
mod error_handling;
pub mod initialization;
mod report;
mod resolver;

// Re-export public API
pub use check::{CheckOutcome, CheckReport, Checker, DomainCheckResult};
pub use compare::compare;
pub use config::{Config, DohConfig, LogFormat, LogLevel};
pub use error_handling::{rcode_name, FailureKind, FailureStats, InitializationError, ResolveError};
pub use report::{format_address_set, verdict_lines, write_result, write_summary};
pub use resolver::{
    resolve_or_empty, AddressResolver, AddressSet, DohRecord, DohResolver, DohResponse,
    SystemResolver,
};
pub use run::run_check;

mod run {
    use std::io::Write;

    use anyhow::{Context, Result};

    use crate::check::{CheckReport, Checker};
    use crate::config::Config;
    use crate::resolver::{DohResolver, SystemResolver};

    /// Checks every domain in `config` against the system resolver and the
    /// configured DoH endpoint, writing results to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the DoH HTTP client cannot be built or `out`
    /// cannot be written. Lookup failures are not errors.
    pub async fn run_check<W: Write>(config: Config, out: &mut W) -> Result<CheckReport> {
        let doh = DohResolver::new(&config.doh).context("Failed to initialize DoH resolver")?;
        log::debug!("Using DoH endpoint {}", doh.endpoint());

        let checker = Checker::new(SystemResolver::new(), doh);
        checker
            .run(&config.domains, out)
            .await
            .context("Failed to write results")
    }
}
