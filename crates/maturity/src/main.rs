//! `maturity`: print the maturity amount for a principal, rate and tenure.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

/// Field values are taken as typed; unparseable input yields `NaN`.
#[derive(Debug, Parser)]
#[command(name = "maturity", version, about = "Compute a maturity amount")]
struct Cli {
    /// Principal amount.
    #[arg(allow_hyphen_values = true)]
    principal: String,
    /// Interest rate.
    #[arg(allow_hyphen_values = true)]
    rate: String,
    /// Tenure.
    #[arg(allow_hyphen_values = true)]
    tenure: String,
}

fn main() -> ExitCode {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "failed to write result");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    debug!(principal = %cli.principal, rate = %cli.rate, tenure = %cli.tenure, "calculating");
    let line = maturity::calculate(&cli.principal, &cli.rate, &cli.tenure);
    writeln!(io::stdout().lock(), "{line}")
}
