//! CLI for urlsplit.

mod completions;
mod mode;

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;
use std::io::{self, Read, Write};
use urlsplit_core::config::{self, UrlsplitConfig};
use urlsplit_core::{resolve_input, split, Helpers, UrlSplitError};

pub use completions::write_completions;
pub use mode::ModeArgs;

/// Process exit code for any failed invocation.
pub const EXIT_FAILURE: i32 = 1;

/// Maps an invocation result to its exit code, reporting failures on `stderr`.
pub fn exit_code(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(stderr, "urlsplit: {:#}", err);
            EXIT_FAILURE
        }
    }
}

/// Top-level CLI for urlsplit.
#[derive(Debug, Parser)]
#[command(name = "urlsplit", version)]
#[command(
    about = "Split a URL into named components for shell scripts",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// The URL to parse. Read from stdin if not supplied.
    pub url: Option<String>,

    /// Require the URL argument and never read stdin.
    #[arg(long)]
    pub require_url: bool,

    /// Print a completion script for SHELL and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let Some(shell) = cli.completions {
            let mut stdout = io::stdout().lock();
            write_completions(shell, &mut stdout)?;
            return Ok(());
        }

        let cfg = config::load_or_default()?;
        tracing::debug!("loaded config: {:?}", cfg);

        cli.run(&cfg, &mut io::stdin().lock(), &mut io::stdout().lock())
    }

    /// Resolves the mode and URL, then renders into `stdout`.
    /// The mode is checked first so a missing flag never waits on stdin.
    pub fn run(
        self,
        cfg: &UrlsplitConfig,
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
    ) -> Result<()> {
        let mode = self.mode.resolve(&cfg.export)?;
        let policy = cfg.input.policy(self.require_url);
        tracing::debug!(?mode, ?policy, "dispatching");

        let input = resolve_input(self.url, policy, cfg.input.trim, stdin)?;
        split(&input, &mode, &Helpers::standard(), stdout)?;
        stdout.flush().map_err(UrlSplitError::OutputWrite)?;
        Ok(())
    }
}
