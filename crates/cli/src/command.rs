use std::io::{Write, stderr, stdout};
use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, ValueHint};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::LevelFilter;
use itertools::Itertools;
use quipdoc::help::HelpText;
use quipdoc::{readme, template};
use tracing::error;
use tracing_log::AsTrace;

/// Default command capturing quip's help output, run from the client's
/// repo root.
const DEFAULT_HELP_COMMAND: &[&str] = &["cargo", "run", "--quiet", "--", "-h"];

fn enable_logging(verbosity: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(true)
        .without_time()
        .compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(verbosity.as_trace())
        .with_writer(stderr)
        .init();
}

#[derive(Parser)]
#[command(
    name = "quipdoc",
    version,
    about = "regenerate quip's README from its current help output"
)]
pub(crate) struct Command {
    /// write the document to a custom path
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        default_value = "README.md"
    )]
    output: Utf8PathBuf,

    /// print the rendered document to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    #[clap(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// custom command used to capture help output
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        long_help = indoc::indoc! {"
            Override the command used to capture help output.

            By default the client is built and run from the sources in the
            current working directory via `cargo run --quiet -- -h`, so the
            generator is expected to run from the quip repo root.
        "}
    )]
    command: Vec<String>,
}

impl Command {
    pub(super) fn run() -> ExitCode {
        let cmd = Command::parse();
        enable_logging(cmd.verbosity.log_level_filter());

        // TODO: drop this once stable rust supports `unix_sigpipe`,
        // see https://github.com/rust-lang/rust/issues/97889.
        //
        // Reset SIGPIPE to the default behavior since rust ignores it by default.
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }

        match cmd.generate() {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to update README: {e:#}");
                ExitCode::FAILURE
            }
        }
    }

    fn help_command(&self) -> Vec<&str> {
        if self.command.is_empty() {
            DEFAULT_HELP_COMMAND.to_vec()
        } else {
            self.command.iter().map(String::as_str).collect()
        }
    }

    fn generate(&self) -> anyhow::Result<()> {
        let argv = self.help_command();

        if self.dry_run {
            let help = HelpText::capture(argv.iter().copied()).with_context(|| {
                format!("failed capturing help output: {}", argv.iter().join(" "))
            })?;
            let mut stdout = stdout().lock();
            stdout.write_all(template::render(&help).as_bytes())?;
        } else {
            readme::generate(argv.iter().copied(), &self.output)
                .with_context(|| format!("failed generating {}", self.output))?;
            println!("Updated README");
        }

        Ok(())
    }
}
