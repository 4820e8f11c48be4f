//! Hashmark CLI
//!
//! Add, remove, and reflow `#` comments in files or on stdin.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use hashmark::{run_edit, CliError, CommandRegistry, EditConfig, LineRange};
use hashmark_fmt::{FormatConfig, Mode, DEFAULT_WIDTH};

#[derive(Parser)]
#[command(
    name = "hashmark",
    about = "Add, remove, and reflow # line comments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Comment out every selected line
    Add(EditArgs),
    /// Uncomment every selected line
    Remove(EditArgs),
    /// Rewrap selected comment lines to the configured width
    Format(EditArgs),
    /// Run a registered command by identifier
    Exec {
        /// Command identifier, e.g. commentFormatter.addComments
        id: String,
        #[command(flatten)]
        args: EditArgs,
    },
    /// List registered command identifiers
    Commands,
}

#[derive(Args)]
struct EditArgs {
    /// Files to edit in place (reads stdin when empty)
    paths: Vec<PathBuf>,

    /// Target line width for reflowed comments
    #[arg(long, env = "HASHMARK_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Only edit these lines (START:END or LINE, counting from 1); repeatable
    #[arg(long = "lines", value_name = "START:END")]
    lines: Vec<LineRange>,

    /// Check whether files would change (exit 1 if any would)
    #[arg(long)]
    check: bool,

    /// Show a diff instead of modifying files
    #[arg(long)]
    diff: bool,

    /// Read from stdin, write to stdout
    #[arg(long)]
    stdin: bool,
}

impl EditArgs {
    fn into_config(self) -> Result<(Vec<PathBuf>, EditConfig), CliError> {
        let config = EditConfig {
            check: self.check,
            diff: self.diff,
            stdin: self.stdin,
            lines: self.lines,
            format: FormatConfig::new(self.width)?,
        };
        Ok((self.paths, config))
    }
}

/// The registered command that runs `mode`.
fn command_for(registry: &CommandRegistry, mode: Mode) -> Result<String, CliError> {
    registry
        .id_for(mode)
        .map(str::to_string)
        .ok_or_else(|| CliError::UnknownCommand(mode.to_string()))
}

fn run(cli: Cli, registry: &CommandRegistry) -> Result<bool, CliError> {
    let (id, args) = match cli.command {
        Commands::Add(args) => (command_for(registry, Mode::Add)?, args),
        Commands::Remove(args) => (command_for(registry, Mode::Remove)?, args),
        Commands::Format(args) => (command_for(registry, Mode::Format)?, args),
        Commands::Exec { id, args } => (id, args),
        Commands::Commands => {
            for (id, command) in registry.iter() {
                println!("{id:<36} {}", command.mode);
            }
            return Ok(true);
        }
    };

    let (paths, config) = args.into_config()?;
    let summary = run_edit(&id, &paths, registry, &config)?;
    Ok(summary.is_success(config.check))
}

fn main() -> ExitCode {
    hashmark::init_tracing();

    let cli = Cli::parse();
    let registry = CommandRegistry::with_defaults();

    match run(cli, &registry) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
