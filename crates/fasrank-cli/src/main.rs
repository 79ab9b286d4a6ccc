#![forbid(unsafe_code)]

mod cmd;
mod output;
mod registry;

use std::env;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "fasrank: PageRank-guided feedback arc set solver",
    long_about = None
)]
struct Cli {
    /// Enable debug logging for the solvers.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Compute a feedback arc set",
        long_about = "Compute a set of edges whose removal leaves the graph acyclic.",
        after_help = "EXAMPLES:\n    # Solve the built-in sample graph\n    fasrank solve\n\n    # Solve a file with the greedy solver and list the removed edges\n    fasrank solve -i graph.txt -s greedy -p\n\n    # Machine-readable output with a residual acyclicity check\n    fasrank solve -i graph.txt --verify --json"
    )]
    Solve(cmd::solve::SolveArgs),

    #[command(
        about = "List cyclic strongly connected components",
        after_help = "EXAMPLES:\n    fasrank scc -i graph.txt"
    )]
    Scc(cmd::scc::SccArgs),

    #[command(about = "List available solvers")]
    Solvers,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("FASRANK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "fasrank=debug,fasrank_core=debug,info"
        } else {
            "fasrank=warn,fasrank_core=warn,warn"
        })
    });

    let format = env::var("FASRANK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays parseable.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    debug!(?output, "output mode");

    let command_result = match cli.command {
        Commands::Solve(ref args) => cmd::solve::run_solve(args, output),
        Commands::Scc(ref args) => cmd::scc::run_scc(args, output),
        Commands::Solvers => cmd::solvers::run_solvers(output),
    };

    match command_result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_flag_parses() {
        let cli = Cli::parse_from(["fasrank", "--format", "json", "solvers"]);
        assert_eq!(cli.format, Some(OutputMode::Json));
        assert_eq!(cli.output_mode(), OutputMode::Json);
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["fasrank", "solve", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.output_mode(), OutputMode::Json);
    }

    #[test]
    fn verbose_flag_parsed() {
        let cli = Cli::parse_from(["fasrank", "-v", "scc"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Scc(_)));
    }

    #[test]
    fn solve_subcommand_parses() {
        let cli = Cli::parse_from(["fasrank", "solve", "-s", "greedy_opt", "--verify"]);
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.solver, "greedy_opt");
        assert!(args.verify);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["fasrank", "--format", "yaml", "solvers"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
