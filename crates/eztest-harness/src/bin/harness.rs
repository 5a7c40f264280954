//! CLI entrypoint for the eztest harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eztest_core::{ConsoleReporter, Runner, Tee, exit_status};
use eztest_harness::structured_log::LogEmitter;
use eztest_harness::report::json_path_for;
use eztest_harness::{CapacityMode, HarnessConfig, JsonlReporter, RunReport, suite};

const SUITE: &str = "l2math";

/// Registration-ordered test runner.
#[derive(Debug, Parser)]
#[command(name = "eztest-harness")]
#[command(about = "Run the built-in l2math smoke suite")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register the suite, run it once, exit with the failure count.
    Run {
        /// Registry capacity (`unbounded`, `reference`, or a count).
        #[arg(long)]
        capacity: Option<CapacityMode>,
        /// Write a JSONL event log to this path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Write a markdown report here and a JSON twin next to it.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Suppress per-test console output.
        #[arg(long)]
        quiet: bool,
        /// Print totals and written file paths to stderr.
        #[arg(long)]
        summary: bool,
        /// Only register tests whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Print registered test names in registration order.
    List {
        /// Only list tests whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = HarnessConfig::from_env()?;

    match cli.command {
        Command::Run {
            capacity,
            log,
            report,
            quiet,
            summary,
            filter,
        } => {
            if let Some(capacity) = capacity {
                config.capacity = capacity;
            }
            if log.is_some() {
                config.log_path = log;
            }
            if report.is_some() {
                config.report_path = report;
            }
            config.quiet = quiet;
            config.summary = summary;
            config.filter = filter;
            run(&config)
        }
        Command::List { filter } => {
            config.filter = filter;
            let mut registry = config.capacity.registry();
            suite::register_all(&mut registry, |name| config.selects(name));
            for name in registry.names() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(config: &HarnessConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut registry = config.capacity.registry();
    let registration = suite::register_all(&mut registry, |name| config.selects(name));
    for name in &registration.rejected {
        eprintln!("Could not register test {name}: registry is full");
    }

    let mut console = (!config.quiet).then(ConsoleReporter::stdout);
    let mut jsonl = match &config.log_path {
        Some(path) => Some(JsonlReporter::new(LogEmitter::to_file(
            path,
            SUITE,
            &run_id(),
        )?)),
        None => None,
    };

    let summary = Runner::new(SUITE).run_with(&registry, &mut Tee(&mut console, &mut jsonl));

    if let Some(err) = console.as_ref().and_then(ConsoleReporter::error) {
        eprintln!("Console output failed: {err}");
    }
    if let Some(reporter) = jsonl {
        reporter.finish()?;
        if config.summary
            && let Some(path) = &config.log_path
        {
            eprintln!("Wrote event log to {}", path.display());
        }
    }

    if config.summary {
        eprintln!(
            "Run complete: total={}, passed={}, failed={}",
            summary.total, summary.passed, summary.failed
        );
    }
    let failed = summary.failed;

    if let Some(report_path) = &config.report_path {
        if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let report = RunReport::new("l2math Smoke Report", summary);
        let json_path = json_path_for(report_path);
        std::fs::write(report_path, report.to_markdown())?;
        std::fs::write(&json_path, report.to_json()?)?;
        if config.summary {
            eprintln!(
                "Wrote report to {} and {}",
                report_path.display(),
                json_path.display()
            );
        }
    }

    Ok(ExitCode::from(exit_status(failed)))
}

fn run_id() -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("run-{millis}")
}
