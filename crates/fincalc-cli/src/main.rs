mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::lending::EmiArgs;
use commands::planning::GoalArgs;
use commands::returns::XirrArgs;
use commands::savings::{FdArgs, LumpsumArgs, NpsArgs, PpfArgs, RdArgs, SipArgs, StepUpSipArgs};
use commands::tax::{GstArgs, IncomeTaxArgs};
use commands::withdrawal::SwpArgs;

/// Personal-finance calculators with decimal precision
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Personal-finance calculators with decimal precision",
    long_about = "A CLI for Indian personal-finance calculations with decimal precision. \
                  Supports EMI schedules, SIP / step-up SIP / lumpsum / FD / RD / PPF / NPS \
                  projections, SWP drawdowns, goal planning, GST, income tax and XIRR."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Loan EMI with amortisation schedule
    Emi(EmiArgs),
    /// One-time investment growth (annual compounding)
    Lumpsum(LumpsumArgs),
    /// Fixed deposit maturity
    Fd(FdArgs),
    /// Systematic investment plan projection
    Sip(SipArgs),
    /// SIP with a yearly contribution step-up
    StepUpSip(StepUpSipArgs),
    /// Recurring deposit maturity
    Rd(RdArgs),
    /// Public Provident Fund projection
    Ppf(PpfArgs),
    /// National Pension System corpus and pension estimate
    Nps(NpsArgs),
    /// Systematic withdrawal plan
    Swp(SwpArgs),
    /// Required SIP / lumpsum for an inflation-adjusted goal
    Goal(GoalArgs),
    /// GST breakdown (CGST/SGST)
    Gst(GstArgs),
    /// Income tax under the new-regime slabs
    IncomeTax(IncomeTaxArgs),
    /// Extended internal rate of return for dated cash flows
    Xirr(XirrArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::lending::run_emi(args),
        Commands::Lumpsum(args) => commands::savings::run_lumpsum(args),
        Commands::Fd(args) => commands::savings::run_fd(args),
        Commands::Sip(args) => commands::savings::run_sip(args),
        Commands::StepUpSip(args) => commands::savings::run_step_up_sip(args),
        Commands::Rd(args) => commands::savings::run_rd(args),
        Commands::Ppf(args) => commands::savings::run_ppf(args),
        Commands::Nps(args) => commands::savings::run_nps(args),
        Commands::Swp(args) => commands::withdrawal::run_swp(args),
        Commands::Goal(args) => commands::planning::run_goal(args),
        Commands::Gst(args) => commands::tax::run_gst(args),
        Commands::IncomeTax(args) => commands::tax::run_income_tax(args),
        Commands::Xirr(args) => commands::returns::run_xirr(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            log_warnings(&value);
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn log_warnings(value: &serde_json::Value) {
    if let Some(serde_json::Value::Array(warnings)) = value.get("warnings") {
        for w in warnings.iter().filter_map(|w| w.as_str()) {
            tracing::warn!("{w}");
        }
    }
}
