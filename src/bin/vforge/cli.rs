use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use valence_forge::DEFAULT_MAX_COMBINATIONS;

#[derive(Parser)]
#[command(
    name = "vforge",
    about = "Mixed-valence oxidation state screening",
    version,
    author,
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Screen compositions for a plausible charge-neutral assignment
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// List every charge-neutral assignment of one composition
    #[command(visible_alias = "e")]
    Enumerate(EnumerateArgs),

    /// Show electronegativity and oxidation states of elements
    #[command(visible_alias = "s")]
    States(StatesArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Check(args) => args.io.quiet,
            Command::Enumerate(args) => args.quiet,
            Command::States(args) => args.quiet,
        }
    }
}

/// I/O options for batch screening.
#[derive(Args)]
pub struct IoOptions {
    /// Input file with one formula per line (stdin if omitted and no formulas given)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip the first line of the input (CSV header)
    #[arg(long)]
    pub header: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Screening options shared by all commands that search assignments.
#[derive(Args)]
#[command(next_help_heading = "Screening")]
pub struct ScreenOptions {
    /// Oxidation state set (smact14, icsd16, icsd24, pymatgen_sp, wiki)
    #[arg(long = "set", value_name = "SET", default_value = "icsd24")]
    pub set: String,

    /// Skip the electronegativity ordering test
    #[arg(long)]
    pub no_pauling: bool,

    /// Largest candidate space to search before giving up
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_COMBINATIONS)]
    pub max_combinations: u64,

    /// Require all atoms of an element to share one oxidation state
    #[arg(long)]
    pub uniform: bool,

    /// Custom element table (TOML file)
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Formulas to screen (e.g. Fe3O4 NaCl)
    #[arg(value_name = "FORMULA")]
    pub formulas: Vec<String>,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub screen: ScreenOptions,

    /// Append the first passing assignment to each output row
    #[arg(long)]
    pub witness: bool,
}

#[derive(Args)]
pub struct EnumerateArgs {
    /// Formula to enumerate (e.g. Fe3O4)
    #[arg(value_name = "FORMULA")]
    pub formula: String,

    #[command(flatten)]
    pub screen: ScreenOptions,

    /// Print at most this many assignments
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Suppress the banner and summary
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct StatesArgs {
    /// Element symbols (e.g. Fe O Mn)
    #[arg(value_name = "SYMBOL", required = true)]
    pub symbols: Vec<String>,

    /// Custom element table (TOML file)
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
