use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "persondiscovery",
    version,
    about = "Person discovery benchmark scoring tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a submission: fuzzy name resolution, ranked labels, evidence.
    Evaluate(EvaluateArgs),
    /// Labels-only MAP with exact name matching (the earlier variant).
    Map(MapArgs),
    /// Validate submission structure without scoring.
    Check(CheckArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MatchingMode {
    Exact,
    Fuzzy,
}

impl MatchingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long)]
    pub shots: PathBuf,

    #[arg(long)]
    pub label_reference: PathBuf,

    #[arg(long)]
    pub evidence_reference: PathBuf,

    #[arg(long)]
    pub labels: PathBuf,

    #[arg(long)]
    pub evidence: PathBuf,

    #[arg(long)]
    pub queries: Option<PathBuf>,

    #[arg(long, default_value_t = 0.95)]
    pub threshold: f64,

    #[arg(long, value_enum, default_value_t = MatchingMode::Fuzzy)]
    pub matching: MatchingMode,

    #[arg(long, default_value_t = false)]
    pub skip_evidence: bool,

    #[arg(long)]
    pub consensus_shots: Option<PathBuf>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MapArgs {
    #[arg(long)]
    pub shots: PathBuf,

    #[arg(long)]
    pub label_reference: PathBuf,

    #[arg(long)]
    pub labels: PathBuf,

    #[arg(long)]
    pub queries: Option<PathBuf>,

    #[arg(long)]
    pub consensus_shots: Option<PathBuf>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(long)]
    pub shots: PathBuf,

    #[arg(long)]
    pub labels: PathBuf,

    #[arg(long)]
    pub evidence: PathBuf,
}
