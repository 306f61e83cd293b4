use anyhow::Result;
use tracing::info;

use crate::cli::CheckArgs;
use crate::tables;
use crate::validation;

pub fn run(args: CheckArgs) -> Result<()> {
    let shots = tables::load_shots(&args.shots)?;
    let labels = tables::load_labels(&args.labels)?;
    let evidence = tables::load_evidence(&args.evidence)?;

    let universe = validation::shot_universe(&shots);
    validation::check_submission(&universe, &labels, &evidence)?;

    info!(
        shots = shots.len(),
        labels = labels.len(),
        evidence = evidence.len(),
        "submission structure is valid"
    );

    Ok(())
}
