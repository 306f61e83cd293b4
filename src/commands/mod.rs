use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{
    CorpusMetrics, EvaluationReport, EvaluationSettings, TableProvenance,
};
use crate::scoring::ScoredRun;
use crate::util::{now_utc_string, sha256_file};

pub mod check;
pub mod evaluate;
pub mod map;

const REPORT_MANIFEST_VERSION: u32 = 1;

pub(crate) fn table_provenance(table: &str, path: &Path) -> Result<TableProvenance> {
    let sha256 = sha256_file(path)
        .with_context(|| format!("failed to fingerprint {table} table: {}", path.display()))?;
    Ok(TableProvenance {
        table: table.to_string(),
        path: path.display().to_string(),
        sha256,
    })
}

pub(crate) fn build_report(
    settings: EvaluationSettings,
    inputs: Vec<TableProvenance>,
    run: &ScoredRun,
    metrics: CorpusMetrics,
) -> EvaluationReport {
    EvaluationReport {
        manifest_version: REPORT_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        settings,
        inputs,
        resolution: run.resolution,
        metrics,
        per_query: run.scores.clone(),
    }
}

pub(crate) fn write_json_stdout(report: &EvaluationReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize evaluation report")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
