use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::info;

use crate::cli::MapArgs;
use crate::commands::{build_report, table_provenance, write_json_stdout};
use crate::model::EvaluationSettings;
use crate::scoring::{self, EvaluationConfig, Matching};
use crate::tables;
use crate::util::{format_percent, write_json_pretty};
use crate::validation;

pub fn run(args: MapArgs) -> Result<()> {
    let shots = tables::load_shots(&args.shots)?;
    let labels = tables::load_labels(&args.labels)?;
    let label_reference = tables::load_label_reference(&args.label_reference)?;

    info!(
        shots = shots.len(),
        labels = labels.len(),
        label_reference = label_reference.len(),
        "loaded input tables"
    );

    let universe = validation::shot_universe(&shots);
    validation::check_label_shots(&universe, &labels)?;

    let consensus = args
        .consensus_shots
        .as_deref()
        .map(tables::load_shot_subset)
        .transpose()?;

    let (queries, query_source) = match args.queries.as_deref() {
        Some(path) => (tables::load_query_list(path)?, "file"),
        None => (scoring::queries_from_reference(&label_reference), "reference"),
    };
    if queries.is_empty() {
        bail!("no queries to evaluate");
    }

    let config = EvaluationConfig {
        matching: Matching::Exact,
        threshold: 1.0,
        score_evidence: false,
        consensus,
    };

    let scored = scoring::score_queries(&config, &queries, &labels, &label_reference, &[], &[]);

    let Some(metrics) = scoring::aggregate::aggregate(&scored.scores, false) else {
        bail!("no queries to evaluate");
    };

    info!(
        queries = scored.resolution.query_count,
        resolved = scored.resolution.resolved_count,
        unresolved = scored.resolution.unresolved_count,
        "labels-only evaluation completed"
    );

    let settings = EvaluationSettings {
        matching: "exact".to_string(),
        threshold: 1.0,
        score_evidence: false,
        consensus_shots: args
            .consensus_shots
            .as_ref()
            .map(|path| path.display().to_string()),
        query_source: query_source.to_string(),
    };
    let inputs = vec![
        table_provenance("shots", &args.shots)?,
        table_provenance("labels", &args.labels)?,
        table_provenance("label_reference", &args.label_reference)?,
    ];
    let report = build_report(settings, inputs, &scored, metrics);

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote evaluation report");
    }

    if args.json {
        return write_json_stdout(&report);
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(
        output,
        "MAP = {}",
        format_percent(metrics.mean_average_precision)
    )?;
    output.flush()?;

    Ok(())
}
