use std::collections::BTreeMap;

use crate::model::{CorpusMetrics, QueryScore};

// Means over an empty query set are undefined, so aggregation returns None
// rather than NaN. Labels-only runs skip the correctness-based metrics.
pub fn aggregate(
    scores: &BTreeMap<String, QueryScore>,
    score_evidence: bool,
) -> Option<CorpusMetrics> {
    if scores.is_empty() {
        return None;
    }

    let count = scores.len() as f64;
    let mean_average_precision = scores
        .values()
        .map(|score| score.average_precision)
        .sum::<f64>()
        / count;

    if !score_evidence {
        return Some(CorpusMetrics {
            mean_average_precision,
            mean_correctness: None,
            evidence_weighted_map: None,
        });
    }

    let mean_correctness = scores.values().map(|score| score.correctness).sum::<f64>() / count;
    let evidence_weighted_map = scores
        .values()
        .map(|score| score.correctness * score.average_precision)
        .sum::<f64>()
        / count;

    Some(CorpusMetrics {
        mean_average_precision,
        mean_correctness: Some(mean_correctness),
        evidence_weighted_map: Some(evidence_weighted_map),
    })
}
