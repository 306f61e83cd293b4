use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use crate::model::{
    EvidenceEntry, EvidenceReferenceEntry, LabelEntry, LabelReferenceEntry, QueryScore,
    ResolutionStats, ShotId,
};

pub mod aggregate;
pub mod average_precision;
pub mod evidence;
pub mod ranking;
pub mod relevance;
pub mod resolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    Exact,
    Fuzzy,
}

#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    pub matching: Matching,
    pub threshold: f64,
    pub score_evidence: bool,
    pub consensus: Option<HashSet<ShotId>>,
}

#[derive(Debug, Clone)]
pub struct ScoredRun {
    pub scores: BTreeMap<String, QueryScore>,
    pub resolution: ResolutionStats,
}

// Every query is scored independently; the only cross-query step is the
// final fold in aggregate::aggregate. Unresolved queries score zero on both
// axes and never fail the run.
pub fn score_queries(
    config: &EvaluationConfig,
    queries: &[String],
    labels: &[LabelEntry],
    label_reference: &[LabelReferenceEntry],
    evidence: &[EvidenceEntry],
    evidence_reference: &[EvidenceReferenceEntry],
) -> ScoredRun {
    let labels = restrict_labels(labels, config.consensus.as_ref());
    let label_reference = restrict_reference(label_reference, config.consensus.as_ref());

    let candidates = candidate_names(&labels);

    let mut scores = BTreeMap::new();
    let mut resolved_count = 0_usize;

    for query in queries {
        let resolution = match config.matching {
            Matching::Exact => resolver::resolve_exact(query, &candidates),
            Matching::Fuzzy => resolver::resolve(query, &candidates, config.threshold),
        };

        let Some(name) = resolution.name.as_deref() else {
            debug!(
                query = %query,
                best_score = resolution.score,
                "query did not resolve to any submitted name"
            );
            scores.insert(
                query.clone(),
                QueryScore {
                    average_precision: 0.0,
                    correctness: 0.0,
                },
            );
            continue;
        };
        resolved_count += 1;

        let relevant = relevance::relevant_shots(query, &label_reference);
        let returned = ranking::rank(name, &labels);
        let average_precision = average_precision::average_precision(&returned, &relevant);

        let correctness = if config.score_evidence {
            let relevant_evidence = relevance::relevant_evidence(query, evidence_reference);
            let submitted = evidence.iter().find(|entry| entry.person_name == name);
            evidence::judge(submitted, resolution.score, &relevant_evidence)
        } else {
            0.0
        };

        debug!(
            query = %query,
            resolved = %name,
            similarity = resolution.score,
            returned = returned.len(),
            relevant = relevant.len(),
            average_precision,
            correctness,
            "scored query"
        );

        scores.insert(
            query.clone(),
            QueryScore {
                average_precision,
                correctness,
            },
        );
    }

    let resolution = ResolutionStats {
        query_count: queries.len(),
        resolved_count,
        unresolved_count: queries.len() - resolved_count,
    };

    ScoredRun { scores, resolution }
}

pub fn queries_from_reference(reference: &[LabelReferenceEntry]) -> Vec<String> {
    reference
        .iter()
        .map(|row| row.person_name.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

// The resolver's tie-break depends on this enumeration order, so it must be
// deterministic: first occurrence in the label table wins.
fn candidate_names(labels: &[LabelEntry]) -> Vec<String> {
    let mut seen = HashSet::<&str>::new();
    let mut names = Vec::new();
    for entry in labels {
        if seen.insert(entry.person_name.as_str()) {
            names.push(entry.person_name.clone());
        }
    }
    names
}

fn restrict_labels(labels: &[LabelEntry], consensus: Option<&HashSet<ShotId>>) -> Vec<LabelEntry> {
    match consensus {
        None => labels.to_vec(),
        Some(subset) => labels
            .iter()
            .filter(|entry| subset.contains(&entry.shot))
            .cloned()
            .collect(),
    }
}

fn restrict_reference(
    reference: &[LabelReferenceEntry],
    consensus: Option<&HashSet<ShotId>>,
) -> Vec<LabelReferenceEntry> {
    match consensus {
        None => reference.to_vec(),
        Some(subset) => reference
            .iter()
            .filter(|row| subset.contains(&row.shot))
            .cloned()
            .collect(),
    }
}
