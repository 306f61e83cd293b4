use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Display;

use anyhow::{Result, bail};

use crate::model::{EvidenceEntry, LabelEntry, Shot, ShotId};

pub fn shot_universe(shots: &[Shot]) -> HashSet<ShotId> {
    shots.iter().map(|shot| shot.id.clone()).collect()
}

// Structural checks run before any scoring; a violation aborts the whole run
// since no partial score is meaningful for an invalid submission.
pub fn check_submission(
    shots: &HashSet<ShotId>,
    labels: &[LabelEntry],
    evidence: &[EvidenceEntry],
) -> Result<()> {
    check_label_shots(shots, labels)?;
    check_evidence_names(labels, evidence)?;
    check_single_evidence(evidence)?;
    check_evidence_shots(shots, evidence)?;
    Ok(())
}

pub fn check_label_shots(shots: &HashSet<ShotId>, labels: &[LabelEntry]) -> Result<()> {
    let unknown = labels
        .iter()
        .map(|entry| &entry.shot)
        .filter(|shot| !shots.contains(*shot))
        .collect::<BTreeSet<&ShotId>>();

    if !unknown.is_empty() {
        bail!(
            "labels reference {} shot(s) absent from the shot table, e.g. {}",
            unknown.len(),
            preview(&unknown)
        );
    }

    Ok(())
}

pub fn check_evidence_names(labels: &[LabelEntry], evidence: &[EvidenceEntry]) -> Result<()> {
    let label_names = labels
        .iter()
        .map(|entry| entry.person_name.as_str())
        .collect::<BTreeSet<&str>>();
    let evidence_names = evidence
        .iter()
        .map(|entry| entry.person_name.as_str())
        .collect::<BTreeSet<&str>>();

    if label_names != evidence_names {
        let missing = label_names
            .difference(&evidence_names)
            .copied()
            .collect::<BTreeSet<&str>>();
        let extra = evidence_names
            .difference(&label_names)
            .copied()
            .collect::<BTreeSet<&str>>();
        bail!(
            "label and evidence tables must cover the same person names \
             (labelled without evidence: [{}]; evidence without labels: [{}])",
            preview(&missing),
            preview(&extra)
        );
    }

    Ok(())
}

pub fn check_single_evidence(evidence: &[EvidenceEntry]) -> Result<()> {
    let mut counts = BTreeMap::<&str, usize>::new();
    for entry in evidence {
        *counts.entry(entry.person_name.as_str()).or_insert(0) += 1;
    }

    let duplicated = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(name, _)| *name)
        .collect::<BTreeSet<&str>>();

    if !duplicated.is_empty() {
        bail!(
            "there must be exactly one evidence row per person name \
             (duplicated: [{}])",
            preview(&duplicated)
        );
    }

    Ok(())
}

pub fn check_evidence_shots(shots: &HashSet<ShotId>, evidence: &[EvidenceEntry]) -> Result<()> {
    let unknown = evidence
        .iter()
        .map(|entry| &entry.shot)
        .filter(|shot| !shots.contains(*shot))
        .collect::<BTreeSet<&ShotId>>();

    if !unknown.is_empty() {
        bail!(
            "evidence cites {} shot(s) absent from the shot table, e.g. {}",
            unknown.len(),
            preview(&unknown)
        );
    }

    Ok(())
}

const PREVIEW_LIMIT: usize = 5;

fn preview<T: Display>(values: &BTreeSet<T>) -> String {
    let mut rendered = values
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    if values.len() > PREVIEW_LIMIT {
        rendered.push_str(", ...");
    }
    rendered
}
