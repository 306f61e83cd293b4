use std::collections::HashSet;

use crate::model::{EvidenceReferenceEntry, LabelReferenceEntry, Modality, ShotId};

// Reference names are ground truth and are matched exactly, never fuzzily.
pub fn relevant_shots(query: &str, reference: &[LabelReferenceEntry]) -> HashSet<ShotId> {
    reference
        .iter()
        .filter(|row| row.person_name == query)
        .map(|row| row.shot.clone())
        .collect()
}

pub fn relevant_evidence(
    query: &str,
    reference: &[EvidenceReferenceEntry],
) -> HashSet<(ShotId, Modality)> {
    let mut occurrences = HashSet::new();
    for row in reference.iter().filter(|row| row.person_name == query) {
        for modality in row.source.modalities() {
            occurrences.insert((row.shot.clone(), *modality));
        }
    }
    occurrences
}
