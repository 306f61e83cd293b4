use std::collections::HashSet;

use crate::model::{EvidenceEntry, Modality, ShotId};

// A correct citation earns the resolver's similarity score, so a close but
// inexact name match is graded rather than binary. A submitted source of
// `both` is expanded like reference rows are and counts if either expanded
// occurrence is relevant. Threshold gating already happened at resolution.
pub fn judge(
    submitted: Option<&EvidenceEntry>,
    similarity: f64,
    relevant: &HashSet<(ShotId, Modality)>,
) -> f64 {
    let Some(entry) = submitted else {
        return 0.0;
    };

    let cited_is_relevant = entry
        .source
        .modalities()
        .iter()
        .any(|modality| relevant.contains(&(entry.shot.clone(), *modality)));

    if cited_is_relevant { similarity } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Source;

    fn entry(name: &str, video: &str, shot: u32, source: Source) -> EvidenceEntry {
        EvidenceEntry {
            person_name: name.to_string(),
            shot: ShotId::new(video, shot),
            source,
        }
    }

    fn occurrences(values: &[(&str, u32, Modality)]) -> HashSet<(ShotId, Modality)> {
        values
            .iter()
            .map(|(video, shot, modality)| (ShotId::new(*video, *shot), *modality))
            .collect()
    }

    #[test]
    fn citation_matching_an_expanded_both_row_earns_the_similarity_score() {
        let relevant = occurrences(&[
            ("v2", 5, Modality::Audio),
            ("v2", 5, Modality::Image),
        ]);
        let submitted = entry("bob_jones", "v2", 5, Source::Image);

        assert_eq!(judge(Some(&submitted), 0.97, &relevant), 0.97);
    }

    #[test]
    fn citation_of_an_irrelevant_shot_scores_zero() {
        let relevant = occurrences(&[("v2", 5, Modality::Image)]);
        let submitted = entry("bob_jones", "v2", 6, Source::Image);

        assert_eq!(judge(Some(&submitted), 1.0, &relevant), 0.0);
    }

    #[test]
    fn citation_of_the_wrong_modality_scores_zero() {
        let relevant = occurrences(&[("v2", 5, Modality::Image)]);
        let submitted = entry("bob_jones", "v2", 5, Source::Audio);

        assert_eq!(judge(Some(&submitted), 1.0, &relevant), 0.0);
    }

    #[test]
    fn submitted_both_counts_when_either_modality_is_relevant() {
        let relevant = occurrences(&[("v2", 5, Modality::Audio)]);
        let submitted = entry("bob_jones", "v2", 5, Source::Both);

        assert_eq!(judge(Some(&submitted), 0.98, &relevant), 0.98);
    }

    #[test]
    fn missing_evidence_entry_scores_zero() {
        let relevant = occurrences(&[("v2", 5, Modality::Image)]);
        assert_eq!(judge(None, 1.0, &relevant), 0.0);
    }
}
