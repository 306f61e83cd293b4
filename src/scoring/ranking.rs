use std::collections::HashMap;

use crate::model::{LabelEntry, ShotId};

// A shot labelled more than once keeps its maximum confidence; equal
// confidences keep first-occurrence order (stable sort).
pub fn rank(person_name: &str, labels: &[LabelEntry]) -> Vec<ShotId> {
    let mut slots = HashMap::<&ShotId, usize>::new();
    let mut ranked: Vec<(ShotId, f64)> = Vec::new();

    for entry in labels.iter().filter(|entry| entry.person_name == person_name) {
        match slots.get(&entry.shot) {
            Some(&slot) => {
                let (_, confidence) = &mut ranked[slot];
                if entry.confidence > *confidence {
                    *confidence = entry.confidence;
                }
            }
            None => {
                slots.insert(&entry.shot, ranked.len());
                ranked.push((entry.shot.clone(), entry.confidence));
            }
        }
    }

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(shot, _)| shot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(video: &str, shot: u32, name: &str, confidence: f64) -> LabelEntry {
        LabelEntry {
            shot: ShotId::new(video, shot),
            person_name: name.to_string(),
            confidence,
        }
    }

    #[test]
    fn shots_are_ordered_by_descending_confidence() {
        let labels = vec![
            label("v1", 1, "alice_smith", 0.2),
            label("v1", 2, "alice_smith", 0.9),
            label("v1", 3, "alice_smith", 0.5),
        ];

        let ranking = rank("alice_smith", &labels);
        assert_eq!(
            ranking,
            vec![
                ShotId::new("v1", 2),
                ShotId::new("v1", 3),
                ShotId::new("v1", 1),
            ]
        );
    }

    #[test]
    fn repeated_shots_keep_their_maximum_confidence() {
        let labels = vec![
            label("v1", 1, "alice_smith", 0.3),
            label("v1", 2, "alice_smith", 0.6),
            label("v1", 1, "alice_smith", 0.9),
            label("v1", 1, "alice_smith", 0.1),
        ];

        let ranking = rank("alice_smith", &labels);
        assert_eq!(ranking, vec![ShotId::new("v1", 1), ShotId::new("v1", 2)]);
    }

    #[test]
    fn equal_confidences_keep_first_occurrence_order() {
        let labels = vec![
            label("v1", 7, "alice_smith", 0.5),
            label("v1", 2, "alice_smith", 0.5),
            label("v1", 5, "alice_smith", 0.5),
        ];

        let ranking = rank("alice_smith", &labels);
        assert_eq!(
            ranking,
            vec![
                ShotId::new("v1", 7),
                ShotId::new("v1", 2),
                ShotId::new("v1", 5),
            ]
        );
    }

    #[test]
    fn other_names_are_excluded() {
        let labels = vec![
            label("v1", 1, "alice_smith", 0.9),
            label("v1", 2, "bob_jones", 0.8),
        ];

        let ranking = rank("bob_jones", &labels);
        assert_eq!(ranking, vec![ShotId::new("v1", 2)]);
    }

    #[test]
    fn unknown_name_yields_empty_ranking() {
        let labels = vec![label("v1", 1, "alice_smith", 0.9)];
        assert!(rank("carol_white", &labels).is_empty());
    }
}
