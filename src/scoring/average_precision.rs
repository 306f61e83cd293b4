use std::collections::HashSet;

use crate::model::ShotId;

// The sum of precisions is divided by min(|returned|, |relevant|), not
// |relevant|: the denominator is capped at what the submission structurally
// could have achieved with the shots it returned. `returned` must already be
// duplicate-free.
pub fn average_precision(returned: &[ShotId], relevant: &HashSet<ShotId>) -> f64 {
    let n_returned = returned.len();
    let n_relevant = relevant.len();

    if n_returned == 0 && n_relevant == 0 {
        return 1.0;
    }
    if n_returned == 0 || n_relevant == 0 {
        return 0.0;
    }

    let mut true_positives = 0_usize;
    let mut precision_sum = 0.0;
    for (index, shot) in returned.iter().enumerate() {
        if relevant.contains(shot) {
            true_positives += 1;
            precision_sum += true_positives as f64 / (index + 1) as f64;
        }
    }

    precision_sum / n_returned.min(n_relevant) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shots(ids: &[(&str, u32)]) -> Vec<ShotId> {
        ids.iter()
            .map(|(video, shot)| ShotId::new(*video, *shot))
            .collect()
    }

    fn shot_set(ids: &[(&str, u32)]) -> HashSet<ShotId> {
        shots(ids).into_iter().collect()
    }

    #[test]
    fn empty_returned_and_empty_relevant_is_vacuously_perfect() {
        assert_eq!(average_precision(&[], &HashSet::new()), 1.0);
    }

    #[test]
    fn returning_anything_against_empty_relevant_scores_zero() {
        let returned = shots(&[("v1", 1)]);
        assert_eq!(average_precision(&returned, &HashSet::new()), 0.0);
    }

    #[test]
    fn returning_nothing_against_nonempty_relevant_scores_zero() {
        let relevant = shot_set(&[("v1", 1)]);
        assert_eq!(average_precision(&[], &relevant), 0.0);
    }

    #[test]
    fn perfectly_ranked_pair_scores_one() {
        let returned = shots(&[("v1", 1), ("v1", 2)]);
        let relevant = shot_set(&[("v1", 1), ("v1", 2)]);
        assert_eq!(average_precision(&returned, &relevant), 1.0);
    }

    #[test]
    fn min_denominator_worked_example() {
        // irrelevant shot first, then both relevant shots:
        // precision 1/2 at rank 2, 2/3 at rank 3, divided by min(3, 2) = 2
        let returned = shots(&[("v1", 3), ("v1", 1), ("v1", 2)]);
        let relevant = shot_set(&[("v1", 1), ("v1", 2)]);

        let expected = (0.5 + 2.0 / 3.0) / 2.0;
        assert!((average_precision(&returned, &relevant) - expected).abs() < 1e-12);
        assert!((expected - 7.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn short_but_correct_ranking_is_not_penalized_by_denominator() {
        let returned = shots(&[("v1", 1)]);
        let relevant = shot_set(&[("v1", 1), ("v1", 2)]);
        assert_eq!(average_precision(&returned, &relevant), 1.0);
    }

    #[test]
    fn moving_a_relevant_shot_earlier_never_decreases_the_score() {
        let relevant = shot_set(&[("v1", 1)]);
        let late = shots(&[("v1", 9), ("v1", 1)]);
        let early = shots(&[("v1", 1), ("v1", 9)]);

        let late_score = average_precision(&late, &relevant);
        let early_score = average_precision(&early, &relevant);
        assert!(early_score >= late_score);
        assert_eq!(late_score, 0.5);
        assert_eq!(early_score, 1.0);
    }
}
