use std::collections::BTreeMap;
use std::fmt;

use crate::{BestSet, ExerciseHistory, ExerciseID, LoggedExercise, Reps, RepsRange, Weight};

/// Direction of the suggested load change relative to the last session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Maintain,
    Down,
    Deload,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Trend::Up => "up",
                Trend::Maintain => "maintain",
                Trend::Down => "down",
                Trend::Deload => "deload",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionSuggestion {
    pub weight: Weight,
    pub reps: Reps,
    pub recommendation: String,
    pub trend: Trend,
    pub previous_best: Option<BestSet>,
    pub consecutive_failures: u32,
}

/// A session counts as failed when its average reps fall below this share
/// of the target.
const FAILURE_THRESHOLD: f32 = 0.9;
const DELOAD_AFTER_FAILURES: u32 = 3;
const DELOAD_FACTOR: f32 = 0.85;
const INCREASE_FACTOR: f32 = 1.025;
const DECREASE_FACTOR: f32 = 0.95;

/// Suggest weight and reps for the next session of an exercise.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn suggest(history: Option<&ExerciseHistory>, target_reps: Option<Reps>) -> ProgressionSuggestion {
    let Some(history) = history else {
        return ProgressionSuggestion {
            weight: Weight::default(),
            reps: target_reps.unwrap_or_default(),
            recommendation: "First time: start light and find your working weight".to_string(),
            trend: Trend::Maintain,
            previous_best: None,
            consecutive_failures: 0,
        };
    };

    let last_session = &history.sessions[0];
    let last_best = last_session.best_set;
    let target = target_reps.unwrap_or(last_best.reps);
    let target_reps_f = u32::from(target) as f32;

    let mut consecutive_failures = 0;
    for session in &history.sessions {
        if session.avg_reps() < target_reps_f * FAILURE_THRESHOLD {
            consecutive_failures += 1;
        } else {
            break;
        }
    }

    if consecutive_failures >= DELOAD_AFTER_FAILURES {
        let weight = Weight::rounded(f32::from(last_best.weight) * DELOAD_FACTOR);
        return ProgressionSuggestion {
            weight,
            reps: target,
            recommendation: format!(
                "Deload: reduce to {:.0} for {target} reps. You've missed targets \
                 {consecutive_failures} sessions in a row.",
                (f32::from(last_best.weight) * DELOAD_FACTOR).round(),
            ),
            trend: Trend::Deload,
            previous_best: Some(last_best),
            consecutive_failures,
        };
    }

    let actual_reps = last_session.avg_reps().round() as u32;
    let rir = last_session.avg_rir().round() as u32;

    let (weight, recommendation) = if actual_reps >= u32::from(target) && rir >= 2 {
        (
            Weight::rounded(f32::from(last_best.weight) * INCREASE_FACTOR),
            "Increase weight by 2.5%",
        )
    } else if actual_reps >= u32::from(target) {
        (last_best.weight, "Maintain current weight")
    } else {
        (
            Weight::rounded(f32::from(last_best.weight) * DECREASE_FACTOR),
            "Reduce weight by 5% or target fewer reps",
        )
    };

    let trend = if weight > last_best.weight {
        Trend::Up
    } else if weight < last_best.weight {
        Trend::Down
    } else {
        Trend::Maintain
    };

    ProgressionSuggestion {
        weight,
        reps: target,
        recommendation: recommendation.to_string(),
        trend,
        previous_best: Some(last_best),
        consecutive_failures,
    }
}

/// Post-workout feedback against the rep targets of a saved program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramTarget {
    pub exercise_id: ExerciseID,
    pub sets: u32,
    pub reps: RepsRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetFeedback {
    pub sets: u32,
    pub reps: RepsRange,
    pub recommendation: String,
}

/// Compare a finished workout against the matching program targets and
/// produce per-exercise feedback. Exercises without completed sets are
/// skipped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn program_updates(
    completed: &[LoggedExercise],
    targets: &[ProgramTarget],
) -> BTreeMap<ExerciseID, TargetFeedback> {
    let mut updates = BTreeMap::new();

    for target in targets {
        let Some(logged) = completed.iter().find(|e| e.exercise_id == target.exercise_id) else {
            continue;
        };
        let done_sets = logged.completed_sets();
        if done_sets.is_empty() {
            continue;
        }

        let avg_reps = done_sets
            .iter()
            .map(|s| u32::from(s.reps) as f32)
            .sum::<f32>()
            / done_sets.len() as f32;
        let avg_rir = done_sets
            .iter()
            .map(|s| f32::from(s.rir_or_default()))
            .sum::<f32>()
            / done_sets.len() as f32;

        let recommendation = if avg_reps >= u32::from(target.reps.max) as f32 && avg_rir >= 2.0 {
            format!(
                "Increase weight next session. Hit {:.0} reps with {:.0} RIR.",
                avg_reps.round(),
                avg_rir.round(),
            )
        } else if avg_reps < u32::from(target.reps.min) as f32 {
            format!(
                "Consider lowering weight. Only managed {:.0} reps (target: {}).",
                avg_reps.round(),
                target.reps,
            )
        } else {
            format!(
                "Good work! {:.0} reps is within target range.",
                avg_reps.round(),
            )
        };

        updates.insert(
            target.exercise_id.clone(),
            TargetFeedback {
                sets: target.sets,
                reps: target.reps,
                recommendation,
            },
        );
    }

    updates
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::{Days, NaiveDate};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{ExerciseSession, Rir, WorkoutSet};

    use super::*;

    fn session(days_ago: u64, sets: &[(f32, u32, Option<u8>)]) -> ExerciseSession {
        let sets = sets
            .iter()
            .enumerate()
            .map(|(i, (weight, reps, rir))| WorkoutSet {
                set_number: u32::try_from(i).unwrap() + 1,
                weight: Weight::new(*weight).unwrap(),
                reps: Reps::new(*reps).unwrap(),
                rir: rir.map(|r| Rir::new(r).unwrap()),
                completed: true,
                duration: None,
                rest_seconds: None,
            })
            .collect::<Vec<_>>();
        let best = sets
            .iter()
            .cloned()
            .reduce(|best, s| if s.volume() > best.volume() { s } else { best })
            .unwrap();
        ExerciseSession {
            date: NaiveDate::from_ymd_opt(2024, 6, 30)
                .unwrap()
                .checked_sub_days(Days::new(days_ago))
                .unwrap(),
            workout_id: (u128::from(days_ago) + 1).into(),
            total_volume: sets.iter().map(WorkoutSet::volume).sum(),
            best_set: BestSet {
                weight: best.weight,
                reps: best.reps,
            },
            sets,
        }
    }

    fn history(sessions: Vec<ExerciseSession>) -> ExerciseHistory {
        ExerciseHistory {
            exercise_id: "bench-press".into(),
            exercise_name: "Bench Press".to_string(),
            sessions,
        }
    }

    #[test]
    fn test_suggest_without_history() {
        let suggestion = suggest(None, Some(Reps::new(8).unwrap()));

        assert_eq!(suggestion.weight, Weight::default());
        assert_eq!(suggestion.reps, Reps::new(8).unwrap());
        assert_eq!(suggestion.trend, Trend::Maintain);
        assert_eq!(suggestion.previous_best, None);
        assert_eq!(suggestion.consecutive_failures, 0);
    }

    #[test]
    fn test_suggest_increase_on_target_reps_with_rir() {
        let history = history(vec![session(0, &[(100.0, 10, Some(3)), (100.0, 10, Some(2))])]);

        let suggestion = suggest(Some(&history), Some(Reps::new(10).unwrap()));

        assert_approx_eq!(f32::from(suggestion.weight), 102.5);
        assert_eq!(suggestion.trend, Trend::Up);
        assert_eq!(suggestion.reps, Reps::new(10).unwrap());
    }

    #[test]
    fn test_suggest_maintain_on_target_reps_without_rir() {
        // Average of 12 reps at RIR 1 with a 100 kg best set and a target of
        // 10 keeps the weight unchanged.
        let history = history(vec![session(0, &[(100.0, 10, Some(1)), (70.0, 14, Some(1))])]);

        let suggestion = suggest(Some(&history), Some(Reps::new(10).unwrap()));

        assert_approx_eq!(f32::from(suggestion.weight), 100.0);
        assert_eq!(suggestion.trend, Trend::Maintain);
        assert_eq!(
            suggestion.previous_best,
            Some(BestSet {
                weight: Weight::new(100.0).unwrap(),
                reps: Reps::new(10).unwrap(),
            })
        );
    }

    #[test]
    fn test_suggest_decrease_on_missed_reps() {
        let history = history(vec![session(0, &[(100.0, 8, Some(0))])]);

        let suggestion = suggest(Some(&history), Some(Reps::new(10).unwrap()));

        assert_approx_eq!(f32::from(suggestion.weight), 95.0);
        assert_eq!(suggestion.trend, Trend::Down);
        assert_eq!(suggestion.consecutive_failures, 1);
    }

    #[test]
    fn test_suggest_deload_after_three_consecutive_failures() {
        let history = history(vec![
            session(0, &[(100.0, 6, Some(0))]),
            session(2, &[(100.0, 7, Some(0))]),
            session(4, &[(100.0, 6, Some(1))]),
            session(6, &[(100.0, 10, Some(2))]),
        ]);

        let suggestion = suggest(Some(&history), Some(Reps::new(10).unwrap()));

        assert_eq!(suggestion.trend, Trend::Deload);
        assert_eq!(suggestion.consecutive_failures, 3);
        assert_approx_eq!(f32::from(suggestion.weight), 85.0);
        assert_eq!(suggestion.reps, Reps::new(10).unwrap());
    }

    #[test]
    fn test_suggest_failures_reset_by_successful_session() {
        // The second-to-last session hit the target, so only the most recent
        // failure counts.
        let history = history(vec![
            session(0, &[(100.0, 6, Some(0))]),
            session(2, &[(100.0, 10, Some(2))]),
            session(4, &[(100.0, 6, Some(0))]),
            session(6, &[(100.0, 6, Some(0))]),
        ]);

        let suggestion = suggest(Some(&history), Some(Reps::new(10).unwrap()));

        assert_eq!(suggestion.consecutive_failures, 1);
        assert_eq!(suggestion.trend, Trend::Down);
    }

    #[test]
    fn test_suggest_target_defaults_to_best_reps() {
        let history = history(vec![session(0, &[(100.0, 10, Some(2))])]);

        let suggestion = suggest(Some(&history), None);

        assert_eq!(suggestion.reps, Reps::new(10).unwrap());
        assert_eq!(suggestion.trend, Trend::Up);
    }

    #[rstest]
    #[case(Trend::Up, "up")]
    #[case(Trend::Maintain, "maintain")]
    #[case(Trend::Down, "down")]
    #[case(Trend::Deload, "deload")]
    fn test_trend_display(#[case] trend: Trend, #[case] expected: &str) {
        assert_eq!(trend.to_string(), expected);
    }

    #[test]
    fn test_program_updates() {
        let completed = vec![
            LoggedExercise {
                exercise_id: "bench-press".into(),
                exercise_name: "Bench Press".to_string(),
                sets: vec![
                    WorkoutSet {
                        set_number: 1,
                        weight: Weight::new(80.0).unwrap(),
                        reps: Reps::new(12).unwrap(),
                        rir: Some(Rir::new(3).unwrap()),
                        completed: true,
                        duration: None,
                        rest_seconds: None,
                    },
                    WorkoutSet {
                        set_number: 2,
                        weight: Weight::new(80.0).unwrap(),
                        reps: Reps::new(12).unwrap(),
                        rir: Some(Rir::new(2).unwrap()),
                        completed: true,
                        duration: None,
                        rest_seconds: None,
                    },
                ],
            },
            LoggedExercise {
                exercise_id: "db-fly".into(),
                exercise_name: "Dumbbell Fly".to_string(),
                sets: vec![WorkoutSet {
                    set_number: 1,
                    weight: Weight::new(12.5).unwrap(),
                    reps: Reps::new(6).unwrap(),
                    rir: None,
                    completed: true,
                    duration: None,
                    rest_seconds: None,
                }],
            },
        ];
        let targets = vec![
            ProgramTarget {
                exercise_id: "bench-press".into(),
                sets: 4,
                reps: RepsRange::new(Reps::new(8).unwrap(), Reps::new(12).unwrap()),
            },
            ProgramTarget {
                exercise_id: "db-fly".into(),
                sets: 3,
                reps: RepsRange::new(Reps::new(10).unwrap(), Reps::new(15).unwrap()),
            },
            ProgramTarget {
                exercise_id: "deadlift".into(),
                sets: 5,
                reps: RepsRange::new(Reps::new(3).unwrap(), Reps::new(5).unwrap()),
            },
        ];

        let updates = program_updates(&completed, &targets);

        assert_eq!(updates.len(), 2);
        assert!(
            updates[&ExerciseID::from("bench-press")]
                .recommendation
                .starts_with("Increase weight")
        );
        assert!(
            updates[&ExerciseID::from("db-fly")]
                .recommendation
                .starts_with("Consider lowering weight")
        );
        assert!(!updates.contains_key(&ExerciseID::from("deadlift")));
    }
}
