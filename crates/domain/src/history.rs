use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{ExerciseID, Reps, Weight, Workout, WorkoutID, WorkoutSet};

/// Number of sessions kept per exercise when reducing workout history.
pub const MAX_SESSIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestSet {
    pub weight: Weight,
    pub reps: Reps,
}

impl BestSet {
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.weight * self.reps
    }
}

/// All completed sets of one exercise within one workout.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSession {
    pub date: NaiveDate,
    pub workout_id: WorkoutID,
    pub sets: Vec<WorkoutSet>,
    pub best_set: BestSet,
    pub total_volume: f32,
}

impl ExerciseSession {
    fn from_completed_sets(date: NaiveDate, workout_id: WorkoutID, sets: Vec<WorkoutSet>) -> Option<Self> {
        let best = sets
            .iter()
            .reduce(|best, s| if s.volume() > best.volume() { s } else { best })?;
        let best_set = BestSet {
            weight: best.weight,
            reps: best.reps,
        };
        let total_volume = sets.iter().map(WorkoutSet::volume).sum();
        Some(Self {
            date,
            workout_id,
            sets,
            best_set,
            total_volume,
        })
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_reps(&self) -> f32 {
        self.sets
            .iter()
            .map(|s| u32::from(s.reps) as f32)
            .sum::<f32>()
            / self.sets.len() as f32
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_rir(&self) -> f32 {
        self.sets
            .iter()
            .map(|s| f32::from(s.rir_or_default()))
            .sum::<f32>()
            / self.sets.len() as f32
    }
}

/// Per-exercise session history, most recent session first.
///
/// An exercise without any workout containing at least one completed set has
/// no history at all, it is never represented by an empty session list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistory {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub sessions: Vec<ExerciseSession>,
}

#[must_use]
pub fn exercise_history(workouts: &[Workout], exercise_id: &ExerciseID) -> Option<ExerciseHistory> {
    let mut result = multi_exercise_history(workouts, std::slice::from_ref(exercise_id));
    result.remove(exercise_id)
}

/// Reduce raw workouts into per-exercise histories for all requested
/// exercises in a single scan. Exercises without qualifying sessions are
/// absent from the result.
#[must_use]
pub fn multi_exercise_history(
    workouts: &[Workout],
    exercise_ids: &[ExerciseID],
) -> BTreeMap<ExerciseID, ExerciseHistory> {
    let mut result: BTreeMap<ExerciseID, ExerciseHistory> = BTreeMap::new();

    for workout in workouts {
        for logged in &workout.exercises {
            if !exercise_ids.contains(&logged.exercise_id) {
                continue;
            }
            if result
                .get(&logged.exercise_id)
                .is_some_and(|h| h.sessions.len() >= MAX_SESSIONS)
            {
                continue;
            }

            let Some(session) = ExerciseSession::from_completed_sets(
                workout.date,
                workout.id,
                logged.completed_sets(),
            ) else {
                continue;
            };

            result
                .entry(logged.exercise_id.clone())
                .or_insert_with(|| ExerciseHistory {
                    exercise_id: logged.exercise_id.clone(),
                    exercise_name: if logged.exercise_name.is_empty() {
                        logged.exercise_id.display_name()
                    } else {
                        logged.exercise_name.clone()
                    },
                    sessions: vec![],
                })
                .sessions
                .push(session);
        }
    }

    result
}
