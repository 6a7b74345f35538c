use std::{fmt, ops::Mul};

use chrono::NaiveDate;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{ExerciseID, ReadError};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    /// Up to `limit` workouts of the current user, most recent first.
    async fn read_workouts(&self, limit: usize) -> Result<Vec<Workout>, ReadError>;
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Constructor for derived rep counts, clamped into the valid range.
    #[must_use]
    pub fn saturating(value: u32) -> Self {
        Self(value.min(999))
    }
}

impl Mul<Reps> for Weight {
    type Output = f32;

    #[allow(clippy::cast_precision_loss)]
    fn mul(self, rhs: Reps) -> Self::Output {
        self.0 * rhs.0 as f32
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }

    /// Constructor for computed weights (progression multiples), rounded to
    /// 0.1 kg and clamped into the valid range.
    #[must_use]
    pub fn rounded(value: f32) -> Self {
        Self((value.clamp(0.0, 999.9) * 10.0).round() / 10.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
}

/// Reps in reserve. 0 means the set was taken to failure.
#[derive(Deref, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rir(u8);

impl Rir {
    /// Assumed for sets logged without an RIR estimate.
    pub const DEFAULT: Rir = Rir(1);

    pub fn new(value: u8) -> Result<Self, RirError> {
        if value > 10 {
            return Err(RirError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl From<Rir> for f32 {
    fn from(value: Rir) -> Self {
        f32::from(value.0)
    }
}

impl fmt::Display for Rir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RirError {
    #[error("RIR must be in the range 0 to 10")]
    OutOfRange,
}

/// Prescribed rep window for an exercise slot in a program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepsRange {
    pub min: Reps,
    pub max: Reps,
}

impl RepsRange {
    #[must_use]
    pub fn new(min: Reps, max: Reps) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn shifted(self, by: u32) -> Self {
        Self {
            min: Reps::saturating(u32::from(self.min) + by),
            max: Reps::saturating(u32::from(self.max) + by),
        }
    }
}

impl fmt::Display for RepsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub set_number: u32,
    pub weight: Weight,
    pub reps: Reps,
    pub rir: Option<Rir>,
    pub completed: bool,
    pub duration: Option<u32>,
    pub rest_seconds: Option<u32>,
}

impl WorkoutSet {
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.weight * self.reps
    }

    #[must_use]
    pub fn rir_or_default(&self) -> Rir {
        self.rir.unwrap_or(Rir::DEFAULT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub sets: Vec<WorkoutSet>,
}

impl LoggedExercise {
    #[must_use]
    pub fn completed_sets(&self) -> Vec<WorkoutSet> {
        self.sets.iter().filter(|s| s.completed).cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub name: String,
    pub exercises: Vec<LoggedExercise>,
}

impl Workout {
    /// Total mechanical work of all completed sets.
    #[must_use]
    pub fn completed_volume(&self) -> f32 {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.completed)
            .map(WorkoutSet::volume)
            .sum()
    }

    /// Share of logged sets that were completed. A workout without any sets
    /// counts as fully completed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_rate(&self) -> f32 {
        let total = self.exercises.iter().map(|e| e.sets.len()).sum::<usize>();
        if total == 0 {
            return 1.0;
        }
        let completed = self
            .exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.completed)
            .count();
        completed as f32 / total as f32
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn set(weight: f32, reps: u32, rir: Option<u8>, completed: bool) -> WorkoutSet {
        WorkoutSet {
            set_number: 1,
            weight: Weight::new(weight).unwrap(),
            reps: Reps::new(reps).unwrap(),
            rir: rir.map(|r| Rir::new(r).unwrap()),
            completed,
            duration: None,
            rest_seconds: None,
        }
    }

    #[rstest]
    #[case(0, Ok(Reps(0)))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] input: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(input), expected);
    }

    #[rstest]
    #[case(12, Reps(12))]
    #[case(1200, Reps(999))]
    fn test_reps_saturating(#[case] input: u32, #[case] expected: Reps) {
        assert_eq!(Reps::saturating(input), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(999.9, Ok(Weight(999.9)))]
    #[case(1000.0, Err(WeightError::OutOfRange))]
    #[case(1.23, Err(WeightError::InvalidResolution))]
    fn test_weight_new(#[case] input: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(input), expected);
    }

    #[rstest]
    #[case(102.525, 102.5)]
    #[case(34.1325, 34.1)]
    #[case(-3.0, 0.0)]
    #[case(2000.0, 999.9)]
    fn test_weight_rounded(#[case] input: f32, #[case] expected: f32) {
        assert_approx_eq!(f32::from(Weight::rounded(input)), expected);
    }

    #[test]
    fn test_weight_mul_reps() {
        assert_approx_eq!(Weight::new(30.0).unwrap() * Reps::new(10).unwrap(), 300.0);
    }

    #[rstest]
    #[case(0, Ok(Rir(0)))]
    #[case(10, Ok(Rir(10)))]
    #[case(11, Err(RirError::OutOfRange))]
    fn test_rir_new(#[case] input: u8, #[case] expected: Result<Rir, RirError>) {
        assert_eq!(Rir::new(input), expected);
    }

    #[test]
    fn test_reps_range_display() {
        let range = RepsRange::new(Reps::new(8).unwrap(), Reps::new(12).unwrap());
        assert_eq!(range.to_string(), "8-12");
        assert_eq!(
            range.shifted(2),
            RepsRange::new(Reps::new(10).unwrap(), Reps::new(14).unwrap())
        );
    }

    #[test]
    fn test_workout_set_rir_or_default() {
        assert_eq!(set(20.0, 8, Some(3), true).rir_or_default(), Rir(3));
        assert_eq!(set(20.0, 8, None, true).rir_or_default(), Rir::DEFAULT);
    }

    #[test]
    fn test_workout_completed_volume_and_completion_rate() {
        let workout = Workout {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            name: "Push A".to_string(),
            exercises: vec![
                LoggedExercise {
                    exercise_id: "bench-press".into(),
                    exercise_name: "Bench Press".to_string(),
                    sets: vec![set(100.0, 5, Some(2), true), set(100.0, 5, Some(1), false)],
                },
                LoggedExercise {
                    exercise_id: "db-fly".into(),
                    exercise_name: "Dumbbell Fly".to_string(),
                    sets: vec![set(12.5, 12, None, true)],
                },
            ],
        };

        assert_approx_eq!(workout.completed_volume(), 650.0);
        assert_approx_eq!(workout.completion_rate(), 2.0 / 3.0);
    }

    #[test]
    fn test_workout_without_sets_counts_as_completed() {
        let workout = Workout {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            name: "Rest".to_string(),
            exercises: vec![],
        };

        assert_approx_eq!(workout.completion_rate(), 1.0);
    }

    #[test]
    fn test_workout_id_nil() {
        assert!(WorkoutID::nil().is_nil());
        assert_eq!(WorkoutID::nil(), WorkoutID::default());
    }
}
