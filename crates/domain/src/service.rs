use std::collections::BTreeMap;

use log::{debug, error, warn};

use crate::{
    AdaptationRecommendation, Catalog, CatalogRepository, DeloadRecommendation, ExerciseHistory,
    ExerciseID, GeneratedProgram, GenerationError, ProgramWizardAnswers, ProgressionSuggestion,
    ReadError, Reps, RepsRange, Workout, WorkoutRepository, adaptation, deload, history,
    program, progression,
};

/// Number of recent workouts scanned when building exercise histories.
pub const HISTORY_SCAN_LIMIT: usize = 50;
/// Number of recent workouts considered for deload detection.
pub const DELOAD_SCAN_LIMIT: usize = 20;

/// Façade wiring the analysis functions to the data collaborators.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            match err {
                ReadError::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            }
        }
        result
    }};
}

impl<R: WorkoutRepository> Service<R> {
    async fn recent_workouts(&self, limit: usize) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(limit), "read", "workouts")
    }

    pub async fn exercise_history(
        &self,
        exercise_id: &ExerciseID,
    ) -> Result<Option<ExerciseHistory>, ReadError> {
        let workouts = self.recent_workouts(HISTORY_SCAN_LIMIT).await?;
        Ok(history::exercise_history(&workouts, exercise_id))
    }

    pub async fn multi_exercise_history(
        &self,
        exercise_ids: &[ExerciseID],
    ) -> Result<BTreeMap<ExerciseID, ExerciseHistory>, ReadError> {
        let workouts = self.recent_workouts(HISTORY_SCAN_LIMIT).await?;
        Ok(history::multi_exercise_history(&workouts, exercise_ids))
    }

    pub async fn progression_suggestion(
        &self,
        exercise_id: &ExerciseID,
        target_reps: Option<Reps>,
    ) -> Result<ProgressionSuggestion, ReadError> {
        let history = self.exercise_history(exercise_id).await?;
        Ok(progression::suggest(history.as_ref(), target_reps))
    }

    pub async fn deload_check(&self) -> Result<DeloadRecommendation, ReadError> {
        let workouts = self.recent_workouts(DELOAD_SCAN_LIMIT).await?;
        Ok(deload::check_deload_needed(&workouts))
    }
}

impl<R: CatalogRepository> Service<R> {
    /// The exercise catalog, degrading to the built-in one when the
    /// collaborator fails or has nothing to offer.
    pub async fn catalog(&self) -> Catalog {
        match log_on_error!(self.repository.read_catalog(), "read", "catalog") {
            Ok(exercises) if !exercises.is_empty() => Catalog::from_exercises(exercises),
            Ok(_) | Err(_) => {
                warn!("falling back to built-in exercise catalog");
                Catalog::builtin()
            }
        }
    }
}

impl<R: WorkoutRepository + CatalogRepository> Service<R> {
    /// Adaptation advice for one exercise, delegating to the bodyweight
    /// policy for equipment-free movements. `None` for exercises unknown to
    /// the catalog.
    pub async fn adaptation(
        &self,
        exercise_id: &ExerciseID,
        current_sets: u32,
        current_reps: RepsRange,
        current_rest_seconds: u32,
    ) -> Result<Option<AdaptationRecommendation>, ReadError> {
        let catalog = self.catalog().await;
        let Some(exercise) = catalog.get(exercise_id) else {
            return Ok(None);
        };

        let recommendation = match self.exercise_history(exercise_id).await? {
            None => AdaptationRecommendation::insufficient_history(exercise),
            Some(history) => {
                if exercise.is_bodyweight() {
                    adaptation::analyze_bodyweight_adaptation(
                        &catalog,
                        exercise,
                        &history,
                        current_sets,
                        current_reps,
                    )
                } else {
                    adaptation::analyze_exercise_adaptation(
                        exercise,
                        &history,
                        current_sets,
                        current_reps,
                        current_rest_seconds,
                    )
                }
            }
        };
        Ok(Some(recommendation))
    }

    pub async fn generate_program(
        &self,
        answers: &ProgramWizardAnswers,
    ) -> Result<GeneratedProgram, GenerationError> {
        let catalog = self.catalog().await;
        program::generate_program(&catalog, answers)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::{Days, NaiveDate};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use crate::{
        AdaptationType, Exercise, LoggedExercise, Rir, StorageError, Trend, Weight, WorkoutSet,
        program::{Goal, SessionLength},
        Difficulty, EquipmentPreset,
    };

    use super::*;

    struct MockRepository {
        workouts: Result<Vec<Workout>, ()>,
        catalog: Result<Vec<Exercise>, ()>,
        requested_limit: RefCell<Option<usize>>,
    }

    impl MockRepository {
        fn new(workouts: Vec<Workout>) -> Self {
            Self {
                workouts: Ok(workouts),
                catalog: Ok(Catalog::builtin().exercises().cloned().collect()),
                requested_limit: RefCell::new(None),
            }
        }
    }

    impl WorkoutRepository for MockRepository {
        async fn read_workouts(&self, limit: usize) -> Result<Vec<Workout>, ReadError> {
            *self.requested_limit.borrow_mut() = Some(limit);
            match &self.workouts {
                Ok(workouts) => Ok(workouts.iter().take(limit).cloned().collect()),
                Err(()) => Err(StorageError::NoConnection.into()),
            }
        }
    }

    impl CatalogRepository for MockRepository {
        async fn read_catalog(&self) -> Result<Vec<Exercise>, ReadError> {
            match &self.catalog {
                Ok(exercises) => Ok(exercises.clone()),
                Err(()) => Err(StorageError::NoConnection.into()),
            }
        }
    }

    fn bodyweight_workouts(reps: u32, sessions: u64) -> Vec<Workout> {
        (0..sessions)
            .map(|i| Workout {
                id: (u128::from(i) + 1).into(),
                date: NaiveDate::from_ymd_opt(2024, 6, 30)
                    .unwrap()
                    .checked_sub_days(Days::new(i * 2))
                    .unwrap(),
                name: String::new(),
                exercises: vec![LoggedExercise {
                    exercise_id: "push-ups".into(),
                    exercise_name: "Push-ups".to_string(),
                    sets: vec![WorkoutSet {
                        set_number: 1,
                        weight: Weight::default(),
                        reps: Reps::new(reps).unwrap(),
                        rir: Some(Rir::new(3).unwrap()),
                        completed: true,
                        duration: None,
                        rest_seconds: None,
                    }],
                }],
            })
            .collect()
    }

    fn answers() -> ProgramWizardAnswers {
        ProgramWizardAnswers {
            goal: Goal::General,
            experience: Difficulty::Beginner,
            days_per_week: 3,
            session_length: SessionLength::Short,
            equipment: EquipmentPreset::HomeBasic.equipment().to_vec(),
            focus_muscles: vec![],
            split: None,
        }
    }

    #[test]
    fn test_exercise_history_uses_scan_limit() {
        let repository = MockRepository::new(bodyweight_workouts(10, 3));
        let service = Service::new(repository);

        let history = block_on(service.exercise_history(&"push-ups".into()))
            .unwrap()
            .unwrap();

        assert_eq!(history.sessions.len(), 3);
        assert_eq!(
            *service.repository.requested_limit.borrow(),
            Some(HISTORY_SCAN_LIMIT)
        );
    }

    #[test]
    fn test_progression_suggestion_without_history() {
        let service = Service::new(MockRepository::new(vec![]));

        let suggestion =
            block_on(service.progression_suggestion(&"bench-press".into(), None)).unwrap();

        assert_eq!(suggestion.trend, Trend::Maintain);
        assert_eq!(suggestion.previous_best, None);
    }

    #[test]
    fn test_deload_check_uses_scan_limit() {
        let service = Service::new(MockRepository::new(vec![]));

        let recommendation = block_on(service.deload_check()).unwrap();

        assert!(!recommendation.needed);
        assert_eq!(
            *service.repository.requested_limit.borrow(),
            Some(DELOAD_SCAN_LIMIT)
        );
    }

    #[test]
    fn test_read_failure_propagates() {
        let mut repository = MockRepository::new(vec![]);
        repository.workouts = Err(());
        let service = Service::new(repository);

        assert!(matches!(
            block_on(service.deload_check()),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }

    #[test]
    fn test_adaptation_delegates_to_bodyweight_policy() {
        let service = Service::new(MockRepository::new(bodyweight_workouts(15, 5)));

        let recommendation = block_on(service.adaptation(
            &"push-ups".into(),
            3,
            RepsRange::new(Reps::new(8).unwrap(), Reps::new(12).unwrap()),
            60,
        ))
        .unwrap()
        .unwrap();

        assert_eq!(
            recommendation.adaptation_type,
            AdaptationType::ProgressVariation
        );
    }

    #[test]
    fn test_adaptation_without_history_is_maintain() {
        let service = Service::new(MockRepository::new(vec![]));

        let recommendation = block_on(service.adaptation(
            &"bench-press".into(),
            3,
            RepsRange::new(Reps::new(8).unwrap(), Reps::new(12).unwrap()),
            90,
        ))
        .unwrap()
        .unwrap();

        assert_eq!(recommendation.adaptation_type, AdaptationType::Maintain);
    }

    #[test]
    fn test_adaptation_unknown_exercise_is_none() {
        let service = Service::new(MockRepository::new(vec![]));

        let recommendation = block_on(service.adaptation(
            &"unknown".into(),
            3,
            RepsRange::new(Reps::new(8).unwrap(), Reps::new(12).unwrap()),
            90,
        ))
        .unwrap();

        assert_eq!(recommendation, None);
    }

    #[test]
    fn test_generate_program_falls_back_to_builtin_catalog() {
        let mut repository = MockRepository::new(vec![]);
        repository.catalog = Err(());
        let service = Service::new(repository);

        let program = block_on(service.generate_program(&answers())).unwrap();

        assert_eq!(program.days.len(), 3);
    }

    #[test]
    fn test_generate_program_empty_pool_error() {
        let mut answers = answers();
        answers.equipment = vec![];
        let service = Service::new(MockRepository::new(vec![]));

        assert_eq!(
            block_on(service.generate_program(&answers)),
            Err(GenerationError::EmptyPool)
        );
    }
}
