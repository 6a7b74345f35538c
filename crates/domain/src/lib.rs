#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod adaptation;
pub mod catalog;
pub mod deload;
pub mod error;
pub mod exercise;
pub mod history;
pub mod program;
pub mod progression;
pub mod service;
pub mod workout;

pub use adaptation::{
    AdaptationRecommendation, AdaptationType, ProgressionPath, Variation, VariationDifficulty,
    analyze_bodyweight_adaptation, analyze_exercise_adaptation, progression_path,
};
pub use catalog::{Catalog, EquipmentPreset};
pub use deload::{DeloadRecommendation, check_deload_needed};
pub use error::{GenerationError, ReadError, StorageError};
pub use exercise::{
    Category, CatalogRepository, Difficulty, Equipment, Exercise, ExerciseID, MuscleGroup,
    ProgressionEdges, Property,
};
pub use history::{
    BestSet, ExerciseHistory, ExerciseSession, MAX_SESSIONS, exercise_history,
    multi_exercise_history,
};
pub use program::{
    GeneratedDay, GeneratedExercise, GeneratedProgram, Goal, ProgramWizardAnswers,
    ProgressionScheme, SessionLength, Split, generate_program, suggest_split,
};
pub use progression::{
    ProgramTarget, ProgressionSuggestion, TargetFeedback, Trend, program_updates, suggest,
};
pub use service::{DELOAD_SCAN_LIMIT, HISTORY_SCAN_LIMIT, Service};
pub use workout::{
    LoggedExercise, Reps, RepsError, RepsRange, Rir, RirError, Weight, WeightError, Workout,
    WorkoutID, WorkoutRepository, WorkoutSet,
};
