use std::fmt;

use crate::{Catalog, Exercise, ExerciseHistory, ExerciseID, ExerciseSession, RepsRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptationType {
    IncreaseVolume,
    IncreaseIntensity,
    DecreaseVolume,
    SwapExercise,
    Deload,
    Maintain,
    ProgressVariation,
    RegressVariation,
}

impl fmt::Display for AdaptationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AdaptationType::IncreaseVolume => "increase-volume",
                AdaptationType::IncreaseIntensity => "increase-intensity",
                AdaptationType::DecreaseVolume => "decrease-volume",
                AdaptationType::SwapExercise => "swap-exercise",
                AdaptationType::Deload => "deload",
                AdaptationType::Maintain => "maintain",
                AdaptationType::ProgressVariation => "progress-variation",
                AdaptationType::RegressVariation => "regress-variation",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationDifficulty {
    Easier,
    Harder,
}

impl fmt::Display for VariationDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VariationDifficulty::Easier => "easier",
                VariationDifficulty::Harder => "harder",
            }
        )
    }
}

/// A concrete variation the user is advised to move to.
#[derive(Debug, Clone, PartialEq)]
pub struct Variation {
    pub id: ExerciseID,
    pub name: String,
    pub difficulty: VariationDifficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdaptationRecommendation {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub adaptation_type: AdaptationType,
    pub reason: String,
    pub suggested_sets: Option<u32>,
    pub suggested_reps_range: Option<RepsRange>,
    pub suggested_rest_seconds: Option<u32>,
    pub progression_variation: Option<Variation>,
    pub alternative_exercises: Vec<ExerciseID>,
}

impl AdaptationRecommendation {
    fn maintain(exercise: &Exercise, reason: &str) -> Self {
        Self {
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            adaptation_type: AdaptationType::Maintain,
            reason: reason.to_string(),
            suggested_sets: None,
            suggested_reps_range: None,
            suggested_rest_seconds: None,
            progression_variation: None,
            alternative_exercises: vec![],
        }
    }

    /// Placeholder result for exercises without any logged history.
    #[must_use]
    pub fn insufficient_history(exercise: &Exercise) -> Self {
        Self::maintain(exercise, "Not enough training data yet. Keep logging sessions.")
    }
}

const MIN_SESSIONS: usize = 3;
const RECENT_WINDOW: usize = 5;
/// Relative change below which two window averages count as a plateau.
const PLATEAU_THRESHOLD: f32 = 0.05;
const DECLINE_THRESHOLD: f32 = 0.85;
const SWAP_MIN_SESSIONS: usize = 8;
const REST_STEP_SECONDS: u32 = 15;
const MIN_REST_SECONDS: u32 = 30;
const EXCEED_FACTOR: f32 = 1.2;
const FAILING_FACTOR: f32 = 0.7;

fn windows(history: &ExerciseHistory) -> (&[ExerciseSession], &[ExerciseSession]) {
    let recent_end = history.sessions.len().min(RECENT_WINDOW);
    let older_end = history.sessions.len().min(2 * RECENT_WINDOW);
    (
        &history.sessions[..recent_end],
        &history.sessions[recent_end.min(older_end)..older_end],
    )
}

#[allow(clippy::cast_precision_loss)]
fn avg_volume(sessions: &[ExerciseSession]) -> f32 {
    if sessions.is_empty() {
        return 0.0;
    }
    sessions.iter().map(|s| s.total_volume).sum::<f32>() / sessions.len() as f32
}

#[allow(clippy::cast_precision_loss)]
fn avg_reps(sessions: &[ExerciseSession]) -> f32 {
    if sessions.is_empty() {
        return 0.0;
    }
    sessions.iter().map(ExerciseSession::avg_reps).sum::<f32>() / sessions.len() as f32
}

#[allow(clippy::cast_precision_loss)]
fn avg_rir(sessions: &[ExerciseSession]) -> f32 {
    if sessions.is_empty() {
        return 0.0;
    }
    sessions.iter().map(ExerciseSession::avg_rir).sum::<f32>() / sessions.len() as f32
}

/// Analyze a weighted exercise and decide whether its volume, intensity or
/// selection should change.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_exercise_adaptation(
    exercise: &Exercise,
    history: &ExerciseHistory,
    current_sets: u32,
    current_reps: RepsRange,
    current_rest_seconds: u32,
) -> AdaptationRecommendation {
    if history.sessions.len() < MIN_SESSIONS {
        return AdaptationRecommendation::insufficient_history(exercise);
    }

    let (recent, older) = windows(history);
    let recent_avg_volume = avg_volume(recent);
    let older_avg_volume = avg_volume(older);
    let recent_avg_rir = avg_rir(recent);
    let recent_avg_reps = avg_reps(recent);

    let volume_stagnant = older_avg_volume > 0.0
        && ((recent_avg_volume - older_avg_volume) / older_avg_volume).abs() < PLATEAU_THRESHOLD;
    let performance_decline =
        older_avg_volume > 0.0 && recent_avg_volume < older_avg_volume * DECLINE_THRESHOLD;

    let base = AdaptationRecommendation::maintain(exercise, "");

    if performance_decline {
        return AdaptationRecommendation {
            adaptation_type: AdaptationType::Deload,
            reason: format!(
                "Volume is down {:.0}% compared to earlier sessions. Reduce to \
                 {} sets and take full rests to recover.",
                ((1.0 - recent_avg_volume / older_avg_volume) * 100.0).round(),
                current_sets.saturating_sub(1).max(1),
            ),
            suggested_sets: Some(current_sets.saturating_sub(1).max(1)),
            suggested_rest_seconds: Some(120),
            ..base
        };
    }

    if volume_stagnant && recent_avg_rir >= 3.0 {
        let rest = current_rest_seconds
            .saturating_sub(REST_STEP_SECONDS)
            .max(MIN_REST_SECONDS);
        return AdaptationRecommendation {
            adaptation_type: AdaptationType::IncreaseIntensity,
            reason: format!(
                "Volume has plateaued with {recent_avg_rir:.0} reps in reserve. \
                 Shorten rests to {rest} s to raise the stimulus.",
            ),
            suggested_rest_seconds: Some(rest),
            ..base
        };
    }

    if volume_stagnant && recent_avg_rir < 1.0 {
        if history.sessions.len() >= SWAP_MIN_SESSIONS {
            return AdaptationRecommendation {
                adaptation_type: AdaptationType::SwapExercise,
                reason: format!(
                    "Plateaued near failure for {} sessions. Try a different movement \
                     for a new stimulus.",
                    history.sessions.len(),
                ),
                alternative_exercises: exercise.progression.alternatives.clone(),
                ..base
            };
        }
        return AdaptationRecommendation {
            adaptation_type: AdaptationType::IncreaseVolume,
            reason: format!(
                "Volume has plateaued. Add a set and work in the {} rep range.",
                current_reps.shifted(2),
            ),
            suggested_sets: Some(current_sets + 1),
            suggested_reps_range: Some(current_reps.shifted(2)),
            ..base
        };
    }

    if recent_avg_reps >= u32::from(current_reps.max) as f32 && recent_avg_rir >= 2.0 {
        return AdaptationRecommendation {
            adaptation_type: AdaptationType::IncreaseIntensity,
            reason: format!(
                "Hitting the top of the rep range with {recent_avg_rir:.0} reps in \
                 reserve. Ready for more weight.",
            ),
            ..base
        };
    }

    AdaptationRecommendation::maintain(exercise, "Progress looks steady. Stay the course.")
}

/// Analyze a bodyweight exercise against its variation graph and decide
/// whether to progress, regress or swap the variation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_bodyweight_adaptation(
    catalog: &Catalog,
    exercise: &Exercise,
    history: &ExerciseHistory,
    current_sets: u32,
    current_reps: RepsRange,
) -> AdaptationRecommendation {
    if !exercise.is_bodyweight() {
        return AdaptationRecommendation::maintain(exercise, "Not a bodyweight exercise");
    }

    if history.sessions.len() < MIN_SESSIONS {
        return AdaptationRecommendation::maintain(
            exercise,
            "Building baseline - keep current variation",
        );
    }

    let (recent, older) = windows(history);
    let recent_avg_reps = avg_reps(recent);
    let older_avg_reps = if older.is_empty() {
        recent_avg_reps
    } else {
        avg_reps(older)
    };
    let recent_avg_rir = avg_rir(recent);

    let edges = &exercise.progression;
    let reps_min = u32::from(current_reps.min) as f32;
    let reps_max = u32::from(current_reps.max) as f32;

    let reps_stagnant = older_avg_reps > 0.0
        && ((recent_avg_reps - older_avg_reps) / older_avg_reps).abs() < PLATEAU_THRESHOLD;
    let exceeds_max_reps = recent_avg_reps >= reps_max * EXCEED_FACTOR;
    let high_reps_low_rir = recent_avg_reps >= reps_max && recent_avg_rir >= 3.0;
    let failing_min_reps = recent_avg_reps < reps_min * FAILING_FACTOR;
    let low_reps_no_rir = recent_avg_reps < reps_min && recent_avg_rir < 1.0;

    let base = AdaptationRecommendation::maintain(exercise, "");

    if (failing_min_reps || low_reps_no_rir)
        && let Some(easier) = &edges.easier
    {
        return AdaptationRecommendation {
            adaptation_type: AdaptationType::RegressVariation,
            reason: format!(
                "Struggling with the current variation (avg {:.0} reps). \
                 Try an easier variation to build strength.",
                recent_avg_reps.round(),
            ),
            progression_variation: Some(Variation {
                id: easier.clone(),
                name: variation_name(catalog, easier),
                difficulty: VariationDifficulty::Easier,
            }),
            ..base
        };
    }

    if (exceeds_max_reps || high_reps_low_rir)
        && let Some(harder) = &edges.harder
    {
        return AdaptationRecommendation {
            adaptation_type: AdaptationType::ProgressVariation,
            reason: format!(
                "Exceeding {:.0} reps with {:.0} RIR. Ready for a harder variation!",
                recent_avg_reps.round(),
                recent_avg_rir.round(),
            ),
            progression_variation: Some(Variation {
                id: harder.clone(),
                name: variation_name(catalog, harder),
                difficulty: VariationDifficulty::Harder,
            }),
            ..base
        };
    }

    if reps_stagnant && recent_avg_rir < 2.0 {
        if let Some(alternative) = edges.alternatives.first() {
            return AdaptationRecommendation {
                adaptation_type: AdaptationType::SwapExercise,
                reason: format!(
                    "Plateaued at {:.0} reps for {} sessions. Try a variation for a \
                     different stimulus.",
                    recent_avg_reps.round(),
                    history.sessions.len(),
                ),
                progression_variation: Some(Variation {
                    id: alternative.clone(),
                    name: variation_name(catalog, alternative),
                    difficulty: VariationDifficulty::Harder,
                }),
                alternative_exercises: edges.alternatives.clone(),
                ..base
            };
        }

        return AdaptationRecommendation {
            adaptation_type: AdaptationType::IncreaseVolume,
            reason: format!(
                "Plateaued at {:.0} reps. Add a set or increase time under tension.",
                recent_avg_reps.round(),
            ),
            suggested_sets: Some(current_sets + 1),
            ..base
        };
    }

    if recent_avg_reps > older_avg_reps && recent_avg_reps < reps_max {
        return AdaptationRecommendation::maintain(
            exercise,
            &format!(
                "Progressing well! Keep pushing toward {} reps before moving to a \
                 harder variation.",
                current_reps.max,
            ),
        );
    }

    AdaptationRecommendation::maintain(
        exercise,
        "Continue current training. Focus on form and controlled tempo.",
    )
}

/// Variation names for display. `None` when the exercise is unknown or has
/// no variation edges.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionPath {
    pub easier: Option<String>,
    pub harder: Option<String>,
    pub alternatives: Vec<String>,
}

#[must_use]
pub fn progression_path(catalog: &Catalog, exercise_id: &ExerciseID) -> Option<ProgressionPath> {
    let exercise = catalog.get(exercise_id)?;
    let edges = &exercise.progression;
    if edges.easier.is_none() && edges.harder.is_none() && edges.alternatives.is_empty() {
        return None;
    }

    Some(ProgressionPath {
        easier: edges.easier.as_ref().map(|id| variation_name(catalog, id)),
        harder: edges.harder.as_ref().map(|id| variation_name(catalog, id)),
        alternatives: edges
            .alternatives
            .iter()
            .map(|id| variation_name(catalog, id))
            .collect(),
    })
}

fn variation_name(catalog: &Catalog, id: &ExerciseID) -> String {
    catalog
        .get(id)
        .map_or_else(|| id.display_name(), |e| e.name.clone())
}
