use crate::Workout;

/// Whether a recovery week is warranted, and how much to back off.
#[derive(Debug, Clone, PartialEq)]
pub struct DeloadRecommendation {
    pub needed: bool,
    pub reason: String,
    pub suggested_weight_multiplier: f32,
    pub suggested_volume_multiplier: f32,
}

impl DeloadRecommendation {
    fn not_needed(reason: &str) -> Self {
        Self {
            needed: false,
            reason: reason.to_string(),
            suggested_weight_multiplier: 1.0,
            suggested_volume_multiplier: 1.0,
        }
    }
}

const MIN_SESSIONS: usize = 6;
const RECENT_WINDOW: usize = 5;
/// Recent volume below this share of the older average counts as declining.
const VOLUME_DECLINE_THRESHOLD: f32 = 0.85;
const LOW_COMPLETION_THRESHOLD: f32 = 0.75;
const STREAK_MIN_DAYS: i64 = 28;
const STREAK_MIN_SESSIONS: usize = 12;
const PROACTIVE_MIN_SESSIONS: usize = 16;

/// Decide whether the user should take a deload week, based on their most
/// recent workouts (newest first, at most 20 are considered meaningful).
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn check_deload_needed(workouts: &[Workout]) -> DeloadRecommendation {
    if workouts.len() < MIN_SESSIONS {
        return DeloadRecommendation::not_needed("Not enough training data yet");
    }

    let newest = workouts[0].date;
    let oldest = workouts[workouts.len() - 1].date;
    let training_span_days = newest.signed_duration_since(oldest).num_days();

    let recent_volumes = workouts
        .iter()
        .take(RECENT_WINDOW)
        .map(Workout::completed_volume)
        .collect::<Vec<_>>();
    let older_volumes = workouts
        .iter()
        .skip(RECENT_WINDOW)
        .take(RECENT_WINDOW)
        .map(Workout::completed_volume)
        .collect::<Vec<_>>();

    let avg_recent = recent_volumes.iter().sum::<f32>() / recent_volumes.len() as f32;
    let avg_older = if older_volumes.is_empty() {
        0.0
    } else {
        older_volumes.iter().sum::<f32>() / older_volumes.len() as f32
    };

    let avg_completion = workouts
        .iter()
        .take(RECENT_WINDOW)
        .map(Workout::completion_rate)
        .sum::<f32>()
        / workouts.len().min(RECENT_WINDOW) as f32;

    let volume_declining = avg_older > 0.0 && avg_recent < avg_older * VOLUME_DECLINE_THRESHOLD;
    let long_streak =
        training_span_days >= STREAK_MIN_DAYS && workouts.len() >= STREAK_MIN_SESSIONS;
    let low_completion = avg_completion < LOW_COMPLETION_THRESHOLD;

    if volume_declining && long_streak {
        return DeloadRecommendation {
            needed: true,
            reason: format!(
                "Volume has dropped {:.0}% over recent sessions after {training_span_days} days \
                 of training. Time for a deload week.",
                ((1.0 - avg_recent / avg_older) * 100.0).round(),
            ),
            suggested_weight_multiplier: 0.85,
            suggested_volume_multiplier: 0.6,
        };
    }

    if low_completion && long_streak {
        return DeloadRecommendation {
            needed: true,
            reason: format!(
                "Set completion rate has dropped to {:.0}%. A deload will help you recover and \
                 push through the plateau.",
                (avg_completion * 100.0).round(),
            ),
            suggested_weight_multiplier: 0.85,
            suggested_volume_multiplier: 0.6,
        };
    }

    if long_streak && workouts.len() >= PROACTIVE_MIN_SESSIONS {
        return DeloadRecommendation {
            needed: true,
            reason: format!(
                "You've been training for {training_span_days} days ({} sessions) without a \
                 light week. A proactive deload is recommended.",
                workouts.len(),
            ),
            suggested_weight_multiplier: 0.9,
            suggested_volume_multiplier: 0.7,
        };
    }

    DeloadRecommendation::not_needed("Training load looks sustainable. Keep pushing!")
}
