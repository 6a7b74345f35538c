use std::collections::BTreeSet;
use std::{cmp::Ordering, fmt};

use crate::{
    Catalog, Category, Difficulty, Equipment, Exercise, GenerationError, MuscleGroup, Reps,
    RepsRange,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    General,
}

impl Goal {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Endurance => "Endurance",
            Goal::General => "General Fitness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLength {
    Short,
    Medium,
    Long,
}

impl SessionLength {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SessionLength::Short => "short",
            SessionLength::Medium => "medium",
            SessionLength::Long => "long",
        }
    }

    fn exercise_count(self) -> usize {
        match self {
            SessionLength::Short => 4,
            SessionLength::Medium => 6,
            SessionLength::Long => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    FullBody,
    UpperLower,
    PushPullLegs,
    BroSplit,
}

impl Split {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Split::FullBody => "Full Body",
            Split::UpperLower => "Upper/Lower",
            Split::PushPullLegs => "Push Pull Legs",
            Split::BroSplit => "Bro Split",
        }
    }
}

/// How an exercise's load targets advance from week to week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionScheme {
    Linear,
    DoubleProgression,
    Wave,
}

impl fmt::Display for ProgressionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProgressionScheme::Linear => "linear",
                ProgressionScheme::DoubleProgression => "double-progression",
                ProgressionScheme::Wave => "wave",
            }
        )
    }
}

/// Validated questionnaire answers driving program generation.
///
/// `split: None` means the user left the choice to the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramWizardAnswers {
    pub goal: Goal,
    pub experience: Difficulty,
    pub days_per_week: u8,
    pub session_length: SessionLength,
    pub equipment: Vec<Equipment>,
    pub focus_muscles: Vec<MuscleGroup>,
    pub split: Option<Split>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedExercise {
    pub exercise: Exercise,
    pub sets: u32,
    pub reps: RepsRange,
    pub rest_seconds: u32,
    pub progression: Option<ProgressionScheme>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDay {
    pub name: String,
    pub exercises: Vec<GeneratedExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProgram {
    pub name: String,
    pub description: String,
    pub days: Vec<GeneratedDay>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Scheme {
    sets: u32,
    reps_min: u32,
    reps_max: u32,
    rest_seconds: u32,
}

const MAX_WARMUPS: usize = 3;
const MAX_STRETCHES: usize = 5;
const FULL_BODY_MAX_EXERCISES: usize = 7;

/// Resolve the split for an automatic selection.
#[must_use]
pub fn suggest_split(days_per_week: u8, experience: Difficulty) -> Split {
    match days_per_week {
        0..=2 => Split::FullBody,
        3 => {
            if experience == Difficulty::Beginner {
                Split::FullBody
            } else {
                Split::PushPullLegs
            }
        }
        4 => Split::UpperLower,
        _ => {
            if experience == Difficulty::Beginner {
                Split::UpperLower
            } else {
                Split::PushPullLegs
            }
        }
    }
}

struct SplitDay {
    name: String,
    muscles: Vec<MuscleGroup>,
}

fn split_days(split: Split, days_per_week: u8) -> Vec<SplitDay> {
    match split {
        Split::FullBody => (0..days_per_week)
            .map(|i| SplitDay {
                name: format!("Full Body {}", char::from(b'A' + i)),
                muscles: vec![
                    MuscleGroup::Chest,
                    MuscleGroup::Back,
                    MuscleGroup::Shoulders,
                    MuscleGroup::Quads,
                    MuscleGroup::Hamstrings,
                    MuscleGroup::Glutes,
                    MuscleGroup::Core,
                ],
            })
            .collect(),
        Split::UpperLower => (0..days_per_week)
            .map(|i| {
                if i % 2 == 0 {
                    SplitDay {
                        name: format!("Upper {}", i / 2 + 1),
                        muscles: vec![
                            MuscleGroup::Chest,
                            MuscleGroup::Back,
                            MuscleGroup::Shoulders,
                            MuscleGroup::Biceps,
                            MuscleGroup::Triceps,
                        ],
                    }
                } else {
                    SplitDay {
                        name: format!("Lower {}", i.div_ceil(2)),
                        muscles: vec![
                            MuscleGroup::Quads,
                            MuscleGroup::Hamstrings,
                            MuscleGroup::Glutes,
                            MuscleGroup::Calves,
                            MuscleGroup::Core,
                        ],
                    }
                }
            })
            .collect(),
        Split::PushPullLegs => {
            let cycle: [(&str, Vec<MuscleGroup>); 3] = [
                (
                    "Push",
                    vec![MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
                ),
                (
                    "Pull",
                    vec![MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Forearms],
                ),
                (
                    "Legs",
                    vec![
                        MuscleGroup::Quads,
                        MuscleGroup::Hamstrings,
                        MuscleGroup::Glutes,
                        MuscleGroup::Calves,
                        MuscleGroup::Core,
                    ],
                ),
            ];
            (0..days_per_week)
                .map(|i| {
                    let (name, muscles) = &cycle[usize::from(i) % 3];
                    let name = if days_per_week > 3 {
                        format!("{name} {}", usize::from(i) / 3 + 1)
                    } else {
                        (*name).to_string()
                    };
                    SplitDay {
                        name,
                        muscles: muscles.clone(),
                    }
                })
                .collect()
        }
        Split::BroSplit => {
            let days = [
                ("Chest Day", vec![MuscleGroup::Chest]),
                ("Back Day", vec![MuscleGroup::Back]),
                ("Shoulder Day", vec![MuscleGroup::Shoulders]),
                (
                    "Leg Day",
                    vec![
                        MuscleGroup::Quads,
                        MuscleGroup::Hamstrings,
                        MuscleGroup::Glutes,
                        MuscleGroup::Calves,
                    ],
                ),
                ("Arms Day", vec![MuscleGroup::Biceps, MuscleGroup::Triceps]),
                (
                    "Core & Conditioning",
                    vec![MuscleGroup::Core, MuscleGroup::FullBody],
                ),
            ];
            days.into_iter()
                .take(usize::from(days_per_week))
                .map(|(name, muscles)| SplitDay {
                    name: name.to_string(),
                    muscles,
                })
                .collect()
        }
    }
}

fn exercise_count(session_length: SessionLength, split: Split) -> usize {
    let count = session_length.exercise_count();
    if split == Split::FullBody {
        count.min(FULL_BODY_MAX_EXERCISES)
    } else {
        count
    }
}

fn scheme(goal: Goal, category: Category) -> Scheme {
    if matches!(category, Category::Warmup | Category::Stretch) {
        return Scheme {
            sets: 1,
            reps_min: 1,
            reps_max: 1,
            rest_seconds: 0,
        };
    }

    let compound = category == Category::Compound;
    match goal {
        Goal::Strength => {
            if compound {
                Scheme { sets: 5, reps_min: 3, reps_max: 5, rest_seconds: 180 }
            } else {
                Scheme { sets: 3, reps_min: 6, reps_max: 8, rest_seconds: 120 }
            }
        }
        Goal::Hypertrophy => {
            if compound {
                Scheme { sets: 4, reps_min: 8, reps_max: 12, rest_seconds: 120 }
            } else {
                Scheme { sets: 3, reps_min: 10, reps_max: 15, rest_seconds: 90 }
            }
        }
        Goal::Endurance => {
            if compound {
                Scheme { sets: 3, reps_min: 15, reps_max: 20, rest_seconds: 60 }
            } else {
                Scheme { sets: 3, reps_min: 15, reps_max: 25, rest_seconds: 45 }
            }
        }
        Goal::General => {
            if compound {
                Scheme { sets: 3, reps_min: 8, reps_max: 12, rest_seconds: 90 }
            } else {
                Scheme { sets: 3, reps_min: 10, reps_max: 15, rest_seconds: 60 }
            }
        }
    }
}

/// Select up to `count` exercises for the given muscles, best matches first.
/// The sort is stable so that repeated generation yields identical programs.
fn pick_best<'a>(
    pool: &[&'a Exercise],
    muscles: &[MuscleGroup],
    count: usize,
    prefer_compound: bool,
) -> Vec<&'a Exercise> {
    let mut matching = pool
        .iter()
        .copied()
        .filter(|e| e.muscle_groups.iter().any(|m| muscles.contains(m)))
        .collect::<Vec<_>>();

    matching.sort_by(|a, b| {
        if prefer_compound {
            let by_compound = (b.category == Category::Compound)
                .cmp(&(a.category == Category::Compound));
            if by_compound != Ordering::Equal {
                return by_compound;
            }
        }
        b.matching_muscles(muscles).cmp(&a.matching_muscles(muscles))
    });

    let mut picked = Vec::new();
    let mut used = BTreeSet::new();
    for exercise in matching {
        if picked.len() >= count {
            break;
        }
        if used.insert(exercise.id.clone()) {
            picked.push(exercise);
        }
    }
    picked
}

fn pick_for_day<'a>(
    pool: &[&'a Exercise],
    day: &SplitDay,
    focus_muscles: &[MuscleGroup],
    count: usize,
    prefer_compound: bool,
    priority_share: impl Fn(usize) -> usize,
) -> Vec<&'a Exercise> {
    let priority = day
        .muscles
        .iter()
        .copied()
        .filter(|m| focus_muscles.contains(m))
        .collect::<Vec<_>>();
    if priority.is_empty() {
        return pick_best(pool, &day.muscles, count, prefer_compound);
    }

    let other = day
        .muscles
        .iter()
        .copied()
        .filter(|m| !focus_muscles.contains(m))
        .collect::<Vec<_>>();

    let mut picked = pick_best(pool, &priority, priority_share(count), prefer_compound);
    let picked_ids = picked.iter().map(|e| e.id.clone()).collect::<BTreeSet<_>>();
    let remaining = pool
        .iter()
        .copied()
        .filter(|e| !picked_ids.contains(&e.id))
        .collect::<Vec<_>>();
    picked.extend(pick_best(
        &remaining,
        if other.is_empty() { &day.muscles } else { &other },
        count.saturating_sub(picked.len()),
        prefer_compound,
    ));
    picked
}

/// Generate a complete multi-day program from questionnaire answers.
pub fn generate_program(
    catalog: &Catalog,
    answers: &ProgramWizardAnswers,
) -> Result<GeneratedProgram, GenerationError> {
    let split = answers
        .split
        .unwrap_or_else(|| suggest_split(answers.days_per_week, answers.experience));
    let days = split_days(split, answers.days_per_week);
    let count = exercise_count(answers.session_length, split);

    let pool = catalog
        .exercises()
        .filter(|e| e.uses_any_equipment(&answers.equipment))
        .filter(|e| answers.experience.allows(e.difficulty))
        .collect::<Vec<_>>();
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    let generated_days = days
        .iter()
        .map(|day| {
            let compound_count = if split == Split::FullBody {
                day.muscles.len().min(count)
            } else {
                count.div_ceil(2)
            };
            let iso_count = count - compound_count.min(count);

            let compound_pool = pool
                .iter()
                .copied()
                .filter(|e| e.category == Category::Compound)
                .collect::<Vec<_>>();
            let compounds = pick_for_day(
                &compound_pool,
                day,
                &answers.focus_muscles,
                compound_count,
                true,
                |n| (n * 3).div_ceil(5),
            );

            let compound_ids = compounds.iter().map(|e| e.id.clone()).collect::<BTreeSet<_>>();
            let iso_pool = pool
                .iter()
                .copied()
                .filter(|e| e.category == Category::Isolation && !compound_ids.contains(&e.id))
                .collect::<Vec<_>>();
            let isolations = pick_for_day(
                &iso_pool,
                day,
                &answers.focus_muscles,
                iso_count,
                false,
                |n| (n * 7).div_ceil(10),
            );

            let main_work = compounds
                .into_iter()
                .chain(isolations)
                .take(count)
                .map(|exercise| generated_exercise(exercise, answers.goal))
                .collect::<Vec<_>>();

            let warmups = pool
                .iter()
                .copied()
                .filter(|e| e.category == Category::Warmup)
                .take(MAX_WARMUPS)
                .map(|exercise| generated_exercise(exercise, answers.goal));

            let matching_stretches = pool
                .iter()
                .copied()
                .filter(|e| {
                    e.category == Category::Stretch
                        && e.muscle_groups.iter().any(|m| day.muscles.contains(m))
                })
                .take(MAX_STRETCHES)
                .collect::<Vec<_>>();
            let stretches = if matching_stretches.is_empty() {
                pool.iter()
                    .copied()
                    .filter(|e| e.category == Category::Stretch)
                    .take(MAX_STRETCHES)
                    .collect::<Vec<_>>()
            } else {
                matching_stretches
            };

            GeneratedDay {
                name: day.name.clone(),
                exercises: warmups
                    .chain(main_work)
                    .chain(
                        stretches
                            .into_iter()
                            .map(|exercise| generated_exercise(exercise, answers.goal)),
                    )
                    .collect(),
            }
        })
        .collect();

    Ok(GeneratedProgram {
        name: format!("{} {}", answers.goal.label(), split.label()),
        description: format!(
            "{} days/week · {} focus · {} sessions",
            answers.days_per_week,
            answers.goal.label(),
            answers.session_length.label(),
        ),
        days: generated_days,
    })
}

fn generated_exercise(exercise: &Exercise, goal: Goal) -> GeneratedExercise {
    let scheme = scheme(goal, exercise.category);
    let mut entry = GeneratedExercise {
        exercise: exercise.clone(),
        sets: scheme.sets,
        reps: RepsRange::new(
            Reps::saturating(scheme.reps_min),
            Reps::saturating(scheme.reps_max),
        ),
        rest_seconds: scheme.rest_seconds,
        progression: None,
    };
    apply_exercise_defaults(&mut entry);
    entry
}

/// Names of isometric movements that are measured by time rather than reps.
const TIMED_EXERCISE_NAMES: [&str; 9] = [
    "plank",
    "side plank",
    "hollow hold",
    "dead bug",
    "wall sit",
    "l-sit",
    "front lever",
    "back lever",
    "handstand hold",
];

#[must_use]
pub fn is_timed_exercise(name: &str, category: Category) -> bool {
    if matches!(category, Category::Warmup | Category::Stretch) {
        return true;
    }

    let name = name.to_lowercase();
    TIMED_EXERCISE_NAMES.iter().any(|timed| name.contains(timed))
}

#[must_use]
pub fn default_duration(name: &str, category: Category) -> u32 {
    if matches!(category, Category::Warmup | Category::Stretch) {
        return 30;
    }

    let name = name.to_lowercase();
    if name.contains("plank") {
        45
    } else {
        30
    }
}

#[must_use]
pub fn default_rest_seconds(category: Category, reps_max: Reps) -> u32 {
    match category {
        Category::Warmup | Category::Stretch => 0,
        Category::Compound => {
            if reps_max <= Reps::saturating(5) {
                180
            } else if reps_max <= Reps::saturating(8) {
                150
            } else {
                120
            }
        }
        Category::Isolation => {
            if reps_max <= Reps::saturating(8) {
                90
            } else {
                60
            }
        }
        Category::Cardio => 90,
    }
}

#[must_use]
pub fn default_scheme(category: Category) -> Option<ProgressionScheme> {
    match category {
        Category::Compound => Some(ProgressionScheme::Linear),
        Category::Isolation => Some(ProgressionScheme::DoubleProgression),
        Category::Cardio | Category::Warmup | Category::Stretch => None,
    }
}

/// Fill in timed-exercise, progression-scheme and rest-time defaults on a
/// program entry. Covers entries created before these fields existed.
pub fn apply_exercise_defaults(entry: &mut GeneratedExercise) {
    if !entry.exercise.is_timed
        && is_timed_exercise(&entry.exercise.name, entry.exercise.category)
    {
        entry.exercise.is_timed = true;
    }
    if entry.exercise.is_timed && entry.exercise.duration.is_none() {
        entry.exercise.duration = Some(default_duration(
            &entry.exercise.name,
            entry.exercise.category,
        ));
    }
    if entry.progression.is_none() && entry.exercise.category.is_main_work() {
        entry.progression = default_scheme(entry.exercise.category);
    }
    if entry.rest_seconds == 0 && entry.exercise.category.is_main_work() {
        entry.rest_seconds = default_rest_seconds(entry.exercise.category, entry.reps.max);
    }
}
