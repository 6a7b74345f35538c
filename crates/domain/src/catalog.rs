use std::collections::BTreeMap;

use crate::{Category, Difficulty, Equipment, Exercise, ExerciseID, MuscleGroup, ProgressionEdges};

/// Loaded exercise catalog, keyed by exercise id.
///
/// Usually constructed from the built-in table below; `from_exercises` exists
/// for catalogs fetched from an external exercise database.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    exercises: BTreeMap<ExerciseID, Exercise>,
}

impl Catalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_exercises(BUILTIN.iter().map(Exercise::from).collect())
    }

    /// Build a catalog from a list of exercises. On duplicate ids the first
    /// occurrence wins.
    #[must_use]
    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        let mut map = BTreeMap::new();
        for exercise in exercises {
            map.entry(exercise.id.clone()).or_insert(exercise);
        }
        Self { exercises: map }
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.exercises.contains_key(id)
    }

    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Equipment selections offered by the program wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentPreset {
    BodyweightOnly,
    HomeBasic,
    HomeComplete,
    CommercialGym,
}

impl EquipmentPreset {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EquipmentPreset::BodyweightOnly => "Bodyweight Only",
            EquipmentPreset::HomeBasic => "Home Gym (Basic)",
            EquipmentPreset::HomeComplete => "Home Gym (Complete)",
            EquipmentPreset::CommercialGym => "Full Commercial Gym",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            EquipmentPreset::BodyweightOnly => "No equipment needed. Train anywhere.",
            EquipmentPreset::HomeBasic => "Dumbbells, resistance bands, maybe a pull-up bar.",
            EquipmentPreset::HomeComplete => "Barbell, dumbbells, bench, rack.",
            EquipmentPreset::CommercialGym => {
                "Access to everything: barbells, cables, machines, and more."
            }
        }
    }

    #[must_use]
    pub fn equipment(self) -> &'static [Equipment] {
        match self {
            EquipmentPreset::BodyweightOnly => &[Equipment::Bodyweight],
            EquipmentPreset::HomeBasic => &[
                Equipment::Bodyweight,
                Equipment::Dumbbell,
                Equipment::ResistanceBand,
                Equipment::Kettlebell,
            ],
            EquipmentPreset::HomeComplete => &[
                Equipment::Bodyweight,
                Equipment::Barbell,
                Equipment::Dumbbell,
                Equipment::Kettlebell,
                Equipment::ResistanceBand,
                Equipment::EzBar,
            ],
            EquipmentPreset::CommercialGym => &[
                Equipment::Bodyweight,
                Equipment::Barbell,
                Equipment::Dumbbell,
                Equipment::Cable,
                Equipment::Machine,
                Equipment::Kettlebell,
                Equipment::EzBar,
                Equipment::SmithMachine,
                Equipment::ResistanceBand,
                Equipment::TrapBar,
                Equipment::MedicineBall,
                Equipment::AbWheel,
                Equipment::StabilityBall,
                Equipment::Suspension,
                Equipment::Sled,
            ],
        }
    }
}

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    category: Category,
    muscles: &'static [MuscleGroup],
    equipment: &'static [Equipment],
    difficulty: Difficulty,
    is_timed: bool,
    duration: Option<u32>,
    easier: Option<&'static str>,
    harder: Option<&'static str>,
    alternatives: &'static [&'static str],
}

impl CatalogEntry {
    const DEFAULT: CatalogEntry = CatalogEntry {
        id: "",
        name: "",
        category: Category::Compound,
        muscles: &[],
        equipment: &[],
        difficulty: Difficulty::Beginner,
        is_timed: false,
        duration: None,
        easier: None,
        harder: None,
        alternatives: &[],
    };
}

impl From<&CatalogEntry> for Exercise {
    fn from(entry: &CatalogEntry) -> Self {
        Exercise {
            id: entry.id.into(),
            name: entry.name.to_string(),
            category: entry.category,
            muscle_groups: entry.muscles.to_vec(),
            equipment: entry.equipment.to_vec(),
            difficulty: entry.difficulty,
            is_timed: entry.is_timed,
            duration: entry.duration,
            progression: ProgressionEdges {
                easier: entry.easier.map(ExerciseID::from),
                harder: entry.harder.map(ExerciseID::from),
                alternatives: entry.alternatives.iter().copied().map(ExerciseID::from).collect(),
            },
        }
    }
}

#[rustfmt::skip]
static BUILTIN: [CatalogEntry; 74] = [
    // Chest
    CatalogEntry {
        id: "bench-press", name: "Bench Press", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "incline-bench", name: "Incline Bench Press", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Shoulders],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "db-bench", name: "Dumbbell Bench Press", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "db-fly", name: "Dumbbell Fly", category: Category::Isolation,
        muscles: &[MuscleGroup::Chest], equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "cable-crossover", name: "Cable Crossover", category: Category::Isolation,
        muscles: &[MuscleGroup::Chest], equipment: &[Equipment::Cable],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "push-ups", name: "Push-ups", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: &[Equipment::Bodyweight],
        easier: Some("incline-push-ups"), harder: Some("diamond-push-ups"),
        alternatives: &["wide-push-ups", "decline-push-ups"],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "incline-push-ups", name: "Incline Push-ups", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: &[Equipment::Bodyweight],
        harder: Some("push-ups"), alternatives: &["wall-push-ups", "knee-push-ups"],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "diamond-push-ups", name: "Diamond Push-ups", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: &[Equipment::Bodyweight], difficulty: Difficulty::Intermediate,
        easier: Some("push-ups"), harder: Some("one-arm-push-ups"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "dips", name: "Dips", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: &[Equipment::Bodyweight], difficulty: Difficulty::Intermediate,
        easier: Some("bench-dips"), harder: Some("weighted-dips"),
        alternatives: &["ring-dips", "korean-dips"],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "bench-dips", name: "Bench Dips", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: &[Equipment::Bodyweight],
        easier: Some("assisted-dips"), harder: Some("dips"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "chest-press-machine", name: "Chest Press Machine", category: Category::Compound,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        equipment: &[Equipment::Machine],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "pec-deck", name: "Pec Deck", category: Category::Isolation,
        muscles: &[MuscleGroup::Chest], equipment: &[Equipment::Machine],
        ..CatalogEntry::DEFAULT
    },
    // Back
    CatalogEntry {
        id: "deadlift", name: "Deadlift", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "barbell-row", name: "Barbell Row", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "db-row", name: "Dumbbell Row", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "pull-ups", name: "Pull-ups", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Bodyweight], difficulty: Difficulty::Intermediate,
        easier: Some("assisted-pull-ups"), harder: Some("weighted-pull-ups"),
        alternatives: &["chin-ups", "neutral-grip-pull-ups"],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "assisted-pull-ups", name: "Assisted Pull-ups", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Bodyweight, Equipment::Machine],
        easier: Some("negative-pull-ups"), harder: Some("pull-ups"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "chin-ups", name: "Chin-ups", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Bodyweight], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "inverted-rows", name: "Inverted Rows", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Bodyweight],
        easier: Some("elevated-rows"), harder: Some("archer-rows"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "lat-pulldown", name: "Lat Pulldown", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Cable],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "cable-row", name: "Cable Row", category: Category::Compound,
        muscles: &[MuscleGroup::Back, MuscleGroup::Biceps],
        equipment: &[Equipment::Cable],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "t-bar-row", name: "T-Bar Row", category: Category::Compound,
        muscles: &[MuscleGroup::Back], equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "face-pull", name: "Face Pull", category: Category::Isolation,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Back],
        equipment: &[Equipment::Cable],
        ..CatalogEntry::DEFAULT
    },
    // Shoulders
    CatalogEntry {
        id: "overhead-press", name: "Overhead Press", category: Category::Compound,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "db-shoulder-press", name: "Dumbbell Shoulder Press", category: Category::Compound,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
        equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "lateral-raise", name: "Lateral Raise", category: Category::Isolation,
        muscles: &[MuscleGroup::Shoulders], equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "front-raise", name: "Front Raise", category: Category::Isolation,
        muscles: &[MuscleGroup::Shoulders], equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "rear-delt-fly", name: "Rear Delt Fly", category: Category::Isolation,
        muscles: &[MuscleGroup::Shoulders], equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "arnold-press", name: "Arnold Press", category: Category::Compound,
        muscles: &[MuscleGroup::Shoulders], equipment: &[Equipment::Dumbbell],
        difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    // Legs
    CatalogEntry {
        id: "barbell-squat", name: "Barbell Squat", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "front-squat", name: "Front Squat", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Advanced,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "leg-press", name: "Leg Press", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: &[Equipment::Machine],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "lunges", name: "Lunges", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: &[Equipment::Dumbbell, Equipment::Bodyweight],
        harder: Some("jumping-lunges"), alternatives: &["reverse-lunges", "walking-lunges"],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "bulgarian-split", name: "Bulgarian Split Squat", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: &[Equipment::Dumbbell], difficulty: Difficulty::Intermediate,
        easier: Some("lunges"), harder: Some("assisted-pistol-squats"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "leg-extension", name: "Leg Extension", category: Category::Isolation,
        muscles: &[MuscleGroup::Quads], equipment: &[Equipment::Machine],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "leg-curl", name: "Leg Curl", category: Category::Isolation,
        muscles: &[MuscleGroup::Hamstrings], equipment: &[Equipment::Machine],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "rdl", name: "Romanian Deadlift", category: Category::Compound,
        muscles: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        equipment: &[Equipment::Barbell, Equipment::Dumbbell],
        difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "hip-thrust", name: "Hip Thrust", category: Category::Compound,
        muscles: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "calf-raise", name: "Calf Raise", category: Category::Isolation,
        muscles: &[MuscleGroup::Calves],
        equipment: &[Equipment::Machine, Equipment::Bodyweight],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "goblet-squat", name: "Goblet Squat", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: &[Equipment::Dumbbell, Equipment::Kettlebell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "bodyweight-squat", name: "Bodyweight Squat", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        equipment: &[Equipment::Bodyweight],
        harder: Some("jump-squats"), alternatives: &["goblet-squat", "sumo-squat"],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "jump-squats", name: "Jump Squats", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: &[Equipment::Bodyweight], difficulty: Difficulty::Intermediate,
        easier: Some("bodyweight-squat"), harder: Some("pistol-squats"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "pistol-squats", name: "Pistol Squats", category: Category::Compound,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: &[Equipment::Bodyweight], difficulty: Difficulty::Advanced,
        easier: Some("assisted-pistol-squats"),
        alternatives: &["shrimp-squats", "sissy-squats"],
        ..CatalogEntry::DEFAULT
    },
    // Arms
    CatalogEntry {
        id: "bicep-curl", name: "Bicep Curl", category: Category::Isolation,
        muscles: &[MuscleGroup::Biceps], equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "barbell-curl", name: "Barbell Curl", category: Category::Isolation,
        muscles: &[MuscleGroup::Biceps], equipment: &[Equipment::Barbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "hammer-curl", name: "Hammer Curl", category: Category::Isolation,
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
        equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "cable-curl", name: "Cable Curl", category: Category::Isolation,
        muscles: &[MuscleGroup::Biceps], equipment: &[Equipment::Cable],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "tricep-extension", name: "Tricep Extension", category: Category::Isolation,
        muscles: &[MuscleGroup::Triceps], equipment: &[Equipment::Dumbbell],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "tricep-pushdown", name: "Tricep Pushdown", category: Category::Isolation,
        muscles: &[MuscleGroup::Triceps], equipment: &[Equipment::Cable],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "skullcrusher", name: "Skull Crushers", category: Category::Isolation,
        muscles: &[MuscleGroup::Triceps], equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "close-grip-bench", name: "Close-Grip Bench Press", category: Category::Compound,
        muscles: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        equipment: &[Equipment::Barbell], difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    // Core
    CatalogEntry {
        id: "plank", name: "Plank", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(45),
        easier: Some("knee-plank"), harder: Some("weighted-plank"),
        alternatives: &["side-plank", "plank-to-push-up"],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "side-plank", name: "Side Plank", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "crunches", name: "Crunches", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "hanging-leg-raise", name: "Hanging Leg Raise", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Intermediate,
        easier: Some("knee-raises"), harder: Some("toes-to-bar"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "knee-raises", name: "Knee Raises", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        harder: Some("hanging-leg-raise"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "hollow-hold", name: "Hollow Hold", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Intermediate, is_timed: true, duration: Some(30),
        easier: Some("dead-bug"), harder: Some("dragon-flag"),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "cable-woodchop", name: "Cable Woodchop", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Cable],
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "ab-wheel", name: "Ab Wheel Rollout", category: Category::Isolation,
        muscles: &[MuscleGroup::Core],
        equipment: &[Equipment::Bodyweight, Equipment::AbWheel],
        difficulty: Difficulty::Intermediate,
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "russian-twist", name: "Russian Twist", category: Category::Isolation,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        ..CatalogEntry::DEFAULT
    },
    // Warmup
    CatalogEntry {
        id: "jumping-jacks", name: "Jumping Jacks", category: Category::Warmup,
        muscles: &[MuscleGroup::FullBody], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "arm-circles", name: "Arm Circles", category: Category::Warmup,
        muscles: &[MuscleGroup::Shoulders], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "leg-swings", name: "Leg Swings", category: Category::Warmup,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Hamstrings],
        equipment: &[Equipment::Bodyweight], is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "torso-twists", name: "Torso Twists", category: Category::Warmup,
        muscles: &[MuscleGroup::Core], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    // Stretch
    CatalogEntry {
        id: "chest-stretch", name: "Chest Doorway Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Chest], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "hamstring-stretch", name: "Standing Hamstring Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Hamstrings], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "quad-stretch", name: "Standing Quad Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Quads], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "child-pose", name: "Child's Pose", category: Category::Stretch,
        muscles: &[MuscleGroup::Back, MuscleGroup::Shoulders],
        equipment: &[Equipment::Bodyweight], is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "shoulder-stretch", name: "Cross-Body Shoulder Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Shoulders], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "hip-flexor-stretch", name: "Kneeling Hip Flexor Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        equipment: &[Equipment::Bodyweight], is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "calf-stretch", name: "Wall Calf Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Calves], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "tricep-stretch", name: "Overhead Tricep Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Triceps], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "glute-stretch", name: "Figure-Four Glute Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Glutes], equipment: &[Equipment::Bodyweight],
        is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
    CatalogEntry {
        id: "cat-cow", name: "Cat-Cow Stretch", category: Category::Stretch,
        muscles: &[MuscleGroup::Back, MuscleGroup::Core],
        equipment: &[Equipment::Bodyweight], is_timed: true, duration: Some(30),
        ..CatalogEntry::DEFAULT
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        assert_eq!(Catalog::builtin().len(), BUILTIN.len());
    }

    #[test]
    fn test_builtin_entries_are_consistent() {
        for entry in &BUILTIN {
            assert!(!entry.id.is_empty(), "entry without id: {}", entry.name);
            assert!(!entry.name.is_empty(), "entry without name: {}", entry.id);
            assert!(!entry.muscles.is_empty(), "entry without muscles: {}", entry.id);
            assert!(!entry.equipment.is_empty(), "entry without equipment: {}", entry.id);

            if matches!(entry.category, Category::Warmup | Category::Stretch) {
                assert!(entry.is_timed, "untimed warmup/stretch: {}", entry.id);
                assert!(entry.duration.is_some(), "warmup/stretch without duration: {}", entry.id);
            }
        }
    }

    #[test]
    fn test_builtin_covers_generator_needs() {
        let catalog = Catalog::builtin();

        assert!(catalog.len() >= 20);
        assert!(catalog.exercises().any(|e| e.category == Category::Warmup));
        assert!(catalog.exercises().any(|e| e.category == Category::Stretch));
        for muscle in [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Core,
        ] {
            assert!(
                catalog
                    .exercises()
                    .any(|e| e.category == Category::Compound && e.targets(muscle)),
                "no compound exercise for {muscle:?}"
            );
        }
    }

    #[test]
    fn test_get_and_contains() {
        let catalog = Catalog::builtin();

        let bench = catalog.get(&"bench-press".into()).unwrap();
        assert_eq!(bench.name, "Bench Press");
        assert!(catalog.contains(&"push-ups".into()));
        assert!(!catalog.contains(&"unknown".into()));
    }

    #[test]
    fn test_from_exercises_first_occurrence_wins() {
        let mut first = Exercise::from(&BUILTIN[0]);
        first.name = "First".to_string();
        let mut second = Exercise::from(&BUILTIN[0]);
        second.name = "Second".to_string();

        let catalog = Catalog::from_exercises(vec![first.clone(), second]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&first.id).unwrap().name, "First");
    }

    #[test]
    fn test_equipment_presets() {
        assert_eq!(
            EquipmentPreset::BodyweightOnly.equipment(),
            &[Equipment::Bodyweight]
        );
        for preset in [
            EquipmentPreset::BodyweightOnly,
            EquipmentPreset::HomeBasic,
            EquipmentPreset::HomeComplete,
            EquipmentPreset::CommercialGym,
        ] {
            assert!(preset.equipment().contains(&Equipment::Bodyweight));
            assert!(!preset.label().is_empty());
            assert!(!preset.description().is_empty());
        }
    }
}
