use std::slice::Iter;

use derive_more::{AsRef, Display};

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_catalog(&self) -> Result<Vec<Exercise>, ReadError>;
}

/// Stable identifier of a catalog exercise (e.g. `push-ups`).
#[derive(AsRef, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    /// Human-readable name derived from the slug, used when an id has no
    /// catalog entry to look the name up in.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub category: Category,
    pub muscle_groups: Vec<MuscleGroup>,
    pub equipment: Vec<Equipment>,
    pub difficulty: Difficulty,
    pub is_timed: bool,
    pub duration: Option<u32>,
    pub progression: ProgressionEdges,
}

impl Exercise {
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.contains(&Equipment::Bodyweight)
    }

    #[must_use]
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.muscle_groups.contains(&muscle)
    }

    #[must_use]
    pub fn matching_muscles(&self, muscles: &[MuscleGroup]) -> usize {
        self.muscle_groups
            .iter()
            .filter(|m| muscles.contains(m))
            .count()
    }

    #[must_use]
    pub fn uses_any_equipment(&self, equipment: &[Equipment]) -> bool {
        self.equipment.iter().any(|e| equipment.contains(e))
    }
}

/// Variation graph of an exercise within the catalog. Edges may refer to
/// exercises outside the loaded catalog.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgressionEdges {
    pub easier: Option<ExerciseID>,
    pub harder: Option<ExerciseID>,
    pub alternatives: Vec<ExerciseID>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Core,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 12] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Dumbbell,
    Cable,
    Machine,
    Kettlebell,
    ResistanceBand,
    EzBar,
    SmithMachine,
    TrapBar,
    MedicineBall,
    AbWheel,
    StabilityBall,
    Suspension,
    Sled,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 15] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Kettlebell,
            Equipment::ResistanceBand,
            Equipment::EzBar,
            Equipment::SmithMachine,
            Equipment::TrapBar,
            Equipment::MedicineBall,
            Equipment::AbWheel,
            Equipment::StabilityBall,
            Equipment::Suspension,
            Equipment::Sled,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Cable => "Cable",
            Equipment::Machine => "Machine",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::EzBar => "EZ Bar",
            Equipment::SmithMachine => "Smith Machine",
            Equipment::TrapBar => "Trap Bar",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::AbWheel => "Ab Wheel",
            Equipment::StabilityBall => "Stability Ball",
            Equipment::Suspension => "Suspension",
            Equipment::Sled => "Sled",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Compound,
    Isolation,
    Cardio,
    Warmup,
    Stretch,
}

impl Category {
    /// Main training work, as opposed to preparation and recovery movements.
    #[must_use]
    pub fn is_main_work(self) -> bool {
        matches!(self, Category::Compound | Category::Isolation)
    }
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 5] = [
            Category::Compound,
            Category::Isolation,
            Category::Cardio,
            Category::Warmup,
            Category::Stretch,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Compound => "Compound",
            Category::Isolation => "Isolation",
            Category::Cardio => "Cardio",
            Category::Warmup => "Warmup",
            Category::Stretch => "Stretch",
        }
    }
}

/// Difficulty tier of an exercise, doubling as the user's experience level
/// in the program questionnaire.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Whether a user at this experience level may be given an exercise of
    /// the given difficulty. Each tier includes all tiers below it.
    #[must_use]
    pub fn allows(self, difficulty: Difficulty) -> bool {
        difficulty <= self
    }
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTIES: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("push-ups", "Push Ups")]
    #[case("barbell-row", "Barbell Row")]
    #[case("rdl", "Rdl")]
    fn test_exercise_id_display_name(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(ExerciseID::from(id).display_name(), expected);
    }

    #[rstest]
    #[case(Difficulty::Beginner, Difficulty::Beginner, true)]
    #[case(Difficulty::Beginner, Difficulty::Intermediate, false)]
    #[case(Difficulty::Intermediate, Difficulty::Beginner, true)]
    #[case(Difficulty::Intermediate, Difficulty::Advanced, false)]
    #[case(Difficulty::Advanced, Difficulty::Advanced, true)]
    fn test_difficulty_allows(
        #[case] experience: Difficulty,
        #[case] difficulty: Difficulty,
        #[case] expected: bool,
    ) {
        assert_eq!(experience.allows(difficulty), expected);
    }

    #[rstest]
    #[case(Category::Compound, true)]
    #[case(Category::Isolation, true)]
    #[case(Category::Cardio, false)]
    #[case(Category::Warmup, false)]
    #[case(Category::Stretch, false)]
    fn test_category_is_main_work(#[case] category: Category, #[case] expected: bool) {
        assert_eq!(category.is_main_work(), expected);
    }

    #[test]
    fn test_exercise_predicates() {
        let exercise = Exercise {
            id: "push-ups".into(),
            name: "Push-ups".to_string(),
            category: Category::Compound,
            muscle_groups: vec![
                MuscleGroup::Chest,
                MuscleGroup::Triceps,
                MuscleGroup::Shoulders,
            ],
            equipment: vec![Equipment::Bodyweight],
            difficulty: Difficulty::Beginner,
            is_timed: false,
            duration: None,
            progression: ProgressionEdges::default(),
        };

        assert!(exercise.is_bodyweight());
        assert!(exercise.targets(MuscleGroup::Chest));
        assert!(!exercise.targets(MuscleGroup::Quads));
        assert_eq!(
            exercise.matching_muscles(&[MuscleGroup::Chest, MuscleGroup::Triceps]),
            2
        );
        assert!(exercise.uses_any_equipment(&[Equipment::Bodyweight, Equipment::Barbell]));
        assert!(!exercise.uses_any_equipment(&[Equipment::Cable]));
    }
}
