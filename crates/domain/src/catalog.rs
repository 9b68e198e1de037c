use crate::Exercise;

struct SeedExercise {
    id: &'static str,
    name: &'static str,
    body_part: &'static str,
    equipment: &'static str,
    target: &'static str,
    secondary_muscles: &'static [&'static str],
    instructions: &'static [&'static str],
    gif_url: &'static str,
}

impl From<&SeedExercise> for Exercise {
    fn from(value: &SeedExercise) -> Self {
        Exercise {
            id: value.id.into(),
            name: value.name.to_string(),
            body_part: value.body_part.to_string(),
            equipment: value.equipment.to_string(),
            target: value.target.to_string(),
            secondary_muscles: value
                .secondary_muscles
                .iter()
                .map(ToString::to_string)
                .collect(),
            instructions: value.instructions.iter().map(ToString::to_string).collect(),
            gif_url: value.gif_url.to_string(),
            updated: false,
            updated_at: None,
        }
    }
}

/// Default catalog used when nothing has been persisted yet.
#[must_use]
pub fn seed() -> Vec<Exercise> {
    EXERCISES.iter().map(Exercise::from).collect()
}

const EXERCISES: [SeedExercise; 12] = [
    SeedExercise {
        id: "0001",
        name: "3/4 sit-up",
        body_part: "waist",
        equipment: "body weight",
        target: "abs",
        secondary_muscles: &["hip flexors", "lower back"],
        instructions: &[
            "Lie flat on your back with your knees bent and feet flat on the ground.",
            "Place your hands behind your head with your elbows pointing outwards.",
            "Engaging your abs, slowly lift your upper body off the ground, curling forward until your torso is at a 45-degree angle.",
            "Pause for a moment at the top, then slowly lower your upper body back down to the starting position.",
            "Repeat for the desired number of repetitions.",
        ],
        gif_url: "https://media.example.com/exercises/0001.gif",
    },
    SeedExercise {
        id: "0002",
        name: "45° side bend",
        body_part: "waist",
        equipment: "body weight",
        target: "abs",
        secondary_muscles: &["obliques"],
        instructions: &[
            "Stand with your feet shoulder-width apart and your arms extended straight down by your sides.",
            "Keeping your back straight and your core engaged, slowly bend your torso to one side, lowering your hand towards your knee.",
            "Pause for a moment at the bottom, then slowly return to the starting position.",
            "Repeat on the other side.",
        ],
        gif_url: "https://media.example.com/exercises/0002.gif",
    },
    SeedExercise {
        id: "0003",
        name: "air bike",
        body_part: "waist",
        equipment: "body weight",
        target: "abs",
        secondary_muscles: &["hip flexors"],
        instructions: &[
            "Lie flat on your back with your hands placed behind your head.",
            "Lift your legs off the ground and bend your knees at a 90-degree angle.",
            "Bring your right elbow towards your left knee while simultaneously straightening your right leg.",
            "Return to the starting position and repeat the movement on the opposite side.",
        ],
        gif_url: "https://media.example.com/exercises/0003.gif",
    },
    SeedExercise {
        id: "0006",
        name: "alternate heel touchers",
        body_part: "waist",
        equipment: "body weight",
        target: "abs",
        secondary_muscles: &["obliques"],
        instructions: &[
            "Lie flat on your back with your knees bent and feet flat on the ground.",
            "Lift your head, shoulders and upper back off the ground.",
            "Reach your right hand towards your right heel, then return to the center.",
            "Reach your left hand towards your left heel, then return to the center.",
        ],
        gif_url: "https://media.example.com/exercises/0006.gif",
    },
    SeedExercise {
        id: "0007",
        name: "alternate lateral pulldown",
        body_part: "back",
        equipment: "cable",
        target: "lats",
        secondary_muscles: &["biceps", "rhomboids"],
        instructions: &[
            "Sit on the cable machine with your back straight and feet flat on the ground.",
            "Grasp the handles with an overhand grip, slightly wider than shoulder-width apart.",
            "Pull one handle down towards your chest, squeezing your shoulder blades together.",
            "Slowly release the handle back to the starting position and repeat with the other arm.",
        ],
        gif_url: "https://media.example.com/exercises/0007.gif",
    },
    SeedExercise {
        id: "0009",
        name: "assisted chest dip (kneeling)",
        body_part: "chest",
        equipment: "leverage machine",
        target: "pectorals",
        secondary_muscles: &["triceps", "shoulders"],
        instructions: &[
            "Adjust the machine to your desired height and secure your knees on the pad.",
            "Grasp the handles with your palms facing down and your arms fully extended.",
            "Lower your body by bending your elbows until your upper arms are parallel to the floor.",
            "Push yourself back up to the starting position by straightening your arms.",
        ],
        gif_url: "https://media.example.com/exercises/0009.gif",
    },
    SeedExercise {
        id: "0024",
        name: "barbell bench front squat",
        body_part: "upper legs",
        equipment: "barbell",
        target: "quads",
        secondary_muscles: &["glutes", "hamstrings", "calves"],
        instructions: &[
            "Start by standing in front of a bench with your feet shoulder-width apart.",
            "Hold a barbell across the front of your shoulders, resting it on your fingertips.",
            "Lower your body down by bending at the knees and hips until your glutes touch the bench.",
            "Push through your heels to return to the starting position.",
        ],
        gif_url: "https://media.example.com/exercises/0024.gif",
    },
    SeedExercise {
        id: "0025",
        name: "barbell bench press",
        body_part: "chest",
        equipment: "barbell",
        target: "pectorals",
        secondary_muscles: &["triceps", "shoulders"],
        instructions: &[
            "Lie flat on a bench with your feet flat on the ground and your back pressed against the bench.",
            "Grasp the barbell with an overhand grip slightly wider than shoulder-width apart.",
            "Lift the barbell off the rack and hold it directly above your chest with your arms fully extended.",
            "Lower the barbell slowly towards your chest, keeping your elbows tucked in.",
            "Press the barbell back up to the starting position.",
        ],
        gif_url: "https://media.example.com/exercises/0025.gif",
    },
    SeedExercise {
        id: "0032",
        name: "barbell deadlift",
        body_part: "upper legs",
        equipment: "barbell",
        target: "glutes",
        secondary_muscles: &["hamstrings", "lower back"],
        instructions: &[
            "Stand with your feet shoulder-width apart and the barbell on the ground in front of you.",
            "Bend at the hips and knees and grip the barbell with an overhand grip.",
            "Keeping your back straight, lift the barbell by extending your hips and knees.",
            "Lower the barbell back to the ground by bending at the hips and knees.",
        ],
        gif_url: "https://media.example.com/exercises/0032.gif",
    },
    SeedExercise {
        id: "0043",
        name: "barbell full squat",
        body_part: "upper legs",
        equipment: "barbell",
        target: "glutes",
        secondary_muscles: &["quadriceps", "hamstrings", "calves", "core"],
        instructions: &[
            "Stand with your feet shoulder-width apart and the barbell resting on your upper back.",
            "Lower your body by bending your knees and hips, keeping your chest up.",
            "Continue lowering until your thighs are parallel to the ground or slightly below.",
            "Push through your heels to return to the starting position.",
        ],
        gif_url: "https://media.example.com/exercises/0043.gif",
    },
    SeedExercise {
        id: "0294",
        name: "dumbbell biceps curl",
        body_part: "upper arms",
        equipment: "dumbbell",
        target: "biceps",
        secondary_muscles: &["forearms"],
        instructions: &[
            "Stand up straight with a dumbbell in each hand, palms facing forward.",
            "Keeping your upper arms stationary, curl the weights up towards your shoulders.",
            "Squeeze your biceps at the top, then slowly lower the dumbbells back down.",
        ],
        gif_url: "https://media.example.com/exercises/0294.gif",
    },
    SeedExercise {
        id: "1160",
        name: "burpee",
        body_part: "cardio",
        equipment: "body weight",
        target: "cardiovascular system",
        secondary_muscles: &[],
        instructions: &[
            "Start in a standing position with your feet shoulder-width apart.",
            "Lower your body into a squat position by bending your knees and placing your hands on the floor.",
            "Kick your feet back into a push-up position and perform a push-up.",
            "Jump your feet back towards your hands and explosively jump up into the air.",
        ],
        gif_url: "https://media.example.com/exercises/1160.gif",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_seed() {
        let exercises = seed();

        assert_eq!(exercises.len(), EXERCISES.len());
        assert_eq!(exercises[0].id.to_string(), "0001");
        assert_eq!(exercises[0].name, "3/4 sit-up");
        assert_eq!(
            exercises[0].secondary_muscles,
            vec!["hip flexors".to_string(), "lower back".to_string()]
        );
        assert!(exercises.iter().all(|e| !e.updated && e.updated_at.is_none()));
    }

    #[test]
    fn test_seed_ids_unique() {
        let ids = EXERCISES.iter().map(|e| e.id).collect::<HashSet<_>>();

        assert_eq!(ids.len(), EXERCISES.len());
    }

    #[test]
    fn test_seed_order() {
        let ids = EXERCISES.iter().map(|e| e.id).collect::<Vec<_>>();
        let mut sorted_ids = ids.clone();
        sorted_ids.sort_unstable();

        assert_eq!(ids, sorted_ids, "exercises must be sorted by id");
    }

    #[test]
    fn test_seed_fields_not_empty() {
        for e in &EXERCISES {
            assert!(!e.id.is_empty());
            assert!(!e.name.is_empty(), "{}", e.id);
            assert!(!e.instructions.is_empty(), "{}", e.id);
            assert!(!e.gif_url.is_empty(), "{}", e.id);
        }
    }
}
