use chrono::{TimeZone, Utc};
use exercise_editor_domain as domain;

pub static EXERCISES: std::sync::LazyLock<Vec<domain::Exercise>> =
    std::sync::LazyLock::new(|| vec![EXERCISE.clone(), EXERCISE_2.clone()]);

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "0001".into(),
        name: "3/4 sit-up".to_string(),
        body_part: "waist".to_string(),
        equipment: "body weight".to_string(),
        target: "abs".to_string(),
        secondary_muscles: vec!["hip flexors".to_string(), "lower back".to_string()],
        instructions: vec!["step1".to_string(), "step2".to_string()],
        gif_url: "https://media.example.com/exercises/0001.gif".to_string(),
        updated: false,
        updated_at: None,
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "0002".into(),
        name: "45° side bend".to_string(),
        body_part: "waist".to_string(),
        equipment: "body weight".to_string(),
        target: "abs".to_string(),
        secondary_muscles: vec![],
        instructions: vec![],
        gif_url: "https://www.youtube.com/watch?v=abc".to_string(),
        updated: true,
        updated_at: Some(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()),
    });
