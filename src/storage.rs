use crate::models::{Category, DurationUnit, ExerciseInput, UserId};
use crate::store::ExerciseStore;
use crate::validation::{validate, Mode, ValidationErrors, EXERCISE_SCHEMA};
use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "password";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("seed entry {index} is invalid: {source}")]
    Invalid {
        index: usize,
        source: ValidationErrors,
    },
}

/// Where the demo user's exercises come from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Empty,
    Demo,
    File(PathBuf),
}

/// Builds a store holding the demo user and its seed exercises.
/// Returns the store together with the demo user's id.
pub async fn initialize_store(seed: &Seed) -> Result<(ExerciseStore, UserId), SeedError> {
    let inputs = match seed {
        Seed::Empty => Vec::new(),
        Seed::Demo => demo_exercises(Utc::now()),
        Seed::File(path) => load_seed(path).await?,
    };
    Ok(seeded_store(inputs))
}

pub fn seeded_store(inputs: Vec<ExerciseInput>) -> (ExerciseStore, UserId) {
    let mut store = ExerciseStore::new();
    let user = store.create_user(DEMO_USERNAME, DEMO_PASSWORD);
    let count = inputs.len();
    for input in inputs {
        store.create(user.id, input);
    }
    info!(user_id = user.id, exercises = count, "store initialized");
    (store, user.id)
}

pub async fn load_seed(path: &Path) -> Result<Vec<ExerciseInput>, SeedError> {
    let bytes = fs::read(path).await.map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_error = |source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let entries: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_slice(&bytes).map_err(parse_error)?;
    let mut inputs = Vec::with_capacity(entries.len());
    for (index, mut entry) in entries.into_iter().enumerate() {
        validate(EXERCISE_SCHEMA, Mode::Create, &mut entry)
            .map_err(|source| SeedError::Invalid { index, source })?;
        inputs.push(serde_json::from_value(serde_json::Value::Object(entry)).map_err(parse_error)?);
    }
    Ok(inputs)
}

/// Three sample workouts: now, one day ago and two days ago.
pub fn demo_exercises(now: DateTime<Utc>) -> Vec<ExerciseInput> {
    vec![
        ExerciseInput {
            name: "Morning Jog".to_string(),
            category: Category::Cardio,
            duration: 30,
            duration_unit: DurationUnit::Min,
            calories: 320,
            date: now,
            notes: Some("Easy pace around the neighborhood".to_string()),
        },
        ExerciseInput {
            name: "HIIT Workout".to_string(),
            category: Category::Hiit,
            duration: 25,
            duration_unit: DurationUnit::Min,
            calories: 350,
            date: now - Duration::days(1),
            notes: Some("Interval training with 30 sec work, 15 sec rest".to_string()),
        },
        ExerciseInput {
            name: "Weight Training".to_string(),
            category: Category::Strength,
            duration: 45,
            duration_unit: DurationUnit::Min,
            calories: 280,
            date: now - Duration::days(2),
            notes: Some("Focus on chest and back".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("fitness_seed_{}_{}_{name}", std::process::id(), nanos))
    }

    #[tokio::test]
    async fn demo_seed_creates_user_and_three_exercises() {
        let (store, user_id) = initialize_store(&Seed::Demo).await.unwrap();
        assert_eq!(store.get_user(user_id).map(|u| u.username.as_str()), Some("demo"));

        let names: Vec<String> = store.list(user_id).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Morning Jog", "HIIT Workout", "Weight Training"]);
    }

    #[tokio::test]
    async fn empty_seed_still_creates_demo_user() {
        let (store, user_id) = initialize_store(&Seed::Empty).await.unwrap();
        assert!(store.get_user_by_username(DEMO_USERNAME).is_some());
        assert!(store.list(user_id).is_empty());
    }

    #[tokio::test]
    async fn file_seed_is_loaded() {
        let path = temp_path("ok.json");
        let body = serde_json::json!([{
            "name": "Evening Swim",
            "category": "cardio",
            "duration": 1,
            "durationUnit": "hr",
            "date": "2026-01-05T18:00:00Z"
        }]);
        fs::write(&path, body.to_string()).await.unwrap();

        let (store, user_id) = initialize_store(&Seed::File(path.clone())).await.unwrap();
        let exercises = store.list(user_id);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].calories, 0);
        assert_eq!(exercises[0].duration_minutes(), 60);

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_or_broken_seed_file_is_an_error() {
        let missing = temp_path("missing.json");
        assert!(matches!(
            initialize_store(&Seed::File(missing)).await,
            Err(SeedError::Read { .. })
        ));

        let broken = temp_path("broken.json");
        fs::write(&broken, b"{ not json").await.unwrap();
        assert!(matches!(
            initialize_store(&Seed::File(broken.clone())).await,
            Err(SeedError::Parse { .. })
        ));
        let _ = fs::remove_file(&broken).await;
    }

    #[tokio::test]
    async fn seed_entries_go_through_validation() {
        let path = temp_path("invalid.json");
        let body = serde_json::json!([{
            "name": "Nap",
            "category": "rest",
            "duration": 0,
            "durationUnit": "min",
            "date": "2026-01-05"
        }]);
        fs::write(&path, body.to_string()).await.unwrap();

        match initialize_store(&Seed::File(path.clone())).await {
            Err(SeedError::Invalid { index, source }) => {
                assert_eq!(index, 0);
                assert_eq!(source.0.len(), 2);
            }
            other => panic!("expected invalid seed error, got {other:?}"),
        }
        let _ = fs::remove_file(&path).await;
    }
}
