use crate::models::{Exercise, ExerciseId, ExerciseInput, ExercisePatch, User, UserId};
use std::collections::BTreeMap;

/// In-memory exercise and user tables.
///
/// Ids come from per-table counters that only move forward, so an id is
/// never handed out twice even after the record holding it is deleted.
#[derive(Debug)]
pub struct ExerciseStore {
    users: BTreeMap<UserId, User>,
    exercises: BTreeMap<ExerciseId, Exercise>,
    next_user_id: UserId,
    next_exercise_id: ExerciseId,
}

impl Default for ExerciseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseStore {
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            exercises: BTreeMap::new(),
            next_user_id: 1,
            next_exercise_id: 1,
        }
    }

    pub fn create_user(&mut self, username: impl Into<String>, password: impl Into<String>) -> User {
        let id = self.next_user_id;
        self.next_user_id += 1;
        let user = User {
            id,
            username: username.into(),
            password: password.into(),
        };
        self.users.insert(id, user.clone());
        user
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|user| user.username == username)
    }

    pub fn create(&mut self, user_id: UserId, input: ExerciseInput) -> Exercise {
        let id = self.next_exercise_id;
        self.next_exercise_id += 1;
        let exercise = Exercise {
            id,
            user_id,
            name: input.name,
            category: input.category,
            duration: input.duration,
            duration_unit: input.duration_unit,
            calories: input.calories,
            date: input.date,
            notes: input.notes,
        };
        self.exercises.insert(id, exercise.clone());
        exercise
    }

    pub fn get(&self, id: ExerciseId) -> Option<&Exercise> {
        self.exercises.get(&id)
    }

    /// All exercises owned by `user_id`, most recent first.
    pub fn list(&self, user_id: UserId) -> Vec<Exercise> {
        let mut exercises: Vec<Exercise> = self
            .exercises
            .values()
            .filter(|exercise| exercise.user_id == user_id)
            .cloned()
            .collect();
        exercises.sort_by(|a, b| b.date.cmp(&a.date));
        exercises
    }

    pub fn update(&mut self, id: ExerciseId, patch: ExercisePatch) -> Option<Exercise> {
        let exercise = self.exercises.get_mut(&id)?;
        if let Some(name) = patch.name {
            exercise.name = name;
        }
        if let Some(category) = patch.category {
            exercise.category = category;
        }
        if let Some(duration) = patch.duration {
            exercise.duration = duration;
        }
        if let Some(unit) = patch.duration_unit {
            exercise.duration_unit = unit;
        }
        if let Some(calories) = patch.calories {
            exercise.calories = calories.unwrap_or_default();
        }
        if let Some(date) = patch.date {
            exercise.date = date;
        }
        if let Some(notes) = patch.notes {
            exercise.notes = notes;
        }
        Some(exercise.clone())
    }

    pub fn delete(&mut self, id: ExerciseId) -> bool {
        self.exercises.remove(&id).is_some()
    }
}
