use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type ExerciseId = u64;
pub type UserId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cardio,
    Strength,
    Flexibility,
    Hiit,
    Sports,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cardio,
        Category::Strength,
        Category::Flexibility,
        Category::Hiit,
        Category::Sports,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cardio => "cardio",
            Category::Strength => "strength",
            Category::Flexibility => "flexibility",
            Category::Hiit => "hiit",
            Category::Sports => "sports",
            Category::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Min,
    Hr,
}

impl DurationUnit {
    pub fn to_minutes(self, duration: u32) -> u64 {
        match self {
            DurationUnit::Min => u64::from(duration),
            DurationUnit::Hr => u64::from(duration) * 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub user_id: UserId,
    pub name: String,
    pub category: Category,
    pub duration: u32,
    pub duration_unit: DurationUnit,
    pub calories: u32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Exercise {
    pub fn duration_minutes(&self) -> u64 {
        self.duration_unit.to_minutes(self.duration)
    }
}

/// Payload for a new exercise. `id` and `userId` are assigned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInput {
    pub name: String,
    pub category: Category,
    pub duration: u32,
    pub duration_unit: DurationUnit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub calories: u32,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update. A missing field is left alone; `null` resets
/// `calories` to zero and clears `notes`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub duration: Option<u32>,
    pub duration_unit: Option<DurationUnit>,
    #[serde(default, deserialize_with = "present")]
    pub calories: Option<Option<u32>>,
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_exercises: usize,
    pub weekly_exercises: usize,
    pub total_calories: u64,
    pub active_hours: f64,
    pub recent_activities: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub duration_by_day: Vec<u64>,
    pub calories_by_day: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub calories: u32,
    pub is_template: bool,
}

#[derive(Debug, Deserialize)]
pub struct LibraryQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEstimateQuery {
    pub category: Category,
    pub duration: u32,
    pub duration_unit: Option<DurationUnit>,
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalorieEstimate {
    pub calories: u64,
}
