use crate::catalog;
use crate::chart::build_chart;
use crate::errors::AppError;
use crate::models::{
    CalorieEstimate, CalorieEstimateQuery, Category, CategoryInfo, ChartData, DurationUnit, Exercise,
    ExerciseId, ExerciseInput, ExercisePatch, ExerciseTemplate, LibraryQuery, StatsResponse, User,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::validation::{validate, Mode, EXERCISE_SCHEMA};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

pub async fn list_exercises(State(state): State<AppState>) -> Json<Vec<Exercise>> {
    let store = state.store.lock().await;
    Json(store.list(state.user_id))
}

pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>, AppError> {
    let id = parse_id(&id)?;
    let store = state.store.lock().await;
    store.get(id).cloned().map(Json).ok_or_else(not_found)
}

pub async fn create_exercise(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Exercise>), AppError> {
    let input: ExerciseInput = validated(payload, Mode::Create)?;

    let mut store = state.store.lock().await;
    let exercise = store.create(state.user_id, input);
    info!(id = exercise.id, name = %exercise.name, "exercise created");

    Ok((StatusCode::CREATED, Json(exercise)))
}

pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Exercise>, AppError> {
    let id = parse_id(&id)?;
    let patch: ExercisePatch = validated(payload, Mode::Patch)?;

    let mut store = state.store.lock().await;
    let exercise = store.update(id, patch).ok_or_else(not_found)?;
    info!(id, "exercise updated");

    Ok(Json(exercise))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    let mut store = state.store.lock().await;
    if !store.delete(id) {
        return Err(not_found());
    }
    info!(id, "exercise deleted");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let exercises = state.store.lock().await.list(state.user_id);
    Json(build_stats(&exercises))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartData> {
    let exercises = state.store.lock().await.list(state.user_id);
    Json(build_chart(&exercises))
}

pub async fn get_user(State(state): State<AppState>) -> Result<Json<User>, AppError> {
    let store = state.store.lock().await;
    store
        .get_user(state.user_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("User not found"))
}

pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(catalog::categories())
}

pub async fn list_library(
    query: Result<Query<LibraryQuery>, QueryRejection>,
) -> Result<Json<Vec<&'static ExerciseTemplate>>, AppError> {
    let Query(query) = query?;
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(
            Category::parse(raw).ok_or_else(|| AppError::bad_request(format!("Unknown category: {raw}")))?,
        ),
    };
    let search = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    Ok(Json(catalog::search_library(category, search)))
}

pub async fn estimate_calories(
    query: Result<Query<CalorieEstimateQuery>, QueryRejection>,
) -> Result<Json<CalorieEstimate>, AppError> {
    let Query(query) = query?;
    let weight_kg = query.weight_kg.unwrap_or(catalog::DEFAULT_WEIGHT_KG);
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::bad_request("weightKg must be a positive number"));
    }
    let unit = query.duration_unit.unwrap_or(DurationUnit::Min);

    Ok(Json(CalorieEstimate {
        calories: catalog::estimate_calories(query.category, query.duration, unit, weight_kg),
    }))
}

fn validated<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
    mode: Mode,
) -> Result<T, AppError> {
    let Json(body) = payload?;
    let Value::Object(mut fields) = body else {
        return Err(AppError::bad_request("Request body must be a JSON object"));
    };
    validate(EXERCISE_SCHEMA, mode, &mut fields)?;
    Ok(serde_json::from_value(Value::Object(fields))?)
}

fn parse_id(raw: &str) -> Result<ExerciseId, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("Invalid exercise ID"))
}

fn not_found() -> AppError {
    AppError::not_found("Exercise not found")
}
