use crate::errors::AppError;
use crate::models::{
    parse_date, Completion, Habit, HabitPatch, NewCompletion, NewHabit, Stats, TodayHabit,
};
use crate::state::AppState;
use crate::stats;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.habits()))
}

pub async fn get_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Habit>, AppError> {
    let store = state.store.lock().await;
    let habit = store
        .habit(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Habit not found"))?;
    Ok(Json(habit))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(draft): Json<NewHabit>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    if draft.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    if draft.frequency.trim().is_empty() {
        return Err(AppError::bad_request("frequency must not be empty"));
    }

    let mut store = state.store.lock().await;
    let habit = store.create_habit(draft);
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<HabitPatch>,
) -> Result<Json<Habit>, AppError> {
    if matches!(&patch.name, Some(name) if name.trim().is_empty()) {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let mut store = state.store.lock().await;
    let habit = store
        .update_habit(id, patch)
        .ok_or_else(|| AppError::not_found("Habit not found"))?;
    Ok(Json(habit))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if store.delete_habit(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Habit not found"))
    }
}

pub async fn list_completions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Completion>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.completions()))
}

pub async fn completions_by_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<i64>,
) -> Result<Json<Vec<Completion>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.completions_for_habit(habit_id)))
}

pub async fn completions_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Completion>>, AppError> {
    let date = parse_date(&date)
        .ok_or_else(|| AppError::bad_request("Invalid date format. Use YYYY-MM-DD"))?;
    let store = state.store.lock().await;
    Ok(Json(store.completions_on(date)))
}

pub async fn create_completion(
    State(state): State<AppState>,
    Json(payload): Json<NewCompletion>,
) -> Result<(StatusCode, Json<Completion>), AppError> {
    let date = parse_date(&payload.date)
        .ok_or_else(|| AppError::bad_request("Invalid date format. Use YYYY-MM-DD"))?;

    let mut store = state.store.lock().await;
    if store.habit(payload.habit_id).is_none() {
        return Err(AppError::not_found("Habit not found"));
    }
    let completion = store.create_completion(payload.habit_id, date);
    Ok((StatusCode::CREATED, Json(completion)))
}

pub async fn delete_completion(
    State(state): State<AppState>,
    Path((habit_id, date)): Path<(i64, String)>,
) -> Result<StatusCode, AppError> {
    let date = parse_date(&date)
        .ok_or_else(|| AppError::bad_request("Invalid date format. Use YYYY-MM-DD"))?;

    let mut store = state.store.lock().await;
    if store.delete_completion(habit_id, date) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Completion not found"))
    }
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>, AppError> {
    let store = state.store.lock().await;
    let stats = stats::build_stats(store.habit_count(), &store.completions());
    Ok(Json(stats))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<Vec<TodayHabit>>, AppError> {
    let date = stats::today();
    let store = state.store.lock().await;
    let habits = store
        .habits()
        .into_iter()
        .map(|habit| {
            let completed = store.is_completed(habit.id, date);
            TodayHabit { habit, completed }
        })
        .collect();
    Ok(Json(habits))
}
