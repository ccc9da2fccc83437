use super::{column_id, created, success, ApiResult};
use crate::{
    dao::event::{self as dao, ClubEvents},
    error::AppError,
    models::{Event, EventChanges, NewEvent},
    DbPool,
};
use axum::{extract::Path, routing::get, Extension, Json, Router};

fn not_found(event_id: i64) -> AppError {
    AppError::not_found(format!("Event with id: {event_id} not found !"))
}

/// `/events/{key}/` serves both club ids and industries. Only an all-digit
/// key that fits an `i64` is treated as a club id.
fn parse_club_id(key: &str) -> Option<i64> {
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        key.parse().ok()
    } else {
        None
    }
}

async fn list(Extension(pool): Extension<DbPool>) -> ApiResult<Vec<Event>> {
    let conn = &mut pool.get().await?;

    success(dao::list_events(conn).await?)
}

async fn create(
    Extension(pool): Extension<DbPool>,
    Json(req): Json<NewEvent>,
) -> ApiResult<Event> {
    let conn = &mut pool.get().await?;

    let event = dao::create_event(conn, req).await?;
    tracing::info!(id = event.id, club_id = event.club_id, "created event");
    created(event)
}

async fn info(
    Extension(pool): Extension<DbPool>,
    Path(event_id): Path<i64>,
) -> ApiResult<Event> {
    let conn = &mut pool.get().await?;

    let event = match column_id(event_id) {
        Some(id) => dao::get_event_by_id(conn, id).await?,
        None => None,
    }
    .ok_or_else(|| not_found(event_id))?;

    success(event)
}

async fn list_by_club_or_industry(
    Extension(pool): Extension<DbPool>,
    Path(key): Path<String>,
) -> ApiResult<Vec<Event>> {
    let conn = &mut pool.get().await?;

    if let Some(club_id) = parse_club_id(&key) {
        let found = match column_id(club_id) {
            Some(id) => dao::get_events_by_club_id(conn, id).await?,
            None => ClubEvents::NotFound,
        };
        return match found {
            ClubEvents::Found(events) => success(events),
            ClubEvents::EmptyButExists => Err(AppError::not_found(format!(
                "Club with id: {club_id} does not have any events !"
            ))),
            ClubEvents::NotFound => Err(AppError::not_found(format!(
                "Club with id: {club_id} not found !"
            ))),
        };
    }

    let events = dao::get_events_by_industry(conn, &key)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{key} industry does not have any events !")))?;

    success(events)
}

async fn list_by_registered_users(
    Extension(pool): Extension<DbPool>,
    Path((min, max)): Path<(i32, i32)>,
) -> ApiResult<Vec<Event>> {
    let conn = &mut pool.get().await?;

    let events = dao::get_events_by_registered_users(conn, min, max)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "no events have registered users between {min} to {max} !"
            ))
        })?;

    success(events)
}

async fn update(
    Extension(pool): Extension<DbPool>,
    Path(event_id): Path<i64>,
    Json(req): Json<EventChanges>,
) -> ApiResult<Event> {
    let conn = &mut pool.get().await?;

    let event = match column_id(event_id) {
        Some(id) => dao::update_event_by_id(conn, id, req).await?,
        None => None,
    }
    .ok_or_else(|| not_found(event_id))?;

    success(event)
}

async fn remove(
    Extension(pool): Extension<DbPool>,
    Path(event_id): Path<i64>,
) -> ApiResult<Event> {
    let conn = &mut pool.get().await?;

    let event = match column_id(event_id) {
        Some(id) => dao::delete_event_by_id(conn, id).await?,
        None => None,
    }
    .ok_or_else(|| not_found(event_id))?;
    tracing::info!(id = event.id, "deleted event");

    success(event)
}

pub fn app() -> Router {
    Router::new()
        .route("/events/", get(list).post(create))
        .route("/events/:key/", get(list_by_club_or_industry))
        // shares the `:key` segment name with the route above
        .route("/events/:key/:max/", get(list_by_registered_users))
        .route("/event/:event_id/", get(info).post(update).delete(remove))
}
