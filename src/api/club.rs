use super::{column_id, created, success, ApiResult};
use crate::{
    dao::club as dao,
    error::AppError,
    models::{Club, ClubChanges, NewClub},
    DbPool,
};
use axum::{extract::Path, routing::get, Extension, Json, Router};

fn not_found(club_id: i64) -> AppError {
    AppError::not_found(format!("Club with id: {club_id} not found !"))
}

pub async fn list(Extension(pool): Extension<DbPool>) -> ApiResult<Vec<Club>> {
    let conn = &mut pool.get().await?;

    success(dao::list_clubs(conn).await?)
}

async fn create(
    Extension(pool): Extension<DbPool>,
    Json(req): Json<NewClub>,
) -> ApiResult<Club> {
    let conn = &mut pool.get().await?;

    let club = dao::create_club(conn, req).await?;
    tracing::info!(id = club.id, "created club");
    created(club)
}

async fn info(
    Extension(pool): Extension<DbPool>,
    Path(club_id): Path<i64>,
) -> ApiResult<Club> {
    let conn = &mut pool.get().await?;

    let club = match column_id(club_id) {
        Some(id) => dao::get_club_by_id(conn, id).await?,
        None => None,
    }
    .ok_or_else(|| not_found(club_id))?;

    success(club)
}

async fn update(
    Extension(pool): Extension<DbPool>,
    Path(club_id): Path<i64>,
    Json(req): Json<ClubChanges>,
) -> ApiResult<Club> {
    let conn = &mut pool.get().await?;

    let club = match column_id(club_id) {
        Some(id) => dao::update_club_by_id(conn, id, req).await?,
        None => None,
    }
    .ok_or_else(|| not_found(club_id))?;

    success(club)
}

pub fn app() -> Router {
    Router::new()
        .route("/clubs/", get(list).post(create))
        .route("/club/:club_id/", get(info).post(update))
}
