use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::error::AppResult;

pub mod club;
pub mod event;

#[derive(Serialize)]
pub struct Envelope<T> {
    success: bool,
    data: T,
}

/// Path ids are extracted as `i64`. One past the range of the `i32` id
/// columns cannot match a row.
pub(crate) fn column_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

pub type ApiResult<T> = AppResult<(StatusCode, Json<Envelope<T>>)>;

pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    respond(StatusCode::OK, data)
}

pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    respond(StatusCode::CREATED, data)
}

fn respond<T: Serialize>(code: StatusCode, data: T) -> ApiResult<T> {
    Ok((
        code,
        Json(Envelope {
            success: true,
            data,
        }),
    ))
}
