use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{ListFilter, NewReservation, Reservation, ReservationPatch, ReservationStatus};

use super::error::ApiError;
use super::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Stored reservations, cancelled included.
    pub reservations: usize,
}

/// Body for `POST /reservations`. Status arrives as a string and is parsed
/// at this boundary; unknown values never reach the engine.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub hotel_id: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
}

/// Body for `PATCH /reservations/{id}`. Every field is optional; for
/// `room_type` and `total_price` an explicit JSON `null` clears the field,
/// while omitting it keeps the current value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateReservationRequest {
    pub hotel_id: Option<String>,
    pub user_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub status: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub room_type: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub total_price: Option<Option<f64>>,
}

/// Query parameters for `GET /reservations`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub hotel_id: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<String>,
}

/// Distinguishes "field absent" from "field present but null": serde only
/// calls this when the key appears in the JSON, so presence becomes the
/// outer `Some`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

fn parse_status(s: &str) -> Result<ReservationStatus, ApiError> {
    ReservationStatus::parse(s)
        .ok_or_else(|| ApiError::BadRequest(format!("unrecognized status: {s:?}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /health
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        reservations: state.engine.count(),
    })
}

/// POST /reservations
pub(super) async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let status = req.status.as_deref().map(parse_status).transpose()?;
    let draft = NewReservation {
        id: req.id,
        hotel_id: req.hotel_id,
        user_id: req.user_id,
        check_in: req.check_in,
        check_out: req.check_out,
        guests: req.guests,
        status,
        created_at: None,
        room_type: req.room_type,
        total_price: req.total_price,
    };
    let created = state.engine.create(draft)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /reservations
pub(super) async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let filter = ListFilter {
        hotel_id: query.hotel_id,
        user_id: query.user_id,
        status,
    };
    Ok(Json(state.engine.list(&filter)))
}

/// GET /reservations/{id}
pub(super) async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, ApiError> {
    Ok(Json(state.engine.get(&id)?))
}

/// PATCH /reservations/{id}
pub(super) async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateReservationRequest>,
) -> Result<Json<Reservation>, ApiError> {
    let status = req.status.as_deref().map(parse_status).transpose()?;
    let patch = ReservationPatch {
        hotel_id: req.hotel_id,
        user_id: req.user_id,
        check_in: req.check_in,
        check_out: req.check_out,
        guests: req.guests,
        status,
        room_type: req.room_type,
        total_price: req.total_price,
    };
    Ok(Json(state.engine.update(&id, patch)?))
}

/// POST /reservations/{id}/cancel
pub(super) async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, ApiError> {
    Ok(Json(state.engine.cancel(&id)?))
}

/// DELETE /reservations/{id}
pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.engine.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
