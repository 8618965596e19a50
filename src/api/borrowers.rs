//! Borrower management endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::borrower::{Borrower, BorrowerRequest},
};

use super::{CreatedResponse, MessageResponse, ValidatedJson, ValidatedPath};

/// List all borrowers
#[utoipa::path(
    get,
    path = "/borrowers",
    tag = "borrowers",
    responses(
        (status = 200, description = "Borrower list", body = Vec<Borrower>)
    )
)]
pub async fn list_borrowers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Borrower>>> {
    let borrowers = state.services.borrowers.list().await?;
    Ok(Json(borrowers))
}

/// Get borrower by ID
#[utoipa::path(
    get,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(("id" = i32, Path, description = "Borrower ID")),
    responses(
        (status = 200, description = "Borrower details", body = Borrower),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_borrower(
    State(state): State<crate::AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.borrowers.get_by_id(id).await?;
    Ok(Json(borrower))
}

/// Register a borrower
#[utoipa::path(
    post,
    path = "/borrowers",
    tag = "borrowers",
    request_body = BorrowerRequest,
    responses(
        (status = 201, description = "Borrower added", body = CreatedResponse),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrower(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<BorrowerRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.borrowers.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Borrower added successfully".to_string(),
        }),
    ))
}

/// Replace a borrower
#[utoipa::path(
    put,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(("id" = i32, Path, description = "Borrower ID")),
    request_body = BorrowerRequest,
    responses(
        (status = 200, description = "Borrower updated", body = MessageResponse),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_borrower(
    State(state): State<crate::AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(data): ValidatedJson<BorrowerRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.borrowers.update(id, &data).await?;
    Ok(MessageResponse::new("Borrower updated successfully"))
}

/// Delete a borrower
#[utoipa::path(
    delete,
    path = "/borrowers/{id}",
    tag = "borrowers",
    params(("id" = i32, Path, description = "Borrower ID")),
    responses(
        (status = 200, description = "Borrower deleted", body = MessageResponse),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_borrower(
    State(state): State<crate::AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.borrowers.delete(id).await?;
    Ok(MessageResponse::new("Borrower deleted successfully"))
}
