//! Borrowing transaction endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::transaction::{CreateTransaction, Transaction, UpdateTransaction},
};

use super::{CreatedResponse, MessageResponse, ValidatedJson, ValidatedPath};

/// List all transactions
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "Transaction list, dates as YYYY-MM-DD", body = Vec<Transaction>)
    )
)]
pub async fn list_transactions(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Transaction>>> {
    let transactions = state.services.transactions.list().await?;
    Ok(Json(transactions))
}

/// Get transaction by ID
#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "transactions",
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction details", body = Transaction),
        (status = 404, description = "Transaction not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_transaction(
    State(state): State<crate::AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<Transaction>> {
    let transaction = state.services.transactions.get_by_id(id).await?;
    Ok(Json(transaction))
}

/// Record a borrowing
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "transactions",
    request_body = CreateTransaction,
    responses(
        (status = 201, description = "Transaction added", body = CreatedResponse),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_transaction(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateTransaction>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.transactions.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Transaction added successfully".to_string(),
        }),
    ))
}

/// Update some fields of a transaction
#[utoipa::path(
    put,
    path = "/transactions/{id}",
    tag = "transactions",
    params(("id" = i32, Path, description = "Transaction ID")),
    request_body = UpdateTransaction,
    responses(
        (status = 200, description = "Transaction updated", body = MessageResponse),
        (status = 400, description = "Malformed field", body = crate::error::ErrorResponse),
        (status = 404, description = "Transaction not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_transaction(
    State(state): State<crate::AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(data): ValidatedJson<UpdateTransaction>,
) -> AppResult<Json<MessageResponse>> {
    state.services.transactions.update(id, &data).await?;
    Ok(MessageResponse::new("Transaction updated successfully"))
}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/transactions/{id}",
    tag = "transactions",
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction deleted", body = MessageResponse),
        (status = 404, description = "Transaction not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_transaction(
    State(state): State<crate::AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.transactions.delete(id).await?;
    Ok(MessageResponse::new("Transaction deleted successfully"))
}
