//! CRUD routes over password records

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};

use crate::context::AppContext;
use crate::error::ApiError;
use vault_core::{encrypt, hash_secret, DeleteResult, InsertResult, NewRecord, RecordId, RecordView};

const PASSWORD_REQUIRED: &str = "Password is required";
const ID_REQUIRED: &str = "ID is required";
const NOT_FOUND: &str = "Password not found";
const INVALID_BODY: &str = "Invalid request body";

type Ctx = State<Arc<AppContext>>;

/// Body of `POST /`
#[derive(Debug, Default, Deserialize)]
pub struct CreateRecordRequest {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordResponse {
    pub success: bool,
    pub result: InsertResult,
}

#[derive(Debug, Serialize)]
pub struct GetRecordResponse {
    pub password: RecordView,
}

#[derive(Debug, Serialize)]
pub struct DeleteRecordResponse {
    pub success: bool,
    pub message: &'static str,
    pub result: DeleteResult,
}

/// Build the API router
///
/// There is no update route; PUT/PATCH are answered with 405.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(list_records).post(create_record).delete(delete_without_id))
        .route("/:id", get(get_record).delete(delete_record))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(ctx))
}

/// Parse a path id; malformed ids are a store-level fault, not a client error
fn parse_id(id: &str) -> Result<RecordId, ApiError> {
    Ok(id.parse::<RecordId>()?)
}

/// `GET /` - every record, secrets decrypted for display
async fn list_records(State(ctx): Ctx) -> Result<Json<Vec<RecordView>>, ApiError> {
    let records = ctx.store.find_all().await?;
    debug!("Listing {} records", records.len());

    let views = records.iter().map(|r| r.to_view(&ctx.key)).collect();
    Ok(Json(views))
}

/// `GET /:id`
async fn get_record(
    State(ctx): Ctx,
    Path(id): Path<String>,
) -> Result<Json<GetRecordResponse>, ApiError> {
    let id = parse_id(&id)?;

    let record = ctx
        .store
        .find_one(&id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok(Json(GetRecordResponse {
        password: record.to_view(&ctx.key),
    }))
}

/// `POST /` - hash and encrypt the secret, then store the record
async fn create_record(
    State(ctx): Ctx,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRecordResponse>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected request body: {}", e);
        ApiError::BadRequest(INVALID_BODY)
    })?;

    let password = request
        .password
        .filter(|p| !p.is_empty())
        .ok_or(ApiError::BadRequest(PASSWORD_REQUIRED))?;

    let encrypted_secret = encrypt(&password, &ctx.key)?;

    let hash_cost = ctx.hash_cost;
    let hashed_secret = tokio::task::spawn_blocking(move || hash_secret(&password, &hash_cost))
        .await
        .map_err(|e| ApiError::Internal(format!("hashing task failed: {}", e)))??;

    let result = ctx
        .store
        .insert(NewRecord {
            site: request.site.unwrap_or_default(),
            username: request.username.unwrap_or_default(),
            hashed_secret,
            encrypted_secret,
        })
        .await?;

    info!("Created record: {}", result.inserted_id);
    Ok((
        StatusCode::CREATED,
        Json(CreateRecordResponse {
            success: true,
            result,
        }),
    ))
}

/// `DELETE /:id`
async fn delete_record(
    State(ctx): Ctx,
    Path(id): Path<String>,
) -> Result<Json<DeleteRecordResponse>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest(ID_REQUIRED));
    }
    let id = parse_id(&id)?;

    let result = ctx.store.delete_one(&id).await?;
    if result.deleted_count == 0 {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    info!("Deleted record: {}", id);
    Ok(Json(DeleteRecordResponse {
        success: true,
        message: "Password deleted successfully",
        result,
    }))
}

/// `DELETE /`
async fn delete_without_id() -> ApiError {
    ApiError::BadRequest(ID_REQUIRED)
}
