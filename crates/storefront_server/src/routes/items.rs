//! `/items` handlers.

use super::NameFilter;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::schema::{Item, ItemCreate};
use storefront_core::{ItemService, NewItem, Session, SqliteItemRepository};

fn service(session: &Session) -> Result<ItemService<SqliteItemRepository<'_>>, ApiError> {
    Ok(ItemService::new(SqliteItemRepository::try_new(session)?))
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(payload) = payload?;
    let created = state
        .run(move |session| Ok(service(session)?.create(NewItem::from(payload))?))
        .await?;
    Ok((StatusCode::CREATED, Json(Item::from(created))))
}

pub async fn list_items(
    State(state): State<AppState>,
    filter: Result<Query<NameFilter>, QueryRejection>,
) -> Result<Json<Vec<Option<Item>>>, ApiError> {
    let Query(filter) = filter?;
    let items = state
        .run(move |session| Ok(service(session)?.list(filter.name.as_deref())?))
        .await?;
    Ok(Json(
        items
            .into_iter()
            .map(|item| item.map(Item::from))
            .collect(),
    ))
}

pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let item = state
        .run(move |session| Ok(service(session)?.get(id)?))
        .await?;
    Ok(Json(Item::from(item)))
}

/// Full replacement of an item's mutable fields; the body's `id` is ignored.
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let updated = state
        .run(move |session| Ok(service(session)?.update(id, NewItem::from(payload))?))
        .await?;
    Ok(Json(Item::from(updated)))
}

pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<String>, ApiError> {
    let Path(id) = id?;
    let message = state
        .run(move |session| Ok(service(session)?.delete(id)?))
        .await?;
    Ok(Json(message))
}
