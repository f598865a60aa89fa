//! `/stores` handlers. Stores have no update endpoint.

use super::NameFilter;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::schema::{Store, StoreCreate};
use storefront_core::{NewStore, Session, SqliteStoreRepository, StoreService};

fn service(session: &Session) -> Result<StoreService<SqliteStoreRepository<'_>>, ApiError> {
    Ok(StoreService::new(SqliteStoreRepository::try_new(session)?))
}

pub async fn create_store(
    State(state): State<AppState>,
    payload: Result<Json<StoreCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Store>), ApiError> {
    let Json(payload) = payload?;
    let created = state
        .run(move |session| Ok(service(session)?.create(NewStore::from(payload))?))
        .await?;
    Ok((StatusCode::CREATED, Json(Store::from(created))))
}

pub async fn list_stores(
    State(state): State<AppState>,
    filter: Result<Query<NameFilter>, QueryRejection>,
) -> Result<Json<Vec<Option<Store>>>, ApiError> {
    let Query(filter) = filter?;
    let stores = state
        .run(move |session| Ok(service(session)?.list(filter.name.as_deref())?))
        .await?;
    Ok(Json(
        stores
            .into_iter()
            .map(|store| store.map(Store::from))
            .collect(),
    ))
}

pub async fn get_store(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Store>, ApiError> {
    let Path(id) = id?;
    let store = state
        .run(move |session| Ok(service(session)?.get(id)?))
        .await?;
    Ok(Json(Store::from(store)))
}

pub async fn delete_store(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<String>, ApiError> {
    let Path(id) = id?;
    let message = state
        .run(move |session| Ok(service(session)?.delete(id)?))
        .await?;
    Ok(Json(message))
}
