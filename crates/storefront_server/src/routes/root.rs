use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct About {
    #[serde(rename = "About")]
    pub about: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn read_root() -> Json<About> {
    Json(About {
        about: "Sample Rust Storefront Application",
    })
}

/// Liveness probe; does not touch the database.
pub async fn get_healthz() -> Json<Health> {
    Json(Health { status: "ok" })
}
