//! Route handlers, one module per resource.

use serde::Deserialize;

pub mod items;
pub mod root;
pub mod stores;

/// Optional exact-name filter accepted by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct NameFilter {
    pub name: Option<String>,
}
