//! Route handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::HashMap;

use crate::details::{resolve, DetailsResponse};
use crate::http::server::AppState;

pub const ROOT_PATH: &str = "/";
pub const DETAILS_PATH: &str = "/items/{itemId}/subitems/{subitemId}";

const ROOT_BODY: &str = "Root page";

pub async fn root() -> &'static str {
    ROOT_BODY
}

/// Resolve the details payload from the named path segments.
///
/// `emptyParam` is looked up like the others but the template never binds it.
pub async fn item_details(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
) -> Json<DetailsResponse> {
    let item_id = params.get("itemId").map(String::as_str);
    let sub_item_id = params.get("subitemId").map(String::as_str);
    let empty_param = params.get("emptyParam").map(String::as_str);

    tracing::debug!(
        item_id = ?item_id,
        sub_item_id = ?sub_item_id,
        "Resolving item details"
    );

    Json(resolve(item_id, sub_item_id, empty_param, &state.metadata))
}
