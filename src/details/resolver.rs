//! Parameter defaulting and response shaping.

use super::types::{DetailsResponse, Metadata, ParamValue, TITLE};

/// Build the details response from raw path parameters.
///
/// Absent values become the sentinel `-1`; anything supplied, including an
/// empty string, is used as is. Never fails.
pub fn resolve(
    item_id: Option<&str>,
    sub_item_id: Option<&str>,
    empty_param: Option<&str>,
    metadata: &Metadata,
) -> DetailsResponse {
    let item = ParamValue::from_raw(item_id);
    let sub_item = ParamValue::from_raw(sub_item_id);

    DetailsResponse {
        title: TITLE.to_string(),
        details: format!("Item: {}, Subitem: {}", item, sub_item),
        empty: ParamValue::from_raw(empty_param),
        app: format!("{} v.{}", metadata.name, metadata.version),
    }
}
