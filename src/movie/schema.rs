use getset::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// One entry of a user's movie collection.  Field order is the JSON key
/// order; `updation` and `rating` are omitted when the item block carries no
/// date or rating span.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct MovieRecord {
    link: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updation: Option<String>,
    /// Digit run encoded in the rating span's CSS class, e.g. "45" for a
    /// `rating45-t` span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<String>,
    labels: Vec<String>,
    cover: String,
    info: String,
}
