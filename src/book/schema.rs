use getset::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// One entry of a user's book collection.  Field order is the JSON key order.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct BookRecord {
    link: String,
    title: String,
    cover: String,
    /// Combined publication info line (author / press / date / price).
    /// Splitting it into sub-fields was abandoned upstream; the line is kept
    /// whole.
    #[serde(rename = "pub")]
    pub_info: String,
    updation: String,
    status: String,
    labels: Vec<String>,
}
