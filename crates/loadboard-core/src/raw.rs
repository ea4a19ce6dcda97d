// crates/loadboard-core/src/raw.rs
use serde::Deserialize;

/// A scalar that the dataset may encode either as a JSON number or a string.
///
/// Mock catalogs are loosely typed: ids show up as `1` or `"L-001"`, weights
/// as `500` or `"500 kg"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawScalar {
    /// Render the scalar as display text.
    pub fn into_text(self) -> String {
        match self {
            RawScalar::Int(i) => i.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Text(s) => s,
        }
    }
}

/// Raw listing structure as it comes from JSON.
/// We do *not* expose this type from the public API docs; callers work with
/// the validated [`Listing`](crate::Listing).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub id: RawScalar,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub cargo_type: String,
    #[serde(default)]
    pub weight: Option<RawScalar>,
    #[serde(default)]
    pub date: Option<String>,
}

pub type ListingsRaw = Vec<RawListing>;
