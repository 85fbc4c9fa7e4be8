//! Book model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::timestamp;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Key into the fixed category table
    pub category_id: i32,
    #[serde(with = "timestamp")]
    #[schema(value_type = String, example = "2024-03-01 10:15:42")]
    pub created_at: NaiveDateTime,
    /// Null until the first update. Listing does not select this column.
    #[serde(default, with = "timestamp::option")]
    #[sqlx(default)]
    #[schema(value_type = Option<String>, example = json!(null))]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create book request (JSON body)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookInput {
    pub name: String,
    pub category_id: i32,
}

impl BookInput {
    /// Decode a JSON body without rejecting it.
    ///
    /// A field with the wrong type falls back to its zero value while the
    /// other fields are kept; an unparseable body gives all zero values.
    pub fn from_json_lenient(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::warn!("Malformed book payload, keeping usable fields: {}", e);
            let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
            Self {
                name: value
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or_default(),
                category_id: value
                    .get("category_id")
                    .and_then(Value::as_i64)
                    .and_then(|id| i32::try_from(id).ok())
                    .unwrap_or(0),
            }
        })
    }
}

/// Update book request (form-encoded fields, from the body or the query string)
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateBookForm {
    pub name: Option<String>,
    /// Numeric category id; anything else is stored as 0
    pub category_id: Option<String>,
}

impl UpdateBookForm {
    /// Fill fields missing here from `fallback`; fields already set win.
    pub fn or(self, fallback: UpdateBookForm) -> Self {
        Self {
            name: self.name.or(fallback.name),
            category_id: self.category_id.or(fallback.category_id),
        }
    }
}

impl From<UpdateBookForm> for BookInput {
    fn from(form: UpdateBookForm) -> Self {
        Self {
            category_id: form
                .category_id
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(0),
            name: form.name.unwrap_or_default(),
        }
    }
}
