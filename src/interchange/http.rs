use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegisteredUser {
  pub id: i64,
  pub email: String,
  #[serde(default)]
  pub is_admin: bool,
}

// A TokenPayload is what the backend hands back from a successful login; `access_token` is
// opaque to us and only ever replayed as a bearer token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TokenPayload {
  pub access_token: String,
  #[serde(default)]
  pub token_type: Option<String>,
  #[serde(default)]
  pub user_id: Option<i64>,
  #[serde(default)]
  pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Product {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price: f64,
  pub stock: i64,
  #[serde(default, deserialize_with = "lenient_timestamp")]
  pub created_at: Option<NaiveDateTime>,
  #[serde(default, deserialize_with = "lenient_timestamp")]
  pub updated_at: Option<NaiveDateTime>,
}

// The backend renders naive python datetimes; anything we can't read is dropped rather than
// failing the whole catalog.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(deserializer)?;
  Ok(raw.and_then(|value| value.parse::<NaiveDateTime>().ok()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProductPayload {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub stock: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorPayload {
  #[serde(default)]
  pub detail: serde_json::Value,
}

impl ErrorPayload {
  // String details are shown as-is; structured ones (validation error lists) as compact json.
  pub fn message(&self) -> Option<String> {
    match &self.detail {
      serde_json::Value::Null => None,
      serde_json::Value::String(s) if s.is_empty() => None,
      serde_json::Value::String(s) => Some(s.clone()),
      other => Some(other.to_string()),
    }
  }
}
