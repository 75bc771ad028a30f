use sea_orm::ActiveValue::Set;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{entities::movie, error::AppError};

/// Raw movie payload as sent by clients, keyed by column name.
pub type MovieBody = Map<String, Value>;

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "duration", "price"];
pub const MOVIE_FIELDS: [&str; 4] = ["name", "description", "duration", "price"];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    Unknown(String),
    #[error("field `{0}` has an unusable value")]
    Invalid(String),
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::Unknown(_) => AppError::WrongKey,
            // the store would refuse the value, so it is reported like any other rejected write
            FieldError::Invalid(_) => AppError::Conflict,
        }
    }
}

/// Copies every field of `body` onto `model`. Only known movie columns are
/// accepted; `id` is never writable through here.
pub fn apply_fields(model: &mut movie::ActiveModel, body: &MovieBody) -> Result<(), FieldError> {
    for (key, value) in body {
        match key.as_str() {
            "name" => model.name = Set(as_string(key, value)?),
            "description" => {
                let description = match value {
                    Value::Null => None,
                    other => Some(as_string(key, other)?),
                };
                model.description = Set(description);
            }
            "duration" => model.duration = Set(as_integer(key, value)?),
            "price" => model.price = Set(as_number(key, value)?),
            _ => return Err(FieldError::Unknown(key.clone())),
        }
    }
    Ok(())
}

fn as_string(key: &str, value: &Value) -> Result<String, FieldError> {
    value.as_str().map(str::to_string).ok_or_else(|| FieldError::Invalid(key.to_string()))
}

fn as_integer(key: &str, value: &Value) -> Result<i32, FieldError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| FieldError::Invalid(key.to_string()))
}

fn as_number(key: &str, value: &Value) -> Result<f64, FieldError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|n: &f64| n.is_finite()).ok_or_else(|| FieldError::Invalid(key.to_string()))
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
    pub count: usize,
    pub data: Vec<movie::Model>,
}
