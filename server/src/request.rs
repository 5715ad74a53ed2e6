mod book;
mod loan;

pub use self::{book::*, loan::*};

use crate::error::ErrorStatus;
use axum::body::Bytes;
use axum::Json;
use serde::de::DeserializeOwned;

/// Decodes a JSON request body. An empty body reads as `{}`.
pub fn json_body<T>(body: &Bytes) -> Result<T, ErrorStatus>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() {
        return Ok(T::default());
    }
    Json::<T>::from_bytes(body)
        .map(|Json(value)| value)
        .map_err(ErrorStatus::from)
}
