//! How a successful body becomes the value a caller asked for.
//!
//! Callers pick the decoder by type: [`PlainText`] hands back the raw
//! string, [`Json<T>`] runs it through `serde_json`.

use crate::error::ServiceError;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

/// Turns trimmed success text into an output value.
pub trait DecodeBody {
    type Output;

    /// `text` is already trimmed; it may be empty.
    fn decode(text: String) -> Result<Self::Output, ServiceError>;
}

/// Raw text, never parsed.
#[derive(Debug, Clone, Copy)]
pub struct PlainText;

impl DecodeBody for PlainText {
    type Output = String;

    fn decode(text: String) -> Result<String, ServiceError> {
        Ok(text)
    }
}

/// Structured JSON decode into `T`; an empty body yields `T::default()`.
#[derive(Debug, Clone, Copy)]
pub struct Json<T>(PhantomData<T>);

impl<T> DecodeBody for Json<T>
where
    T: DeserializeOwned + Default,
{
    type Output = T;

    #[track_caller]
    fn decode(text: String) -> Result<T, ServiceError> {
        if text.trim().is_empty() {
            return Ok(T::default());
        }

        Ok(serde_json::from_str(&text)?)
    }
}
