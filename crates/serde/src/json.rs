//! JSON serialization wrapper functions for TBX documents.
//!
//! This module provides thin wrappers around `serde_json` functions,
//! allowing TBX documents to be serialized and deserialized using the
//! serde derives on the `glossia-tbx` model types.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Deserialize a TBX document from a JSON string.
///
/// # Examples
///
/// ```
/// use glossia_serde::json::from_json_str;
/// use glossia_tbx::TbxDocument;
///
/// let json = r#"{"lang": "en", "text": {"body": {"termEntry": []}}}"#;
/// let document: TbxDocument = from_json_str(json)?;
/// assert!(document.is_empty());
/// # Ok::<(), glossia_serde::SerdeError>(())
/// ```
pub fn from_json_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}

/// Serialize a TBX document to a JSON string.
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Serialize a TBX document to a pretty-printed JSON string.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserialize a TBX document from a JSON byte slice.
pub fn from_json_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_slice(v)?)
}

/// Serialize a TBX document to a JSON byte vector.
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec(value)?)
}

/// Serialize a TBX document to a `serde_json::Value`.
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Deserialize a TBX document from a `serde_json::Value`.
pub fn from_json_value<T>(value: serde_json::Value) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}
