//! Generic JSON encode/decode helpers.
//!
//! [`encode`] turns any serializable value into its JSON text; [`decode`]
//! parses JSON text into a target type, which supplies the value's behavior.
//! Arrays preserve element order; object key order is up to the serializer
//! and should not be relied on.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CssBuildError;

/// Serializes `value` to its textual JSON representation.
///
/// # Examples
///
/// ```rust
/// let json = cssbuild::json::encode(&vec![1, 2, 3])?;
/// assert_eq!(json, "[1,2,3]");
/// # Ok::<(), cssbuild::CssBuildError>(())
/// ```
pub fn encode<T: Serialize>(value: &T) -> Result<String, CssBuildError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses `json` into a value of type `T`.
///
/// The target type plays the role of the shape: the parsed data comes back
/// with `T`'s methods available on it. Fails with
/// [`CssBuildError::Json`] when the input is malformed.
///
/// # Examples
///
/// ```rust
/// use cssbuild::geometry::Rectangle;
///
/// let rect: Rectangle = cssbuild::json::decode(r#"{"width":10.0,"height":20.0}"#)?;
/// assert_eq!(rect.area(), 200.0);
/// # Ok::<(), cssbuild::CssBuildError>(())
/// ```
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, CssBuildError> {
    Ok(serde_json::from_str(json)?)
}
