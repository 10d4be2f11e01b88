use crate::GridConfigObject;
use hexgrid::{anyhow, validator::Validate, GridConfig};
use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};

/// An extension trait for `Result` to allow us to add custom methods
pub trait ResultExt<T> {
    /// Helper to convert any result to a result with a JS error value.
    fn into_js(self) -> Result<T, JsValue>;
}

impl<T> ResultExt<T> for Result<T, anyhow::Error> {
    fn into_js(self) -> Result<T, JsValue> {
        self.map_err(|error| js_sys::Error::new(&format!("{:#}", error)).into())
    }
}

/// Serialize a Rust value into a plain JS value (objects, arrays, etc.)
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(value).map_err(|err| {
        js_sys::Error::new(&format!("Error serializing value: {}", err)).into()
    })
}

/// Like [to_js], but casts the output to a specific TS-typed JS type.
pub fn to_js_typed<T, J>(value: &T) -> Result<J, JsValue>
where
    T: Serialize + ?Sized,
    J: JsCast,
{
    to_js(value).map(JsCast::unchecked_into)
}

/// Deserialize a JS object into a [GridConfig]. The input should be an
/// **object**, not a JSON string. Missing fields are populated from the
/// default. Will return an error if deserialization fails in any way.
pub fn deserialize_config(
    input: &GridConfigObject,
) -> Result<GridConfig, JsValue> {
    JsValue::into_serde(input).map_err(|err| {
        js_sys::Error::new(&format!("Error deserializing config: {}", err))
            .into()
    })
}

/// Deserialize and validate a JS config object
pub fn validate_config(
    input: &GridConfigObject,
) -> Result<GridConfig, JsValue> {
    let config = deserialize_config(input)?;
    config.validate().map_err::<JsValue, _>(|err| {
        js_sys::Error::new(&format!("Invalid config: {}", err)).into()
    })?;
    Ok(config)
}
