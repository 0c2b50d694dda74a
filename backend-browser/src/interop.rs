//! Shared plumbing for calling into host objects.
//!
//! The host surface is untyped, so every access goes through `Reflect`
//! and every suspending call settles through a `Promise`. Hosts are
//! allowed to answer synchronously; non-promise returns are accepted as
//! already settled values.

use js_sys::{Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{BackendError, Result};

/// Readable rendering of a host value for diagnostics.
pub(crate) fn detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Property read that treats host faults, `undefined` and `null` all as
/// absence.
pub(crate) fn get(target: &JsValue, property: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(property))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// String property, `None` when missing or not a string.
pub(crate) fn get_string(target: &JsValue, property: &str) -> Option<String> {
    get(target, property)?.as_string()
}

pub(crate) fn has_function(target: &JsValue, method: &str) -> bool {
    get(target, method).is_some_and(|value| value.is_function())
}

/// Call `method` on `target` and await its settled result.
pub(crate) async fn call_method(
    target: &JsValue,
    method: &'static str,
    args: &[JsValue],
) -> Result<JsValue> {
    let function: Function = get(target, method)
        .ok_or(BackendError::NotCallable(method))?
        .dyn_into()
        .map_err(|_| BackendError::NotCallable(method))?;

    log::trace!("forwarding `{method}` to the wallet host");
    let returned = match args {
        [] => function.call0(target),
        [a] => function.call1(target, a),
        [a, b] => function.call2(target, a, b),
        _ => unreachable!("contract calls take at most two arguments"),
    }
    .map_err(|err| BackendError::Rejected {
        method,
        detail: detail(&err),
    })?;

    JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(|err| BackendError::Rejected {
            method,
            detail: detail(&err),
        })
}

/// Decode a settled host value into a contract type.
pub(crate) fn decode<T: DeserializeOwned>(method: &'static str, value: JsValue) -> Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|err| BackendError::Decode {
        method,
        detail: err.to_string(),
    })
}

/// Decode with `undefined`/`null` mapped to `None`.
pub(crate) fn decode_optional<T: DeserializeOwned>(
    method: &'static str,
    value: JsValue,
) -> Result<Option<T>> {
    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        decode(method, value).map(Some)
    }
}
