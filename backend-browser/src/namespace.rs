use cip30::{HostNamespace, WalletApi, WalletProvider};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::api::InjectedApi;
use crate::error::{BackendError, Result};
use crate::interop;
use crate::provider::InjectedProvider;

/// The injected wallet namespace (`window.cardano`).
///
/// Provider enumeration follows the object's own key order, which is
/// whatever the installed extensions produced; it is not guaranteed
/// stable across page loads.
pub struct InjectedNamespace {
    object: Object,
}

impl InjectedNamespace {
    /// Wrap an already located namespace object.
    pub fn new(object: Object) -> Self {
        Self { object }
    }

    /// Locate the `cardano` namespace in the current browsing context.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(BackendError::NoWindow)?;
        let namespace = interop::get(window.as_ref(), "cardano")
            .ok_or(BackendError::NamespaceMissing)?
            .dyn_into()
            .map_err(|_| BackendError::NamespaceMissing)?;
        Ok(Self::new(namespace))
    }
}

#[async_trait::async_trait(?Send)]
impl HostNamespace for InjectedNamespace {
    fn keys(&self) -> Vec<String> {
        Object::keys(&self.object)
            .iter()
            .filter_map(|key| key.as_string())
            .collect()
    }

    fn provider(&self, key: &str) -> Option<Box<dyn WalletProvider>> {
        let entry = Reflect::get(self.object.as_ref(), &JsValue::from_str(key)).ok()?;
        if entry.is_undefined() || entry.is_null() {
            return None;
        }
        Some(Box::new(InjectedProvider::new(entry)))
    }

    async fn sign_data(&self, address: &str, message: &str) -> cip30::Result<String> {
        let settled = interop::call_method(
            self.object.as_ref(),
            "signData",
            &[JsValue::from_str(address), JsValue::from_str(message)],
        )
        .await?;
        Ok(interop::decode("signData", settled)?)
    }

    fn legacy_api(&self) -> Box<dyn WalletApi> {
        Box::new(InjectedApi::new(self.object.clone().into()))
    }
}
