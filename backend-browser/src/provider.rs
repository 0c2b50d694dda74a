use cip30::{EnableOutcome, WalletMetadata, WalletProvider};
use wasm_bindgen::JsValue;

use crate::api::InjectedApi;
use crate::interop;

/// One entry of the injected namespace, prior to activation.
pub struct InjectedProvider {
    object: JsValue,
}

impl InjectedProvider {
    pub(crate) fn new(object: JsValue) -> Self {
        Self { object }
    }
}

#[async_trait::async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    fn metadata(&self) -> Option<WalletMetadata> {
        Some(WalletMetadata {
            api_version: interop::get_string(&self.object, "apiVersion")?,
            icon: interop::get_string(&self.object, "icon")?,
            name: interop::get_string(&self.object, "name")?,
        })
    }

    async fn enable(&self) -> cip30::Result<EnableOutcome> {
        let settled = interop::call_method(&self.object, "enable", &[]).await?;
        // Legacy providers settle to a plain boolean; everything else is
        // taken to be the api handle.
        match settled.as_bool() {
            Some(granted) => Ok(EnableOutcome::Legacy(granted)),
            None => Ok(EnableOutcome::Api(Box::new(InjectedApi::new(settled)))),
        }
    }

    async fn is_enabled(&self) -> cip30::Result<bool> {
        let settled = interop::call_method(&self.object, "isEnabled", &[]).await?;
        settled
            .as_bool()
            .ok_or_else(|| cip30::Error::MalformedResponse {
                method: "isEnabled",
                detail: interop::detail(&settled),
            })
    }
}
