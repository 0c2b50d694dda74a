use cip30::{CollateralSource, Paginate, WalletApi};
use wasm_bindgen::JsValue;

use crate::error::BackendError;
use crate::interop;

/// Api handle over a host object granted by `enable`.
///
/// Wraps either the distinct handle object a provider returned, or the
/// namespace object itself for providers on the legacy boolean
/// signature; both expose the same method surface.
pub struct InjectedApi {
    object: JsValue,
}

impl InjectedApi {
    pub(crate) fn new(object: JsValue) -> Self {
        Self { object }
    }
}

#[async_trait::async_trait(?Send)]
impl WalletApi for InjectedApi {
    async fn get_used_addresses(&self, paginate: Option<Paginate>) -> cip30::Result<Vec<String>> {
        let settled = match paginate {
            Some(paginate) => {
                let page = serde_wasm_bindgen::to_value(&paginate).map_err(|err| {
                    BackendError::Encode {
                        method: "getUsedAddresses",
                        detail: err.to_string(),
                    }
                })?;
                interop::call_method(&self.object, "getUsedAddresses", &[page]).await?
            }
            None => interop::call_method(&self.object, "getUsedAddresses", &[]).await?,
        };
        Ok(interop::decode("getUsedAddresses", settled)?)
    }

    async fn get_utxos(&self, value: Option<String>) -> cip30::Result<Option<Vec<String>>> {
        let settled = match value {
            Some(value) => {
                interop::call_method(&self.object, "getUtxos", &[JsValue::from_str(&value)]).await?
            }
            None => interop::call_method(&self.object, "getUtxos", &[]).await?,
        };
        Ok(interop::decode_optional("getUtxos", settled)?)
    }

    async fn get_collateral(&self) -> cip30::Result<Option<Vec<String>>> {
        let settled = interop::call_method(&self.object, "getCollateral", &[]).await?;
        Ok(interop::decode_optional("getCollateral", settled)?)
    }

    async fn experimental_get_collateral(&self) -> cip30::Result<Option<Vec<String>>> {
        let experimental = interop::get(&self.object, "experimental")
            .ok_or(BackendError::NotCallable("experimental.getCollateral"))?;
        let settled = interop::call_method(&experimental, "getCollateral", &[]).await?;
        Ok(interop::decode_optional("getCollateral", settled)?)
    }

    fn collateral_source(&self) -> CollateralSource {
        if interop::has_function(&self.object, "getCollateral") {
            CollateralSource::Primary
        } else if interop::get(&self.object, "experimental")
            .is_some_and(|experimental| interop::has_function(&experimental, "getCollateral"))
        {
            CollateralSource::Experimental
        } else {
            CollateralSource::Unsupported
        }
    }

    async fn sign_tx(&self, tx: &str, partial_sign: Option<bool>) -> cip30::Result<String> {
        let tx = JsValue::from_str(tx);
        let settled = match partial_sign {
            Some(partial_sign) => {
                interop::call_method(
                    &self.object,
                    "signTx",
                    &[tx, JsValue::from_bool(partial_sign)],
                )
                .await?
            }
            // leave the flag undefined so the host applies its default
            None => interop::call_method(&self.object, "signTx", &[tx]).await?,
        };
        Ok(interop::decode("signTx", settled)?)
    }

    async fn submit_tx(&self, tx: &str) -> cip30::Result<String> {
        let settled =
            interop::call_method(&self.object, "submitTx", &[JsValue::from_str(tx)]).await?;
        Ok(interop::decode("submitTx", settled)?)
    }

    async fn get_reward_address(&self) -> cip30::Result<String> {
        let settled = interop::call_method(&self.object, "getRewardAddress", &[]).await?;
        Ok(interop::decode("getRewardAddress", settled)?)
    }

    async fn get_reward_addresses(&self) -> cip30::Result<Vec<String>> {
        let settled = interop::call_method(&self.object, "getRewardAddresses", &[]).await?;
        Ok(interop::decode("getRewardAddresses", settled)?)
    }

    async fn sign_data(&self, address: &str, message: &str) -> cip30::Result<String> {
        let settled = interop::call_method(
            &self.object,
            "signData",
            &[JsValue::from_str(address), JsValue::from_str(message)],
        )
        .await?;
        Ok(interop::decode("signData", settled)?)
    }
}
