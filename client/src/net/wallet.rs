//! Bridge to the wallet object injected on `window` (Petra-style API).
//!
//! The wallet is used only as a signer: `connect`/`account` return the
//! address, `signAndSubmitTransaction` returns the pending hash. Finality is
//! awaited separately through `net::node`.
//!
//! Values cross the JS boundary as JSON text so payloads stay typed on the
//! Rust side without a serde/JS bridge crate.

use events::EntryFunctionPayload;
use events::node::{parse_account_address, parse_submit_hash};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::types::TxError;

/// Handle to `window[name]`. Looked up on every call so a wallet installed
/// or unlocked after page load is picked up.
#[derive(Clone, Debug)]
pub struct InjectedWallet {
    name: String,
}

impl InjectedWallet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn is_available(&self) -> bool {
        self.object().is_ok()
    }

    /// Prompt the user to connect; returns the account address.
    pub async fn connect(&self) -> Result<String, TxError> {
        let value = self.call("connect", &[]).await?;
        Ok(parse_account_address(&from_js(&value)?)?)
    }

    /// Address of an already-connected account.
    pub async fn account(&self) -> Result<String, TxError> {
        let value = self.call("account", &[]).await?;
        Ok(parse_account_address(&from_js(&value)?)?)
    }

    pub async fn is_connected(&self) -> bool {
        self.call("isConnected", &[])
            .await
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub async fn disconnect(&self) -> Result<(), TxError> {
        self.call("disconnect", &[]).await.map(|_| ())
    }

    /// Sign and submit; returns the transaction hash.
    pub async fn sign_and_submit(&self, payload: &EntryFunctionPayload) -> Result<String, TxError> {
        let arg = to_js(payload)?;
        let value = self.call("signAndSubmitTransaction", &[arg]).await?;
        Ok(parse_submit_hash(&from_js(&value)?)?)
    }

    fn object(&self) -> Result<JsValue, TxError> {
        let window = web_sys::window().ok_or_else(|| TxError::WalletUnavailable(self.name.clone()))?;
        let object = js_sys::Reflect::get(&window, &JsValue::from_str(&self.name))
            .map_err(|_| TxError::WalletUnavailable(self.name.clone()))?;
        if object.is_undefined() || object.is_null() {
            return Err(TxError::WalletUnavailable(self.name.clone()));
        }
        Ok(object)
    }

    async fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, TxError> {
        let object = self.object()?;
        let function = js_sys::Reflect::get(&object, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| TxError::BadResponse(format!("{}.{method} is not a function", self.name)))?;

        let result = function
            .apply(&object, &js_sys::Array::from_iter(args.iter()))
            .map_err(|e| TxError::Rejected(js_error_text(&e)))?;

        if result.has_type::<js_sys::Promise>() {
            let promise = result.unchecked_into::<js_sys::Promise>();
            JsFuture::from(promise)
                .await
                .map_err(|e| TxError::Rejected(js_error_text(&e)))
        } else {
            Ok(result)
        }
    }
}

fn to_js(value: &impl Serialize) -> Result<JsValue, TxError> {
    let text = serde_json::to_string(value).map_err(|e| TxError::BadResponse(e.to_string()))?;
    js_sys::JSON::parse(&text).map_err(|e| TxError::BadResponse(js_error_text(&e)))
}

fn from_js(value: &JsValue) -> Result<Value, TxError> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    let text = js_sys::JSON::stringify(value).map_err(|e| TxError::BadResponse(js_error_text(&e)))?;
    serde_json::from_str(&String::from(text)).map_err(|e| TxError::BadResponse(e.to_string()))
}

/// Wallet rejections are `{ code, message }` objects; prefer the message.
fn js_error_text(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
