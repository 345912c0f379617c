//! Asset manifest fetching.
//!
//! The browser's fetch API is async, so the manifest arrives some time after
//! `app_init`; the scene renders with the built-in manifest until then.

#[cfg(target_arch = "wasm32")]
use orrery_engine::{AssetError, AssetManifest};

/// Manifest file name, relative to the asset base URL.
pub const MANIFEST_FILE: &str = "assets.json";

/// Join a base URL and a relative asset path with exactly one slash.
pub fn asset_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Fetch and parse `<base_url>/assets.json`.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_manifest(base_url: &str) -> Result<AssetManifest, AssetError> {
    let text = fetch_text(&asset_url(base_url, MANIFEST_FILE)).await?;
    AssetManifest::from_json(&text)
}

#[cfg(target_arch = "wasm32")]
fn js_err(e: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Fetch(format!("{:?}", e))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, AssetError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let win = web_sys::window().ok_or_else(|| AssetError::Fetch("no window".into()))?;
    let resp_val = JsFuture::from(win.fetch_with_str(url)).await.map_err(js_err)?;
    let resp: web_sys::Response = resp_val.dyn_into().map_err(js_err)?;

    if !resp.ok() {
        return Err(AssetError::Fetch(format!(
            "{}: HTTP {} {}",
            url,
            resp.status(),
            resp.status_text()
        )));
    }

    let text_val = JsFuture::from(resp.text().map_err(js_err)?).await.map_err(js_err)?;
    text_val
        .as_string()
        .ok_or_else(|| AssetError::Fetch("response.text() was not a string".into()))
}
