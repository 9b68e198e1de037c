use log::debug;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// # Errors
///
/// Returns an error if the browser denies access to the clipboard.
pub async fn write_text(text: &str) -> Result<(), String> {
    let promise = gloo_utils::window().navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map_err(|err| js_error(&err))?;
    debug!("copied \"{text}\" to clipboard");
    Ok(())
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
