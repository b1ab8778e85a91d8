//! Tracker Set Export / Import
//!
//! JSON transfer of the tracker list: export as a downloadable file,
//! import from a user-selected one.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::models::Tracker;

const EXPORT_FILE_NAME: &str = "trackers.json";

/// Serialize the tracker list the way exports and persistence expect it:
/// a pretty-printed JSON array.
pub fn export_json(trackers: &[Tracker]) -> Result<String, String> {
    serde_json::to_string_pretty(trackers).map_err(|e| e.to_string())
}

/// Parse an imported document. Anything that is not a JSON array of
/// trackers is rejected; the caller decides how to surface that.
pub fn parse_trackers(text: &str) -> Result<Vec<Tracker>, String> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    if !value.is_array() {
        return Err("expected a JSON array of trackers".to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Offer the tracker list as a `trackers.json` download via a temporary
/// object URL on a synthetic anchor click.
pub fn download_trackers(trackers: &[Tracker]) -> Result<(), String> {
    let json = export_json(trackers)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

/// Read a selected file's full text content.
pub async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text()).await.map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| "file did not decode as text".to_string())
}

fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackerChanges;

    fn sample() -> Vec<Tracker> {
        let mut water = Tracker::new(1);
        water.apply(&TrackerChanges::title("Water"));
        water.apply(&TrackerChanges::count(3));
        let mut runs = Tracker::new(2);
        runs.apply(&TrackerChanges::category("Health"));
        runs.apply(&TrackerChanges::count(-1));
        vec![water, runs]
    }

    #[test]
    fn export_then_import_is_identity() {
        let trackers = sample();
        let json = export_json(&trackers).unwrap();
        assert_eq!(parse_trackers(&json).unwrap(), trackers);
    }

    #[test]
    fn export_is_pretty_printed() {
        let json = export_json(&sample()).unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\n    \"id\": 1"));
    }

    #[test]
    fn non_array_documents_are_rejected() {
        assert!(parse_trackers("{}").is_err());
        assert!(parse_trackers("42").is_err());
        assert!(parse_trackers("\"trackers\"").is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(parse_trackers("not json").is_err());
        assert!(parse_trackers("[{").is_err());
    }

    #[test]
    fn array_of_non_trackers_is_rejected() {
        assert!(parse_trackers("[1, 2, 3]").is_err());
    }

    #[test]
    fn empty_array_imports_as_empty_set() {
        assert_eq!(parse_trackers("[]").unwrap(), Vec::<Tracker>::new());
    }
}
