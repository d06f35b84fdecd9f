//! Displayable URIs for picked images.
//!
//! Web builds hand out blob object URLs, which must be revoked once the
//! preview is gone; native builds inline the bytes as a `data:` URI.

use super::draft::{ImageFile, ImageSlot, IMAGE_SLOTS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSet {
    slots: [Option<String>; IMAGE_SLOTS],
}

impl PreviewSet {
    pub fn get(&self, slot: ImageSlot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    /// Store `uri` for `slot`, returning the URI it replaces.
    pub fn set(&mut self, slot: ImageSlot, uri: String) -> Option<String> {
        self.slots[slot.index()].replace(uri)
    }

    /// Remove the preview for `slot`, returning it for release.
    pub fn take(&mut self, slot: ImageSlot) -> Option<String> {
        self.slots[slot.index()].take()
    }

    /// Drop every preview, returning the URIs so the caller can [`release`] them.
    pub fn clear(&mut self) -> Vec<String> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Build a preview URI for `file`; `None` if the platform refuses.
pub fn preview_uri(file: &ImageFile) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        object_url(file)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Some(data_uri(file))
    }
}

/// Free whatever backs `uri`. No-op for `data:` URIs.
pub fn release(uri: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if uri.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(uri);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = uri;
    }
}

#[cfg(target_arch = "wasm32")]
fn object_url(file: &ImageFile) -> Option<String> {
    use web_sys::{Blob, BlobPropertyBag, Url};

    let array = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(file.mime.essence_str());
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts).ok()?;
    Url::create_object_url_with_blob(&blob).ok()
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn data_uri(file: &ImageFile) -> String {
    use base64::Engine as _;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
    format!("data:{};base64,{encoded}", file.mime.essence_str())
}
