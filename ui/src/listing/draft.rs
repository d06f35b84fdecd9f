//! The in-progress listing and the rules it must satisfy before it may be sent.

use std::fmt;
use std::path::Path;

use api::{ImagePart, ListingPayload};
use mime::Mime;
use thiserror::Error;

/// Inline/toast text shown for every validation failure.
pub const VALIDATION_MESSAGE: &str = "Please fill out all fields correctly.";

/// Number of image slots on the form.
pub const IMAGE_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Room,
    Apartment,
    House,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Room, Category::Apartment, Category::House];

    /// Wire value sent as the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Room => "Room",
            Category::Apartment => "Apartment",
            Category::House => "House",
        }
    }

    /// Exact wire value; anything else (including "") is no category.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    First,
    Second,
    Third,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; IMAGE_SLOTS] = [ImageSlot::First, ImageSlot::Second, ImageSlot::Third];

    pub fn index(self) -> usize {
        match self {
            ImageSlot::First => 0,
            ImageSlot::Second => 1,
            ImageSlot::Third => 2,
        }
    }

    /// 1-based number shown to the user.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Input name/id of the slot's file picker (`image1`..`image3`).
    pub fn field_name(self) -> &'static str {
        match self {
            ImageSlot::First => "image1",
            ImageSlot::Second => "image2",
            ImageSlot::Third => "image3",
        }
    }
}

/// A picked image, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: Mime,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// `name` may be a bare file name (web) or a full path (desktop).
    pub fn new(name: &str, bytes: Vec<u8>) -> Self {
        let file_name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name)
            .to_string();
        let mime = guess_mime(&file_name);
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub fn to_part(&self) -> ImagePart {
        ImagePart {
            file_name: self.file_name.clone(),
            mime: self.mime.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

fn guess_mime(file_name: &str) -> Mime {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "bmp" => mime::IMAGE_BMP,
        "svg" => mime::IMAGE_SVG,
        "webp" | "avif" | "heic" => format!("image/{ext}")
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Why a draft may not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no category selected")]
    MissingCategory,
    #[error("description is empty")]
    MissingDescription,
    #[error("price is empty")]
    MissingPrice,
    #[error("price `{0}` is not a number")]
    PriceNotNumeric(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub category: Option<Category>,
    pub description: String,
    pub price: String,
    pub images: [Option<ImageFile>; IMAGE_SLOTS],
}

impl ListingDraft {
    pub fn image(&self, slot: ImageSlot) -> Option<&ImageFile> {
        self.images[slot.index()].as_ref()
    }

    pub fn set_image(&mut self, slot: ImageSlot, file: ImageFile) {
        self.images[slot.index()] = Some(file);
    }

    pub fn image_count(&self) -> usize {
        self.images.iter().flatten().count()
    }

    pub fn has_images(&self) -> bool {
        self.image_count() > 0
    }

    /// Check the required fields. Stricter than a bare emptiness test: a
    /// whitespace-only description counts as missing, and the price must be a
    /// finite decimal, so `Infinity`, `NaN` and hex literals are rejected.
    pub fn validate(&self) -> Result<Category, ValidationError> {
        let category = self.category.ok_or(ValidationError::MissingCategory)?;
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let price = self.price.trim();
        if price.is_empty() {
            return Err(ValidationError::MissingPrice);
        }
        if !is_numeric(price) {
            return Err(ValidationError::PriceNotNumeric(price.to_string()));
        }
        Ok(category)
    }

    /// Validate and assemble the multipart payload; images go in slot order.
    pub fn to_payload(&self) -> Result<ListingPayload, ValidationError> {
        let category = self.validate()?;
        let mut payload =
            ListingPayload::new(category.as_str(), self.description.as_str(), self.price.trim());
        for image in self.images.iter().flatten() {
            payload.push_image(image.to_part());
        }
        Ok(payload)
    }
}

fn is_numeric(raw: &str) -> bool {
    raw.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}
