//! Multipart body of a "create post" request.

use mime::Mime;
use reqwest::multipart::{Form, Part};

use crate::ApiError;

/// Field name shared by every image part.
pub const IMAGES_FIELD: &str = "images";

#[derive(Debug, Clone, PartialEq)]
pub struct ImagePart {
    pub file_name: String,
    pub mime: Mime,
    pub bytes: Vec<u8>,
}

/// Ordered multipart payload: text fields first, then zero or more images
/// under [`IMAGES_FIELD`] in the order they were pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPayload {
    fields: Vec<(&'static str, String)>,
    images: Vec<ImagePart>,
}

impl ListingPayload {
    pub fn new(
        kind: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            fields: vec![
                ("type", kind.into()),
                ("description", description.into()),
                ("price", price.into()),
            ],
            images: Vec::new(),
        }
    }

    pub fn push_image(&mut self, image: ImagePart) {
        self.images.push(image);
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn images(&self) -> &[ImagePart] {
        &self.images
    }

    /// Part names exactly as they go on the wire.
    pub fn part_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .map(|(name, _)| *name)
            .chain(self.images.iter().map(|_| IMAGES_FIELD))
            .collect()
    }

    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for image in self.images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(image.mime.as_ref())
                .map_err(|_| ApiError::InvalidMime(image.mime.to_string()))?;
            form = form.part(IMAGES_FIELD, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> ImagePart {
        ImagePart {
            file_name: name.into(),
            mime: mime::IMAGE_PNG,
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[test]
    fn text_fields_come_first_in_fixed_order() {
        let payload = ListingPayload::new("Room", "Sunny room", "450");
        assert_eq!(payload.part_names(), vec!["type", "description", "price"]);
        assert_eq!(payload.field("type"), Some("Room"));
        assert_eq!(payload.field("price"), Some("450"));
        assert!(payload.images().is_empty());
    }

    #[test]
    fn images_share_one_field_name_in_push_order() {
        let mut payload = ListingPayload::new("House", "Garden", "1200");
        payload.push_image(image("front.png"));
        payload.push_image(image("kitchen.png"));

        assert_eq!(
            payload.part_names(),
            vec!["type", "description", "price", "images", "images"]
        );
        let names: Vec<_> = payload.images().iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["front.png", "kitchen.png"]);
    }

    #[test]
    fn form_builds_with_image_parts() {
        let mut payload = ListingPayload::new("Apartment", "Two bedrooms", "900");
        payload.push_image(image("a.png"));
        assert!(payload.into_form().is_ok());
    }
}
