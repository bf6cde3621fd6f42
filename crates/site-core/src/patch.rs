//! Partial updates to the site content record

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::content::{Project, Review, SiteContent};
use crate::error::ValidationError;

/// Editable fields, in their wire (camelCase) form
pub const EDITABLE_FIELDS: &[&str] = &[
    "headerVideoUrl",
    "landscapeImgUrl",
    "firewoodImgUrl",
    "youtubeLinks",
    "phone",
    "email",
    "facebookUrl",
    "address",
    "projects",
    "woodStock",
    "woodImages",
    "materialImages",
    "suppliesStock",
    "reviews",
];

/// A subset of the editable fields. Absent fields are left untouched;
/// collections replace the stored value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landscape_img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewood_img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wood_stock: Option<BTreeMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wood_images: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_images: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplies_stock: Option<BTreeMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

impl ContentPatch {
    /// Validate an untrusted JSON body into a patch.
    ///
    /// The body must be an object whose keys are all editable fields and whose
    /// values match the field types. `id` and `section` are read-only, and
    /// `null` is never accepted as a value.
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = value else {
            return Err(ValidationError::new("Expected a JSON object"));
        };

        let mut patch = Self::default();
        for (key, value) in map {
            if value.is_null() {
                return Err(ValidationError::for_field(
                    &key,
                    format!("{} must not be null", key),
                ));
            }

            match key.as_str() {
                "headerVideoUrl" => patch.header_video_url = Some(typed(&key, value)?),
                "landscapeImgUrl" => patch.landscape_img_url = Some(typed(&key, value)?),
                "firewoodImgUrl" => patch.firewood_img_url = Some(typed(&key, value)?),
                "youtubeLinks" => patch.youtube_links = Some(typed(&key, value)?),
                "phone" => patch.phone = Some(typed(&key, value)?),
                "email" => patch.email = Some(typed(&key, value)?),
                "facebookUrl" => patch.facebook_url = Some(typed(&key, value)?),
                "address" => patch.address = Some(typed(&key, value)?),
                "projects" => patch.projects = Some(typed(&key, value)?),
                "woodStock" => patch.wood_stock = Some(typed(&key, value)?),
                "woodImages" => patch.wood_images = Some(typed(&key, value)?),
                "materialImages" => patch.material_images = Some(typed(&key, value)?),
                "suppliesStock" => patch.supplies_stock = Some(typed(&key, value)?),
                "reviews" => patch.reviews = Some(typed(&key, value)?),
                "id" | "section" => {
                    return Err(ValidationError::for_field(
                        &key,
                        format!("{} is read-only", key),
                    ));
                }
                _ => {
                    return Err(ValidationError::for_field(
                        &key,
                        format!("Unrecognized field: {}", key),
                    ));
                }
            }
        }

        Ok(patch)
    }

    /// Parse and validate a raw JSON document
    pub fn from_json_str(input: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ValidationError::new(format!("Malformed JSON: {}", e)))?;
        Self::from_json(value)
    }

    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Wire names of the supplied fields
    pub fn field_names(&self) -> Vec<&'static str> {
        let supplied = [
            self.header_video_url.is_some(),
            self.landscape_img_url.is_some(),
            self.firewood_img_url.is_some(),
            self.youtube_links.is_some(),
            self.phone.is_some(),
            self.email.is_some(),
            self.facebook_url.is_some(),
            self.address.is_some(),
            self.projects.is_some(),
            self.wood_stock.is_some(),
            self.wood_images.is_some(),
            self.material_images.is_some(),
            self.supplies_stock.is_some(),
            self.reviews.is_some(),
        ];

        EDITABLE_FIELDS
            .iter()
            .zip(supplied)
            .filter_map(|(name, present)| present.then_some(*name))
            .collect()
    }

    /// Overwrite the supplied fields of `content`, leaving the rest alone
    pub fn apply_to(&self, content: &mut SiteContent) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        set(&mut content.header_video_url, &self.header_video_url);
        set(&mut content.landscape_img_url, &self.landscape_img_url);
        set(&mut content.firewood_img_url, &self.firewood_img_url);
        set(&mut content.youtube_links, &self.youtube_links);
        set(&mut content.phone, &self.phone);
        set(&mut content.email, &self.email);
        set(&mut content.facebook_url, &self.facebook_url);
        set(&mut content.address, &self.address);
        set(&mut content.projects, &self.projects);
        set(&mut content.wood_stock, &self.wood_stock);
        set(&mut content.wood_images, &self.wood_images);
        set(&mut content.material_images, &self.material_images);
        set(&mut content.supplies_stock, &self.supplies_stock);
        set(&mut content.reviews, &self.reviews);
    }
}

fn typed<T: DeserializeOwned>(field: &str, value: Value) -> Result<T, ValidationError> {
    serde_json::from_value(value)
        .map_err(|e| ValidationError::for_field(field, format!("Invalid {}: {}", field, e)))
}
