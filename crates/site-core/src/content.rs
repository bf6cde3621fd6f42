use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Section key of the canonical content row
pub const MAIN_SECTION: &str = "main";

/// The single editable record behind every public page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub id: i64,
    pub section: String,
    pub header_video_url: String,
    pub landscape_img_url: String,
    pub firewood_img_url: String,
    pub youtube_links: Vec<String>,
    pub phone: String,
    pub email: String,
    pub facebook_url: String,
    pub address: String,
    pub projects: Vec<Project>,
    /// Wood type name -> in stock
    pub wood_stock: BTreeMap<String, bool>,
    /// Wood type name -> image URL
    pub wood_images: BTreeMap<String, String>,
    /// Material name -> image URL
    pub material_images: BTreeMap<String, String>,
    /// Material name -> in stock
    pub supplies_stock: BTreeMap<String, bool>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Review {
    pub customer: String,
    pub statement: String,
}

impl Review {
    pub fn new(customer: &str, statement: &str) -> Self {
        Self {
            customer: customer.to_string(),
            statement: statement.to_string(),
        }
    }
}

impl Default for SiteContent {
    /// Seed values for a freshly created row. `id` is assigned by the store.
    fn default() -> Self {
        Self {
            id: 0,
            section: MAIN_SECTION.to_string(),
            header_video_url: String::new(),
            landscape_img_url:
                "/attached_assets/stock_images/gravel_sand_rock_lan_fff2742e.jpg".to_string(),
            firewood_img_url:
                "/attached_assets/stock_images/pile_of_split_hardwo_043374dc.jpg".to_string(),
            youtube_links: Vec::new(),
            phone: "(512) 635-3857".to_string(),
            email: "leonslandscapesupplies@gmail.com".to_string(),
            facebook_url: "https://www.facebook.com/p/Leons-Landscape-Supplies-61573570174762/"
                .to_string(),
            address: "657 county road 150, Georgetown, TX, United States, Texas".to_string(),
            projects: Vec::new(),
            wood_stock: default_wood_stock(),
            wood_images: BTreeMap::new(),
            material_images: BTreeMap::new(),
            supplies_stock: BTreeMap::new(),
            reviews: default_reviews(),
        }
    }
}

fn default_wood_stock() -> BTreeMap<String, bool> {
    ["Oak", "Mesquite", "Pecan"]
        .into_iter()
        .map(|wood| (wood.to_string(), true))
        .collect()
}

fn default_reviews() -> Vec<Review> {
    vec![
        Review::new(
            "Sarah J.",
            "The river rock we ordered for our garden was exactly what we were looking for. Prompt delivery and very professional service!",
        ),
        Review::new(
            "Michael R.",
            "Leon's is our go-to for firewood every winter. The Mesquite wood burns beautifully and smells amazing. Highly recommend!",
        ),
        Review::new(
            "David L.",
            "Great pricing on crushed limestone. The coverage calculator on their site made it easy to figure out exactly how much I needed.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = SiteContent::default();
        assert_eq!(content.section, MAIN_SECTION);
        assert_eq!(content.phone, "(512) 635-3857");
        assert_eq!(content.wood_stock.len(), 3);
        assert!(content.wood_stock.values().all(|in_stock| *in_stock));
        assert_eq!(content.reviews.len(), 3);
        assert_eq!(content.reviews[0].customer, "Sarah J.");
        assert!(content.projects.is_empty());
        assert!(content.header_video_url.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(SiteContent::default()).unwrap();
        assert_eq!(json["woodStock"]["Oak"], true);
        assert!(!json["facebookUrl"].as_str().unwrap().is_empty());
        assert!(json["youtubeLinks"].is_array());
        assert!(json.get("wood_stock").is_none());
    }

    #[test]
    fn test_project_requires_image() {
        let result: Result<Project, _> =
            serde_json::from_value(serde_json::json!({"name": "Patio"}));
        assert!(result.is_err());
    }
}
