//! Table definition and row mapping

use site_core::{Project, Review, SiteContent};
use sqlx::FromRow;
use sqlx::types::Json;
use std::collections::BTreeMap;

pub(crate) const CREATE_SITE_CONTENT: &str = r#"
CREATE TABLE IF NOT EXISTS site_content (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    section TEXT NOT NULL UNIQUE,
    header_video_url TEXT NOT NULL,
    landscape_img_url TEXT NOT NULL,
    firewood_img_url TEXT NOT NULL,
    youtube_links TEXT NOT NULL,
    phone TEXT NOT NULL,
    email TEXT NOT NULL,
    facebook_url TEXT NOT NULL,
    address TEXT NOT NULL,
    projects TEXT NOT NULL,
    wood_stock TEXT NOT NULL,
    wood_images TEXT NOT NULL,
    material_images TEXT NOT NULL,
    supplies_stock TEXT NOT NULL,
    reviews TEXT NOT NULL
)
"#;

/// Insert-if-absent keyed on the unique section
pub(crate) const INSERT_DEFAULT_CONTENT: &str = r#"
INSERT INTO site_content (
    section, header_video_url, landscape_img_url, firewood_img_url, youtube_links,
    phone, email, facebook_url, address, projects,
    wood_stock, wood_images, material_images, supplies_stock, reviews
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
ON CONFLICT(section) DO NOTHING
"#;

pub(crate) const SELECT_CONTENT: &str = "SELECT * FROM site_content WHERE section = ?";

/// Collection columns hold JSON text
#[derive(Debug, FromRow)]
pub(crate) struct ContentRow {
    id: i64,
    section: String,
    header_video_url: String,
    landscape_img_url: String,
    firewood_img_url: String,
    youtube_links: Json<Vec<String>>,
    phone: String,
    email: String,
    facebook_url: String,
    address: String,
    projects: Json<Vec<Project>>,
    wood_stock: Json<BTreeMap<String, bool>>,
    wood_images: Json<BTreeMap<String, String>>,
    material_images: Json<BTreeMap<String, String>>,
    supplies_stock: Json<BTreeMap<String, bool>>,
    reviews: Json<Vec<Review>>,
}

impl From<ContentRow> for SiteContent {
    fn from(row: ContentRow) -> Self {
        Self {
            id: row.id,
            section: row.section,
            header_video_url: row.header_video_url,
            landscape_img_url: row.landscape_img_url,
            firewood_img_url: row.firewood_img_url,
            youtube_links: row.youtube_links.0,
            phone: row.phone,
            email: row.email,
            facebook_url: row.facebook_url,
            address: row.address,
            projects: row.projects.0,
            wood_stock: row.wood_stock.0,
            wood_images: row.wood_images.0,
            material_images: row.material_images.0,
            supplies_stock: row.supplies_stock.0,
            reviews: row.reviews.0,
        }
    }
}
