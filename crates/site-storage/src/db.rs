//! Database operations

use site_core::{ContentPatch, MAIN_SECTION, SiteContent};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::schema::{CREATE_SITE_CONTENT, ContentRow, INSERT_DEFAULT_CONTENT, SELECT_CONTENT};
use crate::{Result, StorageError};

/// Content store backed by SQLite.
///
/// Constructed once at start-up and shared with request handlers; cloning
/// only clones the pool handle.
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open (or create) the database at `db_path`, defaulting to the platform
    /// data directory, and create the schema if needed.
    pub async fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let path = match db_path {
            Some(path) => path,
            None => Self::default_db_path()?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            // Concurrent writers wait instead of failing with "database is locked"
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let storage = Self { pool };
        storage.migrate().await?;

        info!("Opened content database at {}", path.display());
        Ok(storage)
    }

    /// `<data dir>/site.db`
    pub fn default_db_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "leons", "leons-site")
            .map(|dirs| dirs.data_dir().join("site.db"))
            .ok_or(StorageError::NoDataDir)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_SITE_CONTENT).execute(&self.pool).await?;
        Ok(())
    }

    /// Return the canonical content row, creating it with defaults if absent.
    pub async fn get_content(&self) -> Result<SiteContent> {
        self.ensure_content().await?;

        let row: Option<ContentRow> = sqlx::query_as(SELECT_CONTENT)
            .bind(MAIN_SECTION)
            .fetch_optional(&self.pool)
            .await?;

        row.map(SiteContent::from)
            .ok_or_else(|| StorageError::NotFound(MAIN_SECTION.to_string()))
    }

    /// Overwrite the supplied fields in a single statement and return the
    /// updated row. Fields absent from `patch` are never written.
    pub async fn update_content(&self, patch: &ContentPatch) -> Result<SiteContent> {
        if patch.is_empty() {
            return self.get_content().await;
        }

        self.ensure_content().await?;

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE site_content SET ");
        push_assignments(&mut query, patch);
        query
            .push(" WHERE section = ")
            .push_bind(MAIN_SECTION)
            .push(" RETURNING *");

        let row: Option<ContentRow> = query.build_query_as().fetch_optional(&self.pool).await?;
        let content = row
            .map(SiteContent::from)
            .ok_or_else(|| StorageError::NotFound(MAIN_SECTION.to_string()))?;

        debug!(fields = ?patch.field_names(), "Updated site content");
        Ok(content)
    }

    /// Insert the default row unless one already exists for the section.
    /// A single statement, so concurrent first reads cannot create two rows.
    async fn ensure_content(&self) -> Result<()> {
        let defaults = SiteContent::default();

        let result = sqlx::query(INSERT_DEFAULT_CONTENT)
            .bind(&defaults.section)
            .bind(&defaults.header_video_url)
            .bind(&defaults.landscape_img_url)
            .bind(&defaults.firewood_img_url)
            .bind(Json(&defaults.youtube_links))
            .bind(&defaults.phone)
            .bind(&defaults.email)
            .bind(&defaults.facebook_url)
            .bind(&defaults.address)
            .bind(Json(&defaults.projects))
            .bind(Json(&defaults.wood_stock))
            .bind(Json(&defaults.wood_images))
            .bind(Json(&defaults.material_images))
            .bind(Json(&defaults.supplies_stock))
            .bind(Json(&defaults.reviews))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            info!("Created default site content");
        }
        Ok(())
    }
}

fn push_assignments(query: &mut QueryBuilder<'_, Sqlite>, patch: &ContentPatch) {
    let mut set = query.separated(", ");

    if let Some(value) = &patch.header_video_url {
        set.push("header_video_url = ").push_bind_unseparated(value.clone());
    }
    if let Some(value) = &patch.landscape_img_url {
        set.push("landscape_img_url = ").push_bind_unseparated(value.clone());
    }
    if let Some(value) = &patch.firewood_img_url {
        set.push("firewood_img_url = ").push_bind_unseparated(value.clone());
    }
    if let Some(value) = &patch.youtube_links {
        set.push("youtube_links = ").push_bind_unseparated(Json(value.clone()));
    }
    if let Some(value) = &patch.phone {
        set.push("phone = ").push_bind_unseparated(value.clone());
    }
    if let Some(value) = &patch.email {
        set.push("email = ").push_bind_unseparated(value.clone());
    }
    if let Some(value) = &patch.facebook_url {
        set.push("facebook_url = ").push_bind_unseparated(value.clone());
    }
    if let Some(value) = &patch.address {
        set.push("address = ").push_bind_unseparated(value.clone());
    }
    if let Some(value) = &patch.projects {
        set.push("projects = ").push_bind_unseparated(Json(value.clone()));
    }
    if let Some(value) = &patch.wood_stock {
        set.push("wood_stock = ").push_bind_unseparated(Json(value.clone()));
    }
    if let Some(value) = &patch.wood_images {
        set.push("wood_images = ").push_bind_unseparated(Json(value.clone()));
    }
    if let Some(value) = &patch.material_images {
        set.push("material_images = ").push_bind_unseparated(Json(value.clone()));
    }
    if let Some(value) = &patch.supplies_stock {
        set.push("supplies_stock = ").push_bind_unseparated(Json(value.clone()));
    }
    if let Some(value) = &patch.reviews {
        set.push("reviews = ").push_bind_unseparated(Json(value.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::{Project, Review};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    async fn create_test_storage() -> (Storage, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(Some(dir.path().join("test.db"))).await.unwrap();
        (storage, dir)
    }

    async fn row_count(storage: &Storage) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM site_content")
            .fetch_one(&storage.pool)
            .await
            .unwrap()
    }

    fn phone_patch(phone: &str) -> ContentPatch {
        ContentPatch {
            phone: Some(phone.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_creates_default_row_once() {
        let (storage, _dir) = create_test_storage().await;
        assert_eq!(row_count(&storage).await, 0);

        let first = storage.get_content().await.unwrap();
        assert_eq!(first.phone, "(512) 635-3857");
        assert_eq!(first.section, MAIN_SECTION);
        assert_eq!(first.wood_stock.get("Mesquite"), Some(&true));
        assert_eq!(first.reviews.len(), 3);

        let second = storage.get_content().await.unwrap();
        assert_eq!(second, first);
        assert_eq!(row_count(&storage).await, 1);
    }

    #[tokio::test]
    async fn test_stored_defaults_match_model() {
        let (storage, _dir) = create_test_storage().await;
        let content = storage.get_content().await.unwrap();

        let expected = SiteContent {
            id: content.id,
            ..SiteContent::default()
        };
        assert_eq!(content, expected);
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let (storage, _dir) = create_test_storage().await;

        let updated = storage.update_content(&phone_patch("555-0000")).await.unwrap();
        assert_eq!(updated.phone, "555-0000");

        let content = storage.get_content().await.unwrap();
        let expected = SiteContent {
            id: content.id,
            phone: "555-0000".to_string(),
            ..SiteContent::default()
        };
        assert_eq!(content, expected);
    }

    #[tokio::test]
    async fn test_update_touches_only_supplied_fields() {
        let (storage, _dir) = create_test_storage().await;
        storage.update_content(&phone_patch("555-0000")).await.unwrap();

        let patch = ContentPatch {
            projects: Some(vec![Project {
                name: "Backyard".to_string(),
                image: "/img/backyard.jpg".to_string(),
            }]),
            material_images: Some(BTreeMap::from([(
                "River Rock".to_string(),
                "/img/rock.jpg".to_string(),
            )])),
            ..Default::default()
        };
        let before = storage.get_content().await.unwrap();
        let updated = storage.update_content(&patch).await.unwrap();

        let mut expected = before.clone();
        patch.apply_to(&mut expected);
        assert_eq!(updated, expected);
        assert_eq!(updated.phone, "555-0000");
    }

    #[tokio::test]
    async fn test_collections_replace_wholesale() {
        let (storage, _dir) = create_test_storage().await;

        let patch = ContentPatch {
            wood_stock: Some(BTreeMap::from([("Cedar".to_string(), false)])),
            reviews: Some(vec![Review::new("Ana", "Fast delivery")]),
            ..Default::default()
        };
        let updated = storage.update_content(&patch).await.unwrap();

        assert_eq!(updated.wood_stock.len(), 1);
        assert_eq!(updated.wood_stock.get("Oak"), None);
        assert_eq!(updated.reviews, vec![Review::new("Ana", "Fast delivery")]);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let (storage, _dir) = create_test_storage().await;
        let patch = ContentPatch {
            email: Some("hello@example.com".to_string()),
            youtube_links: Some(vec!["https://youtu.be/abc".to_string()]),
            ..Default::default()
        };

        let once = storage.update_content(&patch).await.unwrap();
        let twice = storage.update_content(&patch).await.unwrap();
        assert_eq!(once, twice);
        assert_eq!(row_count(&storage).await, 1);
    }

    #[tokio::test]
    async fn test_empty_update_returns_current_row() {
        let (storage, _dir) = create_test_storage().await;
        let content = storage.update_content(&ContentPatch::default()).await.unwrap();
        assert_eq!(content.phone, "(512) 635-3857");
        assert_eq!(row_count(&storage).await, 1);
    }

    #[tokio::test]
    async fn test_update_on_empty_store_creates_row() {
        let (storage, _dir) = create_test_storage().await;
        let updated = storage.update_content(&phone_patch("555-1111")).await.unwrap();
        assert_eq!(updated.phone, "555-1111");
        assert_eq!(updated.email, "leonslandscapesupplies@gmail.com");
        assert_eq!(row_count(&storage).await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_reads_create_one_row() {
        let (storage, _dir) = create_test_storage().await;
        let (a, b) = tokio::join!(storage.get_content(), storage.get_content());
        assert_eq!(a.unwrap().id, b.unwrap().id);
        assert_eq!(row_count(&storage).await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_disjoint_updates() {
        let (storage, _dir) = create_test_storage().await;
        let email_patch = ContentPatch {
            email: Some("yard@example.com".to_string()),
            ..Default::default()
        };

        let first = storage.clone();
        let second = storage.clone();
        let phone = phone_patch("555-2222");
        let (a, b) = tokio::join!(
            tokio::spawn(async move { first.update_content(&phone).await }),
            tokio::spawn(async move { second.update_content(&email_patch).await }),
        );
        a.unwrap().unwrap();
        b.unwrap().unwrap();

        let content = storage.get_content().await.unwrap();
        assert_eq!(content.phone, "555-2222");
        assert_eq!(content.email, "yard@example.com");
        assert_eq!(row_count(&storage).await, 1);
    }

    #[tokio::test]
    async fn test_content_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.db");

        let storage = Storage::new(Some(path.clone())).await.unwrap();
        storage.update_content(&phone_patch("555-3333")).await.unwrap();
        storage.pool.close().await;

        let reopened = Storage::new(Some(path)).await.unwrap();
        assert_eq!(reopened.get_content().await.unwrap().phone, "555-3333");
    }
}
