pub mod content;
pub mod init;
pub mod remote;
pub mod serve;

use anyhow::{Context, Result};
use site_core::ContentPatch;

/// Read and validate a JSON patch from `file`, or stdin for "-"
pub fn read_patch(file: &str) -> Result<ContentPatch> {
    let input = if file == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Could not read {}", file))?
    };

    let patch = ContentPatch::from_json_str(&input).map_err(|e| match &e.field {
        Some(field) => anyhow::anyhow!("Invalid patch ({}): {}", field, e.message),
        None => anyhow::anyhow!("Invalid patch: {}", e.message),
    })?;
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_patch_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("patch.json");
        std::fs::write(&path, r#"{"phone": "555-0000", "woodStock": {"Oak": false}}"#).unwrap();

        let patch = read_patch(path.to_str().unwrap()).unwrap();
        assert_eq!(patch.phone.as_deref(), Some("555-0000"));
        assert_eq!(patch.field_names(), vec!["phone", "woodStock"]);
    }

    #[test]
    fn test_read_patch_rejects_invalid() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("patch.json");
        std::fs::write(&path, r#"{"projects": [{"image": "/a.jpg"}]}"#).unwrap();

        let err = read_patch(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("projects"));
    }

    #[test]
    fn test_read_patch_missing_file() {
        assert!(read_patch("/nonexistent/patch.json").is_err());
    }
}
