use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One row of an announcement's feature list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub text: String,
}

/// A single announcement record, as supplied by the announcements file.
///
/// Only `title` and `description` are required; everything else renders
/// conditionally. Field names follow the camelCase keys of the data files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub badge: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub link: Option<String>,
    pub button_text: Option<String>,
    pub external: Option<bool>,
}

impl Announcement {
    pub fn button_label(&self) -> &str {
        self.button_text.as_deref().unwrap_or("Learn More")
    }
}

pub fn parse_announcements(data: &str) -> serde_json::Result<Vec<Announcement>> {
    serde_json::from_str(data)
}

pub fn load_announcements(path: &Path) -> Result<Vec<Announcement>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read announcements file {}", path.display()))?;
    let announcements = parse_announcements(&data)
        .with_context(|| format!("failed to parse announcements file {}", path.display()))?;
    Ok(announcements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let data = r#"[{
            "title": "Summer Menu",
            "description": "Fresh seasonal dishes",
            "image": "img/summer.jpg",
            "badge": "New",
            "features": [{"icon": "fa-leaf", "text": "Locally sourced"}],
            "link": "https://example.com/menu",
            "buttonText": "See the menu",
            "external": true
        }]"#;

        let parsed = parse_announcements(data).unwrap();
        assert_eq!(parsed.len(), 1);
        let a = &parsed[0];
        assert_eq!(a.title, "Summer Menu");
        assert_eq!(a.badge.as_deref(), Some("New"));
        assert_eq!(a.features.as_ref().unwrap()[0].text, "Locally sourced");
        assert_eq!(a.button_label(), "See the menu");
        assert_eq!(a.external, Some(true));
    }

    #[test]
    fn test_parse_minimal_record() {
        let data = r#"[{"title": "Hours", "description": "Open late on Fridays"}]"#;

        let parsed = parse_announcements(data).unwrap();
        let a = &parsed[0];
        assert!(a.image.is_none());
        assert!(a.features.is_none());
        assert_eq!(a.button_label(), "Learn More");
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let data = r#"[{"title": "T", "description": "D", "priority": 3}]"#;
        assert_eq!(parse_announcements(data).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_announcements("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_announcements("{not json").is_err());
        assert!(parse_announcements(r#"[{"title": "missing description"}]"#).is_err());
    }
}
