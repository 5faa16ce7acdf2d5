//! Puzzle catalog
//!
//! The host page supplies the celebrity records; the game only reads names and
//! passes the image / link handles back to the renderer untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label shown on the outbound link when an entry has no brand of its own
pub const FALLBACK_BRAND_LABEL: &str = "Brand";

/// A single puzzle: who is in the photo and where the result links to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleEntry {
    /// Canonical name guesses are matched against
    pub name: String,
    /// Opaque image handle (asset path or URL)
    pub image_ref: String,
    /// Link revealed once the round ends
    pub outbound_link: String,
    /// Display label for the outbound link
    #[serde(default)]
    pub brand_label: Option<String>,
}

impl PuzzleEntry {
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        outbound_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_ref: image_ref.into(),
            outbound_link: outbound_link.into(),
            brand_label: None,
        }
    }

    pub fn with_brand(mut self, label: impl Into<String>) -> Self {
        self.brand_label = Some(label.into());
        self
    }

    /// Brand label, or the generic fallback
    pub fn brand_display(&self) -> &str {
        self.brand_label.as_deref().unwrap_or(FALLBACK_BRAND_LABEL)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,
    #[error("catalog entry {index} has a blank name")]
    BlankName { index: usize },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Non-empty, ordered list of puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<PuzzleEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and unnamed entries
    pub fn new(entries: Vec<PuzzleEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = entries.iter().position(|e| e.name.trim().is_empty()) {
            return Err(CatalogError::BlankName { index });
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<PuzzleEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The puzzles shipped with the game
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                PuzzleEntry::new(
                    "Lady Gaga",
                    "assets/celeb_pics/ladyGaga.png",
                    "https://www.capitalfm.com/",
                )
                .with_brand("Capital FM"),
                PuzzleEntry::new(
                    "Lewis Capaldi",
                    "assets/celeb_pics/lewisCapaldi.jpg",
                    "https://www.heart.co.uk/",
                )
                .with_brand("Heart"),
                PuzzleEntry::new(
                    "Cher",
                    "assets/celeb_pics/cher.png",
                    "https://www.goldradio.com/",
                )
                .with_brand("Gold Radio"),
                PuzzleEntry::new(
                    "Noel Gallagher",
                    "assets/celeb_pics/noelGallagher.png",
                    "https://www.radiox.co.uk/",
                )
                .with_brand("Radio X"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PuzzleEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PuzzleEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Lady Gaga", "Lewis Capaldi", "Cher", "Noel Gallagher"]);
        assert_eq!(catalog.get(2).map(|e| e.brand_display()), Some("Gold Radio"));
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_brand_fallback() {
        let entry = PuzzleEntry::new("Someone", "img.png", "https://example.com/");
        assert_eq!(entry.brand_display(), FALLBACK_BRAND_LABEL);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_blank_name_rejected() {
        let entries = vec![
            PuzzleEntry::new("Cher", "a.png", "https://a/"),
            PuzzleEntry::new("   ", "b.png", "https://b/"),
        ];
        assert!(matches!(
            Catalog::new(entries),
            Err(CatalogError::BlankName { index: 1 })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "Cher", "image_ref": "cher.png", "outbound_link": "https://www.goldradio.com/", "brand_label": "Gold Radio"},
            {"name": "Adele", "image_ref": "adele.png", "outbound_link": "https://example.com/"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().brand_display(), "Gold Radio");
        assert_eq!(catalog.get(1).unwrap().brand_display(), "Brand");
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("{not json"), Err(CatalogError::Json(_))));
        assert!(matches!(
            Catalog::from_json(r#"[{"name": "Cher"}]"#),
            Err(CatalogError::Json(_))
        ));
    }
}
