//! Static biographical records for the CV site.
//!
//! `SiteConfig` is the literal configuration (who, how to reach them, where
//! their work lives). `Profile` is that configuration joined with the binary
//! assets loaded at startup. Both are immutable once built.

use std::path::Path;

use bytes::Bytes;
use serde::Serialize;

use crate::errors::ConfigError;

/// MIME type served for the resume download.
pub const RESUME_MIME: &str = "application/octet-stream";

// ────────────────────────────────────────────────────────────────────────────
// Link lists
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedLink {
    pub label: String,
    pub url: String,
}

/// Insertion-ordered `label → url` map with unique labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkList(Vec<NamedLink>);

impl LinkList {
    pub fn new<L, U>(entries: impl IntoIterator<Item = (L, U)>) -> Result<Self, ConfigError>
    where
        L: Into<String>,
        U: Into<String>,
    {
        let mut links: Vec<NamedLink> = Vec::new();
        for (label, url) in entries {
            let label = label.into();
            if links.iter().any(|l| l.label == label) {
                return Err(ConfigError::DuplicateLink(label));
            }
            links.push(NamedLink {
                label,
                url: url.into(),
            });
        }
        Ok(LinkList(links))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedLink> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Site configuration
// ────────────────────────────────────────────────────────────────────────────

/// Asset file locations, relative to the asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFiles {
    pub stylesheet: String,
    pub resume: String,
    pub profile_image: String,
    pub testimonial_image: String,
}

impl Default for AssetFiles {
    fn default() -> Self {
        AssetFiles {
            stylesheet: "styles/main.css".to_string(),
            resume: "assets/Paulo_Augusto_Giavoni_CV_EN_.pdf".to_string(),
            profile_image: "assets/personalfoto.png".to_string(),
            testimonial_image: "assets/mickey.jpeg".to_string(),
        }
    }
}

/// Immutable configuration handed to the page composer at construction.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub page_title: String,
    pub page_icon: String,
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub social_media: LinkList,
    pub projects: LinkList,
    pub assets: AssetFiles,
}

const RESEARCHGATE_BIM_PAPER: &str = "https://www.researchgate.net/publication/374950113_BIM_METHODOLOGY_APPLIED_TO_THE_DIGITALIZATION_AND_MODERNIZATION_OF_THE_PAULO_AFONSO_IV_POWER_PLANT_CHESF_BAHIA";

impl SiteConfig {
    /// The published site's configuration.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(SiteConfig {
            page_title: "Digital CV | Paulo Giavoni".to_string(),
            page_icon: "👋".to_string(),
            name: "Paulo Giavoni".to_string(),
            description: "2D/3D CAD Specialist, assisting enterprises by supporting \
                          data-driven decision-making."
                .to_string(),
            email: "paulo.giavoni@gmail.com".to_string(),
            phone: "+55 11 96524-8049".to_string(),
            social_media: LinkList::new([
                ("LinkedIn", "https://www.linkedin.com/in/paulogiavoni/"),
                ("ResearchGate", RESEARCHGATE_BIM_PAPER),
            ])?,
            projects: LinkList::new([(
                "🏆 BIM Methodology Applied to the Digitalization and Modernization \
                 of the Paulo Afonso IV Power Plant (CHESF, Bahia)",
                RESEARCHGATE_BIM_PAPER,
            )])?,
            assets: AssetFiles::default(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Loaded assets
// ────────────────────────────────────────────────────────────────────────────

/// The downloadable resume. Read once at startup and shared thereafter.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub data: Bytes,
    pub file_name: String,
    pub mime: &'static str,
}

impl ResumeDocument {
    pub fn new(path: &Path, data: Bytes) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());
        ResumeDocument {
            data,
            file_name,
            mime: RESUME_MIME,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub data: Bytes,
    pub content_type: &'static str,
}

impl ImageAsset {
    pub fn new(path: &Path, data: Bytes) -> Self {
        ImageAsset {
            data,
            content_type: image_content_type(path),
        }
    }
}

fn image_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Site configuration joined with its loaded assets.
#[derive(Debug, Clone)]
pub struct Profile {
    pub site: SiteConfig,
    pub profile_image: ImageAsset,
    pub testimonial_image: ImageAsset,
    pub resume: ResumeDocument,
}
