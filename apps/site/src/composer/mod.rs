// Page Composer
// Maps a sidebar menu choice to the ordered static content for that page,
// and owns the global style appended after every page.

pub mod assets;
pub mod blocks;
pub mod sections;

use std::path::Path;

use tracing::{debug, info};

use crate::composer::assets::load_assets;
use crate::composer::blocks::ContentBlock;
use crate::errors::AssetError;
use crate::models::menu::MenuChoice;
use crate::models::profile::{Profile, SiteConfig};

/// Styles applied after the page content so they win over earlier rules.
pub const GLOBAL_STYLE: &str = r#"
.stApp {
    background-color: #000000;
}
.sidebar .sidebar-content {
    background-color: #333333;
    position: fixed;
}
"#;

/// Immutable after `initialize`; safe to share across requests.
#[derive(Debug, Clone)]
pub struct PageComposer {
    profile: Profile,
    stylesheet: String,
}

impl PageComposer {
    /// Loads every asset named by `site` from `asset_dir` and builds the profile.
    ///
    /// Any missing or unreadable file aborts initialization.
    pub async fn initialize(site: SiteConfig, asset_dir: &Path) -> Result<Self, AssetError> {
        info!("Loading site assets from {}", asset_dir.display());
        let assets = load_assets(asset_dir, &site.assets).await?;

        let profile = Profile {
            site,
            profile_image: assets.profile_image,
            testimonial_image: assets.testimonial_image,
            resume: assets.resume,
        };
        info!(
            "Profile ready for {} (resume: {}, {} bytes)",
            profile.site.name,
            profile.resume.file_name,
            profile.resume.data.len()
        );

        Ok(PageComposer {
            profile,
            stylesheet: assets.stylesheet,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn site(&self) -> &SiteConfig {
        &self.profile.site
    }

    /// Contents of the site stylesheet, injected before the page content.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Returns the content blocks for `choice`. Total and side-effect free.
    pub fn render(&self, choice: MenuChoice) -> Vec<ContentBlock> {
        debug!("Composing page: {choice}");
        match choice {
            MenuChoice::Home => sections::home(&self.profile),
            MenuChoice::Projects => sections::projects(&self.profile),
            MenuChoice::Contact => sections::contact(&self.profile),
            MenuChoice::Testimonials => sections::testimonials(&self.profile),
            MenuChoice::Education => sections::education(&self.profile),
        }
    }

    pub fn apply_global_style(&self) -> &'static str {
        GLOBAL_STYLE
    }
}
