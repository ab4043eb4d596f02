use std::path::Path;

use bytes::Bytes;
use tracing::info;

use crate::errors::AssetError;
use crate::models::profile::{AssetFiles, ImageAsset, ResumeDocument};

/// Everything read from disk at startup.
#[derive(Debug, Clone)]
pub struct LoadedAssets {
    pub stylesheet: String,
    pub resume: ResumeDocument,
    pub profile_image: ImageAsset,
    pub testimonial_image: ImageAsset,
}

/// Reads the stylesheet, resume and both images under `asset_dir`.
///
/// Files are read in that order and the first failure aborts the load.
pub async fn load_assets(asset_dir: &Path, files: &AssetFiles) -> Result<LoadedAssets, AssetError> {
    let css_path = asset_dir.join(&files.stylesheet);
    let stylesheet = read_asset(&css_path).await?;
    let stylesheet = String::from_utf8(stylesheet.to_vec()).map_err(|e| AssetError::Read {
        path: css_path.clone(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;

    let resume_path = asset_dir.join(&files.resume);
    let resume = ResumeDocument::new(&resume_path, read_asset(&resume_path).await?);

    let profile_path = asset_dir.join(&files.profile_image);
    let profile_image = ImageAsset::new(&profile_path, read_asset(&profile_path).await?);

    let testimonial_path = asset_dir.join(&files.testimonial_image);
    let testimonial_image =
        ImageAsset::new(&testimonial_path, read_asset(&testimonial_path).await?);

    Ok(LoadedAssets {
        stylesheet,
        resume,
        profile_image,
        testimonial_image,
    })
}

async fn read_asset(path: &Path) -> Result<Bytes, AssetError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| AssetError::from_io(path.to_path_buf(), e))?;
    info!(path = %path.display(), bytes = data.len(), "Loaded asset");
    Ok(Bytes::from(data))
}
