//! Binary asset routes: resume download and page images.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::models::profile::ImageAsset;
use crate::state::AppState;

/// GET /resume
///
/// Serves the resume loaded at startup as an attachment.
pub async fn handle_resume(State(state): State<AppState>) -> Response {
    let resume = &state.composer.profile().resume;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        resume.file_name.replace('"', "")
    );
    (
        [
            (header::CONTENT_TYPE, resume.mime.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        resume.data.clone(),
    )
        .into_response()
}

/// GET /images/profile
pub async fn handle_profile_image(State(state): State<AppState>) -> Response {
    image_response(&state.composer.profile().profile_image)
}

/// GET /images/testimonial
pub async fn handle_testimonial_image(State(state): State<AppState>) -> Response {
    image_response(&state.composer.profile().testimonial_image)
}

fn image_response(image: &ImageAsset) -> Response {
    (
        [(header::CONTENT_TYPE, image.content_type)],
        image.data.clone(),
    )
        .into_response()
}
