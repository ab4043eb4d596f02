//! Page routes: the HTML site and its JSON block view.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::composer::blocks::ContentBlock;
use crate::errors::AppError;
use crate::models::menu::MenuChoice;
use crate::render::{render_page, PageView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PageBlocksResponse {
    pub choice: MenuChoice,
    pub blocks: Vec<ContentBlock>,
}

/// GET /?page=<slug>
///
/// Renders the selected page. No `page` parameter means Home.
pub async fn handle_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let choice = match query.page.as_deref() {
        None | Some("") => MenuChoice::default(),
        Some(slug) => slug
            .parse::<MenuChoice>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
    };

    let composer = &state.composer;
    let blocks = composer.render(choice);
    let html = render_page(&PageView {
        site: composer.site(),
        stylesheet: composer.stylesheet(),
        choice,
        blocks: &blocks,
        global_style: composer.apply_global_style(),
    });

    Ok(Html(html))
}

/// GET /api/v1/pages/:choice
///
/// Returns the composed blocks for a page as JSON.
pub async fn handle_page_blocks(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageBlocksResponse>, AppError> {
    let choice = slug
        .parse::<MenuChoice>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(PageBlocksResponse {
        choice,
        blocks: state.composer.render(choice),
    }))
}
