pub mod files;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Site
        .route("/", get(pages::handle_page))
        .route("/resume", get(files::handle_resume))
        .route("/images/profile", get(files::handle_profile_image))
        .route("/images/testimonial", get(files::handle_testimonial_image))
        // Block API
        .route("/api/v1/pages/:choice", get(pages::handle_page_blocks))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::composer::tests::fixture_composer;
    use crate::models::profile::SiteConfig;

    async fn test_router() -> (Router, TempDir) {
        let (composer, dir) = fixture_composer(SiteConfig::builtin().unwrap()).await;
        let state = AppState {
            composer: Arc::new(composer),
        };
        (build_router(state), dir)
    }

    async fn get_path(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_root_renders_home_by_default() {
        let (router, _dir) = test_router().await;
        let response = get_path(router, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<title>Digital CV | Paulo Giavoni</title>"));
        assert!(html.contains("<h1>Paulo Giavoni</h1>"));
        let home = html.find("value=\"home\"").unwrap();
        let checked = html.find("checked").unwrap();
        let projects = html.find("value=\"projects\"").unwrap();
        assert!(home < checked && checked < projects);
        assert!(html.contains("sandbox=\"allow-scripts allow-popups\""));
        assert!(html.contains("download=\"Paulo_Augusto_Giavoni_CV_EN_.pdf\""));
    }

    #[tokio::test]
    async fn test_page_query_selects_contact() {
        let (router, _dir) = test_router().await;
        let html = body_text(get_path(router, "/?page=contact").await).await;
        assert!(html.contains("paulo.giavoni@gmail.com"));
        assert!(html.contains("+55 11 96524-8049"));
        assert!(!html.contains("Work History"));
    }

    #[tokio::test]
    async fn test_unknown_page_is_bad_request() {
        let (router, _dir) = test_router().await;
        let response = get_path(router, "/?page=blog").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_resume_download_headers() {
        let (router, _dir) = test_router().await;
        let response = get_path(router, "/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/octet-stream"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Paulo_Augusto_Giavoni_CV_EN_.pdf\""
        );
        assert_eq!(body_text(response).await, "%PDF-1.4 fixture");
    }

    #[tokio::test]
    async fn test_images_served_with_content_type() {
        let (router, _dir) = test_router().await;
        let response = get_path(router.clone(), "/images/profile").await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let response = get_path(router, "/images/testimonial").await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    }

    #[tokio::test]
    async fn test_block_api_returns_projects() {
        let (router, _dir) = test_router().await;
        let response = get_path(router, "/api/v1/pages/projects").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["choice"], "projects");
        let links: Vec<&Value> = body["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|b| b["type"] == "link")
            .collect();
        assert_eq!(links.len(), 1);
    }

    #[tokio::test]
    async fn test_block_api_unknown_choice_is_404() {
        let (router, _dir) = test_router().await;
        let response = get_path(router, "/api/v1/pages/blog").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _dir) = test_router().await;
        let body: Value =
            serde_json::from_str(&body_text(get_path(router, "/health").await).await).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
