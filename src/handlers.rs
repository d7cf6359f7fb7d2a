use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde::Deserialize;

use crate::domain::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ConversionRequest {
    pub url: String,
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Backend OK")
}

pub async fn convert(
    req: web::Json<ConversionRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    info!("received conversion request: {}", req.url);

    match state.coordinator.convert(&req.url).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(AppError::InvalidUrl) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid YouTube URL"
        })),
        Err(AppError::Upstream { message, status }) => {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": message,
                "status": status
            }))
        }
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/convert").route(web::post().to(convert)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::api::{ApiClient, ApiConfig};
    use crate::application::ConversionCoordinator;

    fn state_for(server: &mockito::ServerGuard) -> web::Data<AppState> {
        let config = ApiConfig {
            api_key: "test-key".to_string(),
            api_host: "youtube-mp36.p.rapidapi.com".to_string(),
            base_url: server.url(),
        };
        web::Data::new(AppState {
            coordinator: ConversionCoordinator::new(ApiClient::new(config)),
        })
    }

    #[actix_web::test]
    async fn test_index_reports_liveness() {
        let server = mockito::Server::new_async().await;
        let app =
            test::init_service(App::new().app_data(state_for(&server)).configure(routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            test::read_body(resp).await,
            web::Bytes::from_static(b"Backend OK")
        );
    }

    #[actix_web::test]
    async fn test_convert_relays_the_upstream_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dl")
            .match_query(mockito::Matcher::UrlEncoded(
                "id".into(),
                "dQw4w9WgXcQ".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"link":"https://cdn.example/dQw4w9WgXcQ.mp3","title":"Test Song","duration":212.091,"filesize":3493445,"progress":0,"status":"ok","msg":"success"}"#,
            )
            .create_async()
            .await;

        let app =
            test::init_service(App::new().app_data(state_for(&server)).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/convert")
            .set_json(serde_json::json!({ "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["link"], "https://cdn.example/dQw4w9WgXcQ.mp3");
        assert_eq!(body["msg"], "success");
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_convert_rejects_garbage_without_an_outbound_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let app =
            test::init_service(App::new().app_data(state_for(&server)).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/convert")
            .set_json(serde_json::json!({ "url": "garbage" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "Invalid YouTube URL" }));
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_convert_normalizes_upstream_failures() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dl")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body(r#"{"msg":"Video Removed","status":"fail"}"#)
            .create_async()
            .await;

        let app =
            test::init_service(App::new().app_data(state_for(&server)).configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/convert")
            .set_json(serde_json::json!({ "url": "https://youtu.be/dQw4w9WgXcQ" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": "Video Removed", "status": "fail" })
        );
    }
}
