use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use common::config::StoreConfig;

/// Actix web handler for `GET /api/config`.
///
/// Always answers `200 OK`; an unconfigured server answers with the placeholder
/// values, which the frontend recognises and logs.
pub async fn process(config: web::Data<StoreConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::config::{StoreConfig, PLACEHOLDER_STORE_URL};

    use crate::services::store_config::configure_routes;

    #[actix_web::test]
    async fn returns_configured_store() {
        let config = StoreConfig {
            url: "https://abc.supabase.co".into(),
            anon_key: "anon-123".into(),
            table: "client_testimonials".into(),
            request_timeout_ms: 4000,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let body: StoreConfig = test::read_body_json(resp).await;
        assert_eq!(body, config);
    }

    #[actix_web::test]
    async fn unconfigured_server_returns_placeholders() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StoreConfig::default()))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: StoreConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.url, PLACEHOLDER_STORE_URL);
        assert!(body.is_placeholder());
    }
}
