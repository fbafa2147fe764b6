mod config;
mod services;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded site bundle. Unknown paths fall back to `index.html` so
/// in-page anchors and client-side routes load the single-page app.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let site = config::site_config();
    let store = config::store_config();
    let url = site.url();

    if site.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open a browser at {}: {}", url_clone, e);
            }
        });
    }

    info!("Server running at {}", url);

    let store_data = web::Data::new(store);
    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .service(services::store_config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((site.host.as_str(), site.port))?
        .run()
        .await
}
