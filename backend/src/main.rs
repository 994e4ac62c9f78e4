mod config;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, info};
use mime_guess::from_path;
use percent_encoding::percent_decode_str;
use std::thread;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Embedded paths to try for a request path, in order.
///
/// The path is percent-decoded first, since sheet exports reference assets
/// such as `/Untitled spreadsheet_Images/...`. The bundle root wins over the
/// public asset directory. An empty path maps to `index.html`.
fn embedded_paths(request_path: &str) -> Vec<String> {
    let decoded = percent_decode_str(request_path).decode_utf8_lossy();
    let path = decoded.trim_start_matches('/');
    if path.is_empty() {
        return vec!["index.html".to_string()];
    }
    vec![path.to_string(), format!("{}/{}", config::PUBLIC_DIR, path)]
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let found = embedded_paths(req.path())
        .into_iter()
        .find_map(|path| STATIC_DIR.get_file(&path).map(|file| (path, file)));

    match found {
        Some((path, file)) => {
            let mime = from_path(&path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => {
            debug!("No embedded file for {}, serving index.html", req.path());
            match STATIC_DIR.get_file("index.html") {
                Some(index) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec()),
                None => HttpResponse::NotFound().body("Not Found"),
            }
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let url = config::base_url();

    {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(config::BROWSER_OPEN_DELAY);
            let _ = webbrowser::open(&url);
        });
    }

    info!("Submission lookup running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config::HOST, config::PORT))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(embedded_paths("/"), vec!["index.html"]);
        assert_eq!(embedded_paths(""), vec!["index.html"]);
    }

    #[test]
    fn bundle_root_is_tried_before_public_assets() {
        assert_eq!(
            embedded_paths("/frontend-1a2b.js"),
            vec!["frontend-1a2b.js", "public/frontend-1a2b.js"]
        );
    }

    #[test]
    fn asset_paths_are_percent_decoded() {
        assert_eq!(
            embedded_paths("/Untitled%20spreadsheet_Images/bfcd74b0.photo.154320.jpg")[1],
            "public/Untitled spreadsheet_Images/bfcd74b0.photo.154320.jpg"
        );
    }
}
