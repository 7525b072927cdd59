//! Server entry-point – Axum + Leptos SSR, with the JSON API on the same origin.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::{
        extract::State,
        response::{IntoResponse, Response},
        Router,
    };
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use std::path::PathBuf;
    use tower_http::services::ServeDir;

    use shelter_api::{db, seed};
    use shelter_common::config::{self, Config};
    use shelter_web::app::App;

    /// Fallback: try to serve a static file, otherwise return 404.
    async fn fallback_handler(
        State(options): State<LeptosOptions>,
        req: axum::http::Request<axum::body::Body>,
    ) -> Response {
        let root = options.site_root.clone();
        let (parts, _body) = req.into_parts();
        let path = format!("{}{}", root, parts.uri.path());

        if !path.contains("..") {
            if let Ok(meta) = tokio::fs::metadata(&path).await {
                if meta.is_file() {
                    if let Ok(bytes) = tokio::fs::read(&path).await {
                        return (
                            axum::http::StatusCode::OK,
                            [(axum::http::header::CONTENT_TYPE, mime_for(&path))],
                            bytes,
                        )
                            .into_response();
                    }
                }
            }
        }

        (axum::http::StatusCode::NOT_FOUND, "Not Found").into_response()
    }

    fn mime_for(path: &str) -> &'static str {
        match path.rsplit('.').next().unwrap_or("") {
            "html" => "text/html; charset=utf-8",
            "css" => "text/css",
            "js" => "application/javascript",
            "wasm" => "application/wasm",
            "svg" => "image/svg+xml",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "ico" => "image/x-icon",
            "json" => "application/json",
            _ => "application/octet-stream",
        }
    }

    // ── Tracing ──────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelter_web=info,shelter_api=info,tower_http=info".into()),
        )
        .init();

    // ── Configuration ────────────────────────────────────────────────────
    let conf = get_configuration(None)
        .await
        .context("Cannot read Leptos configuration")?;
    let leptos_options = conf.leptos_options.clone();
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Config::default_path().to_string());
    let mut config =
        config::load_or_default(&PathBuf::from(&config_path)).context("Config load failed")?;
    if let Ok(path) = std::env::var("SHELTER_DB_PATH") {
        config.db_path = PathBuf::from(path);
    }

    // The site answers /api/* itself, so the database must be ready first.
    db::initialize(&config.db_path).context("Cannot initialise database")?;
    if config.seed_demo_data {
        seed::seed_demo_data(&config.db_path).context("Seeding demo data failed")?;
    }
    tracing::info!("Database ready at {}", config.db_path.display());

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let site = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        // Serve static assets (WASM bundle, CSS, images, etc.)
        .nest_service("/pkg", ServeDir::new(format!("{site_root}/pkg")))
        .fallback(fallback_handler)
        .with_state(leptos_options);

    let app = shelter_api::server::router(config.db_path.clone()).merge(site);

    tracing::info!("Shelter Web listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
