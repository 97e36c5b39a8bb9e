#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug)]
    pub struct Config {
        pub server: ServerConfig,
        pub backend: BackendConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct BackendConfig {
        pub base_url: String,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                server: ServerConfig {
                    bind: "0.0.0.0".into(),
                    port: 3000,
                },
                backend: BackendConfig {
                    base_url: "http://localhost:8080/".into(),
                },
            }
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use roster_types::BackendUrl;
    use roster_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);

    // The backend origin is resolved once at startup; the environment wins
    // over the file.
    let backendBase = std::env::var("ROSTER_BACKEND_URL")
        .unwrap_or_else(|_| appConfig.backend.base_url.clone());
    tracing::info!(
        "loaded config from {configPath}: bind={}:{} backend={backendBase}",
        appConfig.server.bind,
        appConfig.server.port
    );

    let backendUrl = BackendUrl(backendBase);

    // Get Leptos configuration
    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    let addr = format!("{}:{}", appConfig.server.bind, appConfig.server.port)
        .parse()
        .unwrap_or_else(|e| {
            tracing::warn!("invalid bind address in config: {e}, using site-addr");
            leptosOptions.site_addr
        });

    // Generate route list from Leptos App
    let routes = generate_route_list(App);

    // Logout route; server functions are registered by leptos_routes itself
    let apiRouter = roster_api::api_router();

    // Page auth middleware that checks the session cookie
    let pageSessionLayer =
        axum::middleware::from_fn(roster_api::middleware::session::require_page_session);

    // Compose the full router:
    // - Leptos routes use LeptosOptions as state and provide the backend url
    //   to every server function via context
    // - the logout route is merged in beside them
    // - page auth is applied as a layer
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let backendUrl = backendUrl.clone();
                move || {
                    leptos::prelude::provide_context(backendUrl.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(pageSessionLayer)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
