use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, ToastProvider};
use views::{
    AuthPage, EditVideo, GenerateVideo, Home, MyVideos, NotFound, Profile, VideoDetail,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/auth")]
        AuthPage {},
        #[route("/generate-video")]
        GenerateVideo {},
        #[route("/my-videos")]
        MyVideos {},
        #[route("/my-videos/:id")]
        VideoDetail { id: String },
        #[route("/my-videos/:id/edit")]
        EditVideo { id: String },
        #[route("/profile")]
        Profile {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to create session table");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Build the Dioxus app with custom routes
    let router = axum::Router::new()
        // OAuth callbacks are plain axum routes, not server functions
        .route("/auth/{provider}/callback", get(oauth_callback))
        // Then serve the Dioxus application
        .serve_dioxus_application(ServeConfig::new(), App)
        // Add session layer to all routes
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[cfg(feature = "server")]
async fn oauth_callback(
    axum::extract::Path(provider): axum::extract::Path<String>,
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    let Some(provider) = api::auth::OAuthProvider::from_key(&provider) else {
        tracing::error!("Callback for unknown provider: {provider}");
        return Redirect::to("/auth?error=unknown_provider");
    };
    let Some(code) = params.get("code") else {
        tracing::error!("{} callback missing code", provider.key());
        return Redirect::to("/auth?error=missing_code");
    };
    let Some(state) = params.get("state") else {
        tracing::error!("{} callback missing state", provider.key());
        return Redirect::to("/auth?error=missing_state");
    };

    match api::auth::OAuthFlow::new(provider) {
        Ok(flow) => match flow.exchange_code(code, state).await {
            Ok(user) => {
                if let Err(e) = session
                    .insert(api::auth::SESSION_USER_ID_KEY, user.id.to_string())
                    .await
                {
                    tracing::error!("Failed to set session: {}", e);
                    return Redirect::to("/auth?error=session_error");
                }
                if let Err(e) = session.save().await {
                    tracing::error!("Failed to save session: {}", e);
                    return Redirect::to("/auth?error=session_save_error");
                }
                Redirect::to("/my-videos")
            }
            Err(e) => {
                tracing::error!("{} OAuth exchange error: {}", provider.key(), e);
                Redirect::to("/auth?error=oauth_error")
            }
        },
        Err(e) => {
            tracing::error!("Failed to create {} OAuth flow: {}", provider.key(), e);
            Redirect::to("/auth?error=config_error")
        }
    }
}

#[component]
fn App() -> Element {
    // Theme context: None = system, Some("dark"), Some("light")
    let mut theme: ui::ThemeSignal = use_context_provider(|| Signal::new(Option::<String>::None));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Navbar, routed content, and footer.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            class: "app-shell",
            Navbar {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            footer {
                class: "app-footer",
                p { "ClipForge — plan one video, post it everywhere." }
            }
        }
    }
}
