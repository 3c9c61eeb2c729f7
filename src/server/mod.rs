//! HTTP server for the blog pages, post data, and contact form

use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::contact::{ContactForm, ContactRelay};
use crate::content::{fetch_posts, AnySource, PostId};
use crate::render::{render_article_page, render_blog_page};
use crate::Site;

/// Server state
struct ServerState {
    config: SiteConfig,
    source: AnySource,
    relay: ContactRelay,
    public_dir: PathBuf,
}

/// Query string of the article page
#[derive(Debug, Deserialize)]
struct ArticleQuery {
    id: Option<String>,
}

/// Reply to a contact submission
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactReply {
    pub ok: bool,
    pub message: String,
}

/// Build the router for a site
pub async fn app(site: &Site) -> Router {
    let source = AnySource::from_site(site).await;
    router(site.config.clone(), source, site.public_dir.clone())
}

fn router(config: SiteConfig, source: AnySource, public_dir: PathBuf) -> Router {
    // An HTTP source already points at a data file served elsewhere; serving
    // it from here too would make the server fetch from itself.
    let serve_data = !matches!(source, AnySource::Http(_));
    let blog_route = format!("/{}", config.blog_page.trim_start_matches('/'));
    let article_route = format!("/{}", config.article_page.trim_start_matches('/'));
    let data_route = format!("/{}", config.data_file.trim_start_matches('/'));

    let state = Arc::new(ServerState {
        relay: ContactRelay::new(config.contact.clone()),
        config,
        source,
        public_dir,
    });

    let mut app = Router::new()
        .route("/", get(blog_handler))
        .route(&blog_route, get(blog_handler))
        .route(&article_route, get(article_handler))
        .route("/contact", post(contact_handler));

    if serve_data {
        app = app.route(&data_route, get(posts_handler));
    }

    let static_files = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);

    app.fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = app(site).await;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn blog_handler(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(render_blog_page(&state.config, &state.source).await)
}

async fn article_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ArticleQuery>,
) -> Html<String> {
    // A missing id matches nothing and renders the not-found panel
    let id = PostId::from(query.id.unwrap_or_default());
    Html(render_article_page(&state.config, &state.source, &id).await)
}

async fn posts_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(fetch_posts(&state.source).await)
}

/// Shown when the submitted body is not a readable contact form
const UNREADABLE_FORM: &str =
    "No pudimos leer los datos del formulario. Por favor revisa los campos e intenta nuevamente.";

async fn contact_handler(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> (StatusCode, Json<ContactReply>) {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            tracing::debug!("Unreadable contact body: {}", rejection.body_text());
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ContactReply {
                    ok: false,
                    message: UNREADABLE_FORM.to_string(),
                }),
            );
        }
    };

    match state.relay.submit(&form).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ContactReply {
                ok: true,
                message: form.success_message(&state.config.title),
            }),
        ),
        Err(e) => {
            let status = if e.is_user_error() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                tracing::warn!("Contact submission failed: {}", e);
                StatusCode::BAD_GATEWAY
            };
            (
                status,
                Json(ContactReply {
                    ok: false,
                    message: e.user_message(),
                }),
            )
        }
    }
}
