//! HTTP server rendering the site on every request

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Context;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{ContentError, ContentLoader, MarkdownRenderer};
use crate::templates::{PostView, SiteView, TemplateRenderer};
use crate::Site;

/// Server state shared by all handlers
struct ServerState {
    site_view: SiteView,
    loader: ContentLoader,
    renderer: MarkdownRenderer,
    templates: TemplateRenderer,
}

impl ServerState {
    /// Fresh template context carrying the site-wide view
    fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site_view);
        context
    }

    fn render_page(&self, template: &str, context: &Context) -> Response {
        match self.templates.render(template, context) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!("Failed to render {}: {}", template, e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }

    fn render_not_found(&self) -> Response {
        match self.templates.render("404.html", &self.context()) {
            Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render 404 page: {}", e);
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
        }
    }
}

/// Start the site server
pub async fn start(site: &Site, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(ServerState {
        site_view: SiteView::from_config(&site.config),
        loader: ContentLoader::new(&site.content_dir),
        renderer: MarkdownRenderer::new(),
        templates: TemplateRenderer::new()?,
    });

    let app = Router::new()
        .route("/", get(home))
        .route("/blog", get(blog_index))
        .route("/blog/:slug", get(blog_post))
        .nest_service("/static", ServeDir::new(&site.static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Home page: site intro plus the most recent posts
async fn home(State(state): State<Arc<ServerState>>) -> Response {
    let posts = match state.loader.load_posts() {
        Ok(posts) => posts,
        Err(e) => return load_failure(&state, e),
    };

    let views: Vec<PostView> = posts.iter().take(5).map(PostView::summary).collect();
    let mut context = state.context();
    context.insert("posts", &views);
    state.render_page("home.html", &context)
}

/// Blog index: every post, newest first
async fn blog_index(State(state): State<Arc<ServerState>>) -> Response {
    let posts = match state.loader.load_posts() {
        Ok(posts) => posts,
        Err(e) => return load_failure(&state, e),
    };

    let views: Vec<PostView> = posts.iter().map(PostView::summary).collect();
    let mut context = state.context();
    context.insert("posts", &views);
    state.render_page("blog.html", &context)
}

/// Single post page
async fn blog_post(
    Path(slug): Path<String>,
    State(state): State<Arc<ServerState>>,
) -> Response {
    match state.loader.load_post_by_slug(&slug) {
        Ok(post) => {
            let body_html = state.renderer.render(&post.content);
            let mut context = state.context();
            context.insert("post", &PostView::full(&post, body_html));
            state.render_page("post.html", &context)
        }
        Err(ContentError::NotFound(_)) => state.render_not_found(),
        Err(e) => load_failure(&state, e),
    }
}

async fn not_found(State(state): State<Arc<ServerState>>) -> Response {
    state.render_not_found()
}

fn load_failure(state: &ServerState, err: ContentError) -> Response {
    match err {
        ContentError::NotFound(_) => state.render_not_found(),
        other => {
            tracing::error!("Failed to load content: {}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
