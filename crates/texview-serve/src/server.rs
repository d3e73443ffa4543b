//! HTTP loop.
//!
//! Answers GET and HEAD requests from [`Roots`]. Every response carries
//! `Access-Control-Allow-Origin: *` so the listing can be fetched from a
//! viewer served elsewhere (for example `trunk serve`).

use std::fs::File;
use std::io::Read;

use anyhow::anyhow;
use tiny_http::{Header, Method, Request, Response, ResponseBox, Server};
use tracing::{debug, info, warn};

use crate::index::{read_entries, render_index};
use crate::route::{Route, Roots, content_type};

/// Server settings.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub bind: String,
    pub port: u16,
    pub roots: Roots,
}

impl ServeOptions {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Bind and serve until the process exits.
pub fn run(options: &ServeOptions) -> anyhow::Result<()> {
    let listen = options.listen_addr();
    let server = Server::http(&listen).map_err(|err| anyhow!("bind {listen}: {err}"))?;
    info!(
        "Serving at http://{listen} (public: {}, viewer: {})",
        options.roots.public.display(),
        options.roots.dist.display()
    );
    for request in server.incoming_requests() {
        handle(&options.roots, request);
    }
    Ok(())
}

fn handle(roots: &Roots, request: Request) {
    let url = request.url().to_string();
    let response = match request.method() {
        Method::Get | Method::Head => {
            let route = roots.resolve(&url);
            debug!("{} {} -> {:?}", request.method(), url, route);
            respond_to(&route)
        }
        method => {
            debug!("{method} {url} -> not implemented");
            text_response(501, "unsupported method")
        }
    };
    if let Err(err) = request.respond(response) {
        warn!("responding to {url} failed: {err}");
    }
}

/// Build the response for a resolved route.
pub fn respond_to(route: &Route) -> ResponseBox {
    match route {
        Route::Viewer(path) | Route::File(path) => match File::open(path) {
            Ok(file) => with_headers(Response::from_file(file), content_type(path)).boxed(),
            Err(err) => {
                warn!("opening {} failed: {err}", path.display());
                text_response(404, "not found")
            }
        },
        Route::Index { dir, url_path } => match read_entries(dir) {
            Ok(entries) => with_headers(
                Response::from_string(render_index(url_path, &entries)),
                "text/html; charset=utf-8",
            )
            .boxed(),
            Err(err) => {
                warn!("listing {} failed: {err}", dir.display());
                text_response(404, "no permission to list directory")
            }
        },
        Route::Redirect(location) => {
            let mut response = with_headers(Response::empty(301), "text/html; charset=utf-8");
            if let Ok(header) = Header::from_bytes("Location", location.as_bytes()) {
                response.add_header(header);
            }
            response.boxed()
        }
        Route::NotFound => text_response(404, "not found"),
    }
}

fn text_response(status: u16, body: &str) -> ResponseBox {
    with_headers(
        Response::from_string(body).with_status_code(status),
        "text/plain; charset=utf-8",
    )
    .boxed()
}

fn with_headers<R: Read>(mut response: Response<R>, content_type: &str) -> Response<R> {
    for (name, value) in [
        ("Content-Type", content_type),
        ("Access-Control-Allow-Origin", "*"),
    ] {
        if let Ok(header) = Header::from_bytes(name, value) {
            response.add_header(header);
        }
    }
    response
}
