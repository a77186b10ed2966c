//! Request filters for the preview server
//!
//! ```text
//! GET|HEAD ─┬─ directory (redirect / listing) ─┐
//!           └─ fs::dir + content-type override ─┼─→ recover (404 / 405) ─→ CORS headers
//! ```

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use warp::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use warp::http::StatusCode;
use warp::path::FullPath;
use warp::reject::MethodNotAllowed;
use warp::reply::{Reply, Response};
use warp::{Filter, Rejection};

use crate::listing;

/// Content type forced for a request path, by suffix
#[must_use]
pub fn forced_content_type(path: &str) -> Option<&'static str> {
    if path.ends_with(".js") {
        Some("application/javascript")
    } else if path.ends_with(".css") {
        Some("text/css")
    } else if path.ends_with(".json") {
        Some("application/json")
    } else {
        None
    }
}

/// Headers added to every response
#[must_use]
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

/// Every route for serving `root`
pub fn routes(
    root: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone + Send + Sync + 'static {
    let shared = Arc::new(root.clone());
    let directories = read_method()
        .and(warp::path::full())
        .and(raw_query())
        .and_then(move |path: FullPath, query: String| {
            let root = Arc::clone(&shared);
            async move { listing::respond(&root, path.as_str(), &query).await }
        });

    let files = read_method()
        .and(warp::path::full())
        .and(warp::fs::dir(root))
        .map(|path: FullPath, file: warp::fs::File| override_content_type(path.as_str(), file));

    directories
        .or(files)
        .unify()
        .recover(handle_rejection)
        .with(warp::reply::with::headers(cors_headers()))
        .with(warp::trace::request())
}

fn read_method() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::get().or(warp::head()).unify()
}

/// Raw query string, empty when the request has none
fn raw_query() -> impl Filter<Extract = (String,), Error = Infallible> + Clone {
    warp::query::raw()
        .or(warp::any().map(String::new))
        .unify()
}

fn override_content_type(path: &str, file: impl Reply) -> Response {
    let mut response = file.into_response();
    if let Some(mime) = forced_content_type(path) {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
    }
    response
}

async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "File not found")
    } else if err.find::<MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Unsupported method")
    } else {
        debug!(?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    let body = format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Error response</title>\n</head>\n<body>\n<h1>Error response</h1>\n\
         <p>Error code: {}</p>\n<p>Message: {message}.</p>\n</body>\n</html>\n",
        status.as_u16()
    );
    Ok(warp::reply::with_status(warp::reply::html(body), status).into_response())
}
