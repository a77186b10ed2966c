//! Directory requests: trailing-slash redirects and generated listings
//!
//! Directories that carry an `index.html` are left to the file filter.

use std::path::{Component, Path, PathBuf};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};
use warp::Rejection;

/// Characters escaped in listing links
const LINK: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Map a request path onto a directory below `root`
///
/// Returns `None` for undecodable paths and any `..` segment.
#[must_use]
pub fn resolve_dir(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let relative = Path::new(decoded.trim_start_matches('/'));

    let mut dir = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => dir.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    dir.is_dir().then_some(dir)
}

/// Answer a directory request, or reject so the file filter can try
///
/// The trailing-slash redirect carries `query` over unchanged.
///
/// # Errors
/// Rejects with not-found when the path is not a directory, or when it is a
/// directory with an `index.html`
pub async fn respond(
    root: &Path,
    request_path: &str,
    query: &str,
) -> Result<Response, Rejection> {
    let Some(dir) = resolve_dir(root, request_path) else {
        return Err(warp::reject::not_found());
    };

    if !request_path.ends_with('/') {
        let location = if query.is_empty() {
            format!("{request_path}/")
        } else {
            format!("{request_path}/?{query}")
        };
        debug!(%location, "redirecting directory request");
        return Ok(
            warp::reply::with_header(StatusCode::MOVED_PERMANENTLY, "location", location)
                .into_response(),
        );
    }

    if dir.join("index.html").is_file() {
        return Err(warp::reject::not_found());
    }

    let entries = read_entries(&dir).await.map_err(|e| {
        debug!(dir = %dir.display(), error = %e, "directory not readable");
        warp::reject::not_found()
    })?;

    let title = percent_decode_str(request_path).decode_utf8_lossy();
    Ok(warp::reply::html(render_listing(&title, &entries)).into_response())
}

/// Entry names in display order, directories suffixed with `/`
async fn read_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort_by_key(|name| name.to_lowercase());
    Ok(entries)
}

/// Listing page for `title` with one link per entry
#[must_use]
pub fn render_listing(title: &str, entries: &[String]) -> String {
    let title = escape(title);
    let mut page = format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Directory listing for {title}</title>\n</head>\n<body>\n\
         <h1>Directory listing for {title}</h1>\n<hr>\n<ul>\n"
    );
    for name in entries {
        page.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            utf8_percent_encode(name, LINK),
            escape(name)
        ));
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    page
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
