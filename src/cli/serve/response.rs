//! HTTP response handlers.

use crate::config::SiteConfig;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a static file from the output directory.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    // Range header support (video/audio seeking)
    if let Some(range) = get_range_header(&request) {
        return respond_range(request, path, content_type, &range);
    }

    let body = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Handle a Range request by streaming the requested byte window.
fn respond_range(
    request: Request,
    path: &Path,
    content_type: &'static str,
    range: &str,
) -> Result<()> {
    use std::io::{Read, Seek, SeekFrom};

    let file_size = fs::metadata(path)?.len();

    let range = range.strip_prefix("bytes=").unwrap_or(range);
    let (start, end) = parse_range(range, file_size);
    let length = end - start + 1;

    let mut file = fs::File::open(path)?;
    file.seek(SeekFrom::Start(start))?;
    let reader = file.take(length);

    let content_range = format!("bytes {}-{}/{}", start, end, file_size);
    let response = Response::new(
        StatusCode(206),
        vec![
            Header::from_bytes("Content-Type", content_type).unwrap(),
            Header::from_bytes("Content-Range", content_range.as_bytes()).unwrap(),
            Header::from_bytes("Accept-Ranges", "bytes").unwrap(),
        ],
        reader,
        Some(length as usize),
        None,
    );

    request.respond(response)?;
    Ok(())
}

/// Parse a Range header value "start-end" into (start, end) bytes.
fn parse_range(range: &str, file_size: u64) -> (u64, u64) {
    let last = file_size.saturating_sub(1);
    let parts: Vec<&str> = range.trim().split('-').collect();

    match parts.as_slice() {
        // "0-499" - explicit window
        [s, e] if !s.is_empty() && !e.is_empty() => {
            let start: u64 = s.trim().parse().unwrap_or(0);
            let end: u64 = e.trim().parse().unwrap_or(last).min(last);
            (start.min(end), end)
        }
        // "500-" - from offset to end
        [s, ""] if !s.is_empty() => (s.trim().parse().unwrap_or(0).min(last), last),
        // "-500" - final 500 bytes
        ["", e] if !e.is_empty() => {
            let suffix: u64 = e.trim().parse().unwrap_or(0);
            (file_size.saturating_sub(suffix), last)
        }
        _ => (0, last),
    }
}

/// Extract the Range header from a request.
fn get_range_header(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case("range"))
        .map(|h| h.value.to_string())
}

/// Respond with a 404 page (custom or default).
pub fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    use crate::utils::mime::types::{HTML, PLAIN};

    let custom_404 = config.build.output.join("404.html");
    let has_custom = custom_404.is_file();

    if is_head_request(&request) {
        let mime = if has_custom { HTML } else { PLAIN };
        return send_head(request, 404, mime);
    }

    if has_custom && let Ok(body) = fs::read(&custom_404) {
        return send_body(request, 404, HTML, body);
    }

    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    use crate::utils::mime::types::PLAIN;
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_explicit() {
        assert_eq!(parse_range("0-499", 1000), (0, 499));
        assert_eq!(parse_range("0-2000", 1000), (0, 999));
    }

    #[test]
    fn test_parse_range_open_ended() {
        assert_eq!(parse_range("500-", 1000), (500, 999));
    }

    #[test]
    fn test_parse_range_suffix() {
        assert_eq!(parse_range("-200", 1000), (800, 999));
        assert_eq!(parse_range("-2000", 1000), (0, 999));
    }

    #[test]
    fn test_parse_range_garbage_falls_back_to_full() {
        assert_eq!(parse_range("abc", 1000), (0, 999));
    }

    #[test]
    fn test_parse_range_backwards_is_clamped() {
        assert_eq!(parse_range("700-100", 1000), (100, 100));
        assert_eq!(parse_range("2000-", 1000), (999, 999));
    }
}
