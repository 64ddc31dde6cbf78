use bytes::Bytes;
use http::Method;

use crate::ensure;
use crate::protocol::{ParseError, RequestLine};

/// Parses the first line of a request into method, path and version.
///
/// The line terminator is stripped, then the line is split on single spaces
/// into at most three parts. The version (third part) is kept verbatim and may
/// be empty. Path and version stay raw bytes: nothing is decoded, so bytes that
/// are not UTF-8 reach the handler unchanged.
///
/// # Errors
///
/// - [`ParseError::MalformedRequestLine`] when there is no path token
/// - [`ParseError::InvalidMethod`] when the method token is empty or not a valid token
pub fn parse_request_line(line: &[u8]) -> Result<RequestLine, ParseError> {
    let line = strip_line_ending(line);

    let mut parts = line.splitn(3, |b| *b == b' ');
    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        return Err(ParseError::malformed_request_line(String::from_utf8_lossy(line)));
    };
    let version = parts.next().unwrap_or_default();

    ensure!(!method.is_empty(), ParseError::invalid_method("empty method token"));
    let method = Method::from_bytes(method)
        .map_err(|e| ParseError::invalid_method(format!("{:?}: {e}", String::from_utf8_lossy(method))))?;

    Ok(RequestLine { method, path: Bytes::copy_from_slice(path), version: Bytes::copy_from_slice(version) })
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
