use bytes::Bytes;
use lite_http::protocol::{header, HeaderFields, ReqBody, Response};
use tokio::io::AsyncRead;
use tracing::{info, warn};

use crate::encoding::ContentEncoding;
use crate::error::HandleError;
use crate::storage::Storage;

pub(crate) fn echo(text: &[u8], headers: &HeaderFields) -> Result<Response, HandleError> {
    let response = Response::ok().header(header::CONTENT_TYPE, mime::TEXT_PLAIN.essence_str());

    let Some(encoding) = headers.get("accept-encoding").and_then(ContentEncoding::select) else {
        return Ok(response.body(Bytes::copy_from_slice(text)));
    };

    let body = encoding.encode(text).map_err(HandleError::compress)?;
    Ok(response.header(header::CONTENT_ENCODING, encoding.name()).body(body))
}

/// Answers with the `User-Agent` value, or an empty body when there is none.
pub(crate) fn user_agent(headers: &HeaderFields) -> Response {
    let user_agent = headers.get("user-agent").unwrap_or_default();
    Response::ok().header(header::CONTENT_TYPE, mime::TEXT_PLAIN.essence_str()).body(Bytes::copy_from_slice(user_agent))
}

/// Every read failure is reported as a missing file.
pub(crate) async fn read_file(storage: &Storage, name: &str) -> Response {
    match storage.read(name).await {
        Ok(contents) => Response::ok().header(header::CONTENT_TYPE, mime::APPLICATION_OCTET_STREAM.essence_str()).body(contents),
        Err(e) => {
            if !e.is_not_found() {
                warn!(cause = %e, "can't read file");
            }
            Response::not_found()
        }
    }
}

pub(crate) async fn write_file<R>(storage: &Storage, name: &str, body: ReqBody<'_, R>) -> Result<Response, HandleError>
where
    R: AsyncRead + Unpin,
{
    if let Err(e) = storage.resolve(name) {
        warn!(cause = %e, "rejecting upload");
        return Ok(Response::not_found());
    }

    let contents = match body.bytes().await {
        Ok(contents) => contents,
        Err(e) => {
            warn!(cause = %e, "can't read upload body");
            return Ok(Response::bad_request());
        }
    };

    storage.write(name, &contents).await?;
    info!(name, bytes = contents.len(), "stored upload");
    Ok(Response::created())
}
