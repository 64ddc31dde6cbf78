//! Request dispatch for the fixed endpoint set.
//!
//! | path            | behavior                                                   |
//! |-----------------|------------------------------------------------------------|
//! | `/`             | `200 OK`, no headers, no body                              |
//! | `/echo/{text}`  | `text/plain` echo of the raw remainder, gzip if accepted   |
//! | `/user-agent`   | `text/plain` copy of the `User-Agent` header               |
//! | `/files/{name}` | `GET` reads the file, any other method writes the body     |
//! | anything else   | `404 Not Found`                                            |
//!
//! Without a storage directory, `GET /files/{name}` is always `404` and uploads
//! are written relative to the working directory.

mod endpoint;
mod route;

pub use route::Route;

use http::Method;
use lite_http::handler::Handler;
use lite_http::protocol::{ReqBody, Request, Response};
use tokio::io::AsyncRead;
use tracing::{debug, warn};

use crate::error::HandleError;
use crate::storage::Storage;

#[derive(Debug, Clone, Default)]
pub struct Router {
    storage: Option<Storage>,
}

impl Router {
    /// A router without a storage directory: file reads answer `404`, uploads
    /// land in the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage(storage: Storage) -> Self {
        Self { storage: Some(storage) }
    }

    pub fn storage(&self) -> Option<&Storage> {
        self.storage.as_ref()
    }
}

impl<'conn, R> Handler<ReqBody<'conn, R>> for Router
where
    R: AsyncRead + Unpin + Send,
{
    type Error = HandleError;

    async fn call(&self, req: Request<ReqBody<'conn, R>>) -> Result<Response, Self::Error> {
        let (header, body) = req.into_parts();
        let route = Route::resolve(header.path());
        debug!(?route, "resolved route");

        match route {
            Route::Root => Ok(Response::ok()),
            Route::Echo(text) => endpoint::echo(text, header.headers()),
            Route::UserAgent => Ok(endpoint::user_agent(header.headers())),
            Route::Files(raw_name) => {
                let Ok(name) = std::str::from_utf8(raw_name) else {
                    warn!(name = %String::from_utf8_lossy(raw_name), "file name is not utf-8");
                    return Ok(Response::not_found());
                };

                match (&self.storage, *header.method() == Method::GET) {
                    (Some(storage), true) => Ok(endpoint::read_file(storage, name).await),
                    (None, true) => {
                        debug!("no storage directory configured");
                        Ok(Response::not_found())
                    }
                    (Some(storage), false) => endpoint::write_file(storage, name, body).await,
                    (None, false) => endpoint::write_file(&Storage::default(), name, body).await,
                }
            }
            Route::NotFound => Ok(Response::not_found()),
        }
    }
}
