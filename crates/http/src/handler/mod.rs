//! The seam between the connection and the application.
//!
//! A [`Handler`] turns one parsed [`Request`] into a [`Response`]. The request
//! body type is a parameter so the connection can hand out a borrowed,
//! on-demand body reader ([`ReqBody`](crate::protocol::ReqBody)).
//!
//! A handler error is not sent to the client as-is: the connection logs it and
//! answers `500 Internal Server Error`.

use std::error::Error;
use std::future::Future;

use crate::protocol::{Request, Response};

pub trait Handler<ReqBody> {
    type Error: Into<Box<dyn Error + Send + Sync>>;

    fn call(&self, req: Request<ReqBody>) -> impl Future<Output = Result<Response, Self::Error>> + Send;
}
