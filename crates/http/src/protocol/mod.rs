//! Core HTTP protocol types.
//!
//! - **Request Processing** (`request`): [`RequestLine`], [`HeaderFields`],
//!   [`RequestHeader`] and the body-carrying [`Request`]
//! - **Response Processing** (`response`): [`Response`] with an ordered header list
//! - **Body Access** ([`body`]): [`ReqBody`], the on-demand body reader handed to handlers
//! - **Error Handling** (`error`): [`HttpError`], [`ParseError`] and [`SendError`]

mod request;
pub use request::HeaderFields;
pub use request::Request;
pub use request::RequestHeader;
pub use request::RequestLine;

mod response;
pub use response::header;
pub use response::Response;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;

pub mod body;
pub use body::ReqBody;
