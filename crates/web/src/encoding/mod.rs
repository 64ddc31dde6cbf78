//! Response body compression negotiated through `Accept-Encoding`.

mod encoder;

pub use encoder::ContentEncoding;
