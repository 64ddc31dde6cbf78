//! Request body decoding.
//!
//! Only Content-Length framed bodies exist in this server; chunked transfer
//! encoding is not supported.

mod length_decoder;

pub use length_decoder::LengthDecoder;
