//! Request line and header section processing.
//!
//! - [`parse_request_line`]: splits the first request line into method, path and version
//! - [`parse_header_line`]: turns one header line into a lower-cased name and trimmed value
//! - [`HeaderEncoder`]: writes a response status line and header section

mod header_decoder;
mod header_encoder;
mod request_line;

pub use header_decoder::{is_header_end, parse_header_line};
pub use header_encoder::HeaderEncoder;
pub use request_line::parse_request_line;
