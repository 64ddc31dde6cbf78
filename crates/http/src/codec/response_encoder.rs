use crate::codec::header::HeaderEncoder;
use crate::protocol::{Response, SendError};
use bytes::BytesMut;
use tokio_util::codec::Encoder;

/// Serializes a whole [`Response`]: head first, then the raw body bytes.
///
/// No transfer encoding is applied to the body; any content encoding has to be
/// done by the handler before the response reaches this encoder.
#[derive(Debug, Default)]
pub struct ResponseEncoder {
    header_encoder: HeaderEncoder,
}

impl ResponseEncoder {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Encoder<Response> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, response: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.header_encoder.encode(&response, dst)?;

        if let Some(body) = response.body_bytes() {
            dst.extend_from_slice(body);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::header;

    #[test]
    fn encodes_binary_body_verbatim() {
        let body: &[u8] = &[0x00, 0xff, b'\r', b'\n', 0x1f, 0x8b];
        let response = Response::ok().header(header::CONTENT_TYPE, "application/octet-stream").body(body.to_vec());

        let mut dst = BytesMut::new();
        ResponseEncoder::new().encode(response, &mut dst).unwrap();

        let mut expected = b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 6\r\n\r\n".to_vec();
        expected.extend_from_slice(body);
        assert_eq!(&dst[..], &expected[..]);
    }

    #[test]
    fn no_body_no_length() {
        let mut dst = BytesMut::new();
        ResponseEncoder::new().encode(Response::created(), &mut dst).unwrap();

        assert_eq!(&dst[..], b"HTTP/1.1 201 Created\r\n\r\n");
    }
}
