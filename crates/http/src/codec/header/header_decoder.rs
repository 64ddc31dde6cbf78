use bytes::Bytes;

/// Parses one header line into a lower-cased name and a trimmed value.
///
/// The line is trimmed and split on the first `:`. Lines without a `:` carry no
/// field and yield `None`; callers skip them. The value keeps its raw bytes.
pub fn parse_header_line(line: &[u8]) -> Option<(String, Bytes)> {
    let line = line.trim_ascii();
    let colon = line.iter().position(|b| *b == b':')?;
    let (name, value) = (&line[..colon], &line[colon + 1..]);

    let name = String::from_utf8_lossy(name.trim_ascii()).to_ascii_lowercase();
    Some((name, Bytes::copy_from_slice(value.trim_ascii())))
}

/// Whether `line` is the empty line that ends the header section.
pub fn is_header_end(line: &[u8]) -> bool {
    line == b"\r\n" || line == b"\n"
}
