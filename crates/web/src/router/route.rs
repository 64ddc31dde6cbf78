/// The fixed set of endpoints, matched against the raw request path.
///
/// Matching is exact for `/` and `/user-agent` and by prefix for `/echo/` and
/// `/files/`, checked in that order. Query strings are not split off, so
/// `/echo/a?b` echoes `a?b` and `/?x` is not the root. The path is matched as
/// raw bytes and the remainder is handed on untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Root,
    Echo(&'a [u8]),
    UserAgent,
    Files(&'a [u8]),
    NotFound,
}

impl<'a> Route<'a> {
    pub fn resolve(path: &'a [u8]) -> Self {
        if path == b"/" {
            Route::Root
        } else if let Some(text) = path.strip_prefix(b"/echo/") {
            Route::Echo(text)
        } else if path == b"/user-agent" {
            Route::UserAgent
        } else if let Some(name) = path.strip_prefix(b"/files/") {
            Route::Files(name)
        } else {
            Route::NotFound
        }
    }
}
