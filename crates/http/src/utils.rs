//! Internal helper macros.

/// Returns early with `$error` unless `$predicate` holds.
///
/// Like `assert!`, but for recoverable input errors: the caller gets an `Err`
/// instead of a panic.
///
/// ```ignore
/// ensure!(!method.is_empty(), ParseError::invalid_method(method));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
