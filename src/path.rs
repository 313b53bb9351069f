//! Dot-segment removal for URI paths.

/// Removes the dot-segments `.` and `..` from a path.
///
/// The path is split on `'/'`. A `.` segment is dropped, and a `..` segment
/// is dropped together with the segment before it. The remaining segments
/// are joined with `'/'` again.
///
/// Underflow is tolerated: a `..` directly under the root removes the empty
/// root segment itself, and a `..` with nothing left to remove is dropped.
/// Use [`Standardizer::allow_path_underflow`] to reject such paths instead.
///
/// [`Standardizer::allow_path_underflow`]: crate::Standardizer::allow_path_underflow
///
/// # Examples
///
/// ```
/// use uri_equiv::path::normalize_path;
///
/// assert_eq!(normalize_path("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(normalize_path("/folder1/./././folder2"), "/folder1/folder2");
/// assert_eq!(normalize_path("/a/b/.."), "/a");
///
/// // The root itself is consumed on underflow.
/// assert_eq!(normalize_path("/../x"), "x");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let mut buf = String::with_capacity(path.len());
    normalize_path_into(&mut buf, path);
    buf
}

/// Removes the dot-segments from a path and appends the result to `buf`.
///
/// Returns `true` if an underflow occurred, that is, if some `..` segment
/// removed the root or found nothing to remove. The output is the same as
/// that of [`normalize_path`] either way.
pub fn normalize_path_into(buf: &mut String, path: &str) -> bool {
    let mut segments = path.split('/');
    let mut stack: Vec<&str> = Vec::with_capacity(8);
    // `split` always yields at least one item.
    stack.extend(segments.next());
    let absolute = stack.first().is_some_and(|root| root.is_empty());

    let mut underflow_occurred = false;
    for seg in segments {
        match seg {
            "." => {}
            ".." => {
                if stack.is_empty() || (absolute && stack.len() == 1) {
                    underflow_occurred = true;
                }
                stack.pop();
            }
            _ => stack.push(seg),
        }
    }

    if let Some((first, rest)) = stack.split_first() {
        buf.push_str(first);
        for seg in rest {
            buf.push('/');
            buf.push_str(seg);
        }
    }
    underflow_occurred
}
