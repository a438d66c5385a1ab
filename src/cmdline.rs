//! Command-line string reconstruction.
//!
//! `cmd` is loose about quotes: it accepts `pushd` but not `"pushd"`. Only
//! arguments containing a space are quoted, and nothing is escaped, so an
//! argument with an embedded double quote does not survive the trip. The
//! joined line is trimmed of outer whitespace.

/// Joins target arguments into a single command-line string.
///
/// Returns `None` when there is nothing to pass.
pub fn join_arguments<S: AsRef<str>>(args: &[S]) -> Option<String> {
    let joined = args
        .iter()
        .map(|arg| {
            let arg = arg.as_ref();
            if arg.contains(' ') {
                format!("\"{arg}\"")
            } else {
                arg.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
