use std::path::Path;

/// Removes the given temp artifacts. Missing files are a no-op; any
/// other IO error is logged and swallowed so cleanup never masks the
/// failure that triggered it.
pub fn remove_artifacts<'a>(paths: impl IntoIterator<Item = &'a Path>) {
    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "Removed temp artifact"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Failed to remove temp artifact")
            }
        }
    }
}
