//! Content-type registry keyed by file extension.

use std::collections::HashMap;

/// A fixed mapping from lowercase file extension (with leading dot) to
/// content-type string.
///
/// The registry doubles as the serving allow-list: an extension absent from
/// it is refused by the resolver regardless of whether the file exists.
/// Built once at server construction and never mutated afterwards, so it is
/// safe to share across connection tasks without synchronization.
#[derive(Debug, Clone)]
pub struct MimeRegistry {
    types: HashMap<&'static str, &'static str>,
}

impl MimeRegistry {
    /// Create a registry with the default extension table.
    ///
    /// Only text-safe types are registered; binary formats are deliberately
    /// absent so requests for them are refused.
    pub fn new() -> Self {
        let types = HashMap::from([
            (".html", "text/html"),
            (".htm", "text/html"),
            (".css", "text/css"),
            (".js", "application/javascript"),
            (".json", "application/json"),
            (".txt", "text/plain"),
            (".svg", "image/svg+xml"),
        ]);
        Self { types }
    }

    /// Look up the content type for an extension.
    ///
    /// The lookup is case-insensitive. Absence is a normal outcome, not an
    /// error: it means the extension is not allowed to be served.
    pub fn lookup(&self, extension: &str) -> Option<&'static str> {
        self.types
            .get(extension.to_ascii_lowercase().as_str())
            .copied()
    }

}

impl Default for MimeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
