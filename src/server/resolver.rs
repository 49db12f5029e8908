//! Request target resolution with traversal protection.
//!
//! Resolution is a sequence of hard gates: method check, traversal checks,
//! extension allow-list, existence. The traversal protection consists of two
//! independent gates: a cheap syntactic screen of the raw candidate, and a
//! prefix check on the normalized resolved path. The second gate alone is
//! sufficient, but both are kept and neither relies on the other.

use std::path::{Component, Path, PathBuf};

use crate::parser::{HttpRequest, Method};
use crate::server::error::Error;
use crate::server::mime::MimeRegistry;

/// A request target that passed every gate.
///
/// `path` always has the configured root as a prefix (compared
/// case-insensitively) and is backed by an existing file at the time of
/// resolution.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    /// The verified-safe absolute path of the file.
    pub path: PathBuf,
    /// The registered content type for the file's extension.
    pub content_type: &'static str,
}

/// Resolve a request target against the root directory.
///
/// Gates, in order:
///
/// 1. method must be GET;
/// 2. `/` maps to `/index.html`; leading separators are stripped;
/// 3. traversal screen and resolved-path prefix check;
/// 4. the extension must be registered in the mime registry;
/// 5. a regular file must exist at the resolved path.
///
/// The method gate comes first so non-GET requests never touch the file
/// system.
pub async fn resolve(
    request: &HttpRequest,
    root: &Path,
    mime: &MimeRegistry,
) -> Result<ResolvedTarget, Error> {
    if request.method != Method::GET {
        return Err(Error::MethodNotAllowed(request.method.clone()));
    }

    let target = if request.target == "/" {
        "/index.html"
    } else {
        request.target.as_str()
    };
    let candidate = target.trim_start_matches(['/', '\\']);

    // Gate one: syntactic screen of the raw candidate. Anything that still
    // names a parent directory or an absolute location after stripping the
    // leading separators is rejected outright.
    let candidate_path = Path::new(candidate);
    if candidate_path.is_absolute()
        || candidate_path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(Error::Traversal(request.target.clone()));
    }

    // Gate two: join to the root, normalize `.`/`..` segments, and require
    // the root as a prefix of the result. This check stands on its own and
    // is the actual security boundary.
    let root = normalize(root);
    let resolved = normalize(&root.join(candidate));
    if !starts_with_ignore_case(&resolved, &root) {
        return Err(Error::Traversal(request.target.clone()));
    }

    // Strict allow-list: no extension and unknown extensions are refused
    // identically to traversal attempts.
    let extension = resolved
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    let content_type = mime
        .lookup(&extension)
        .ok_or_else(|| Error::TypeNotAllowed(request.target.clone()))?;

    match tokio::fs::metadata(&resolved).await {
        Ok(metadata) if metadata.is_file() => Ok(ResolvedTarget {
            path: resolved,
            content_type,
        }),
        _ => Err(Error::NotFound(request.target.clone())),
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` segments into
/// their parent. Unlike canonicalization this does not touch the file system,
/// so it also works for paths that do not exist.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Component-wise case-insensitive prefix check.
fn starts_with_ignore_case(path: &Path, prefix: &Path) -> bool {
    let path: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_ascii_lowercase())
        .collect();
    let prefix: Vec<String> = prefix
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_ascii_lowercase())
        .collect();

    path.len() >= prefix.len() && path[..prefix.len()] == prefix[..]
}
