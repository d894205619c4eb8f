//! Collision-resistant naming for uploaded files.
//!
//! Every upload gets a storage name of the form `{token}-{original}`, where
//! the token is a fresh version-4 UUID in simple (hyphen-free) form. Two
//! uploads with identical original names therefore never collide, without
//! any coordination or filesystem existence check, and the original name is
//! recoverable as the suffix after the first `-`.
//!
//! The original filename is untrusted and is never used for path
//! construction as-is: it is reduced to its final path component and
//! filtered to a safe character set before being embedded.

use uuid::Uuid;

const MAX_FILENAME_LENGTH: usize = 255;

/// Generate a unique storage name for the given client-supplied filename.
///
/// The prefix guarantees uniqueness; keeping the (sanitized) original as the
/// suffix preserves the human-readable extension and context for debugging.
pub fn unique_name(original: &str) -> String {
    format!("{}-{}", Uuid::new_v4().simple(), sanitize(original))
}

/// Recover the original filename embedded in a generated storage name.
///
/// Returns `None` if the name does not carry a token prefix.
pub fn original_name(generated: &str) -> Option<&str> {
    generated.split_once('-').map(|(_, original)| original)
}

/// Reduce an arbitrary client-supplied filename to a safe one.
///
/// Total by design: the namer defines no failure mode, so adversarial input
/// degrades to the placeholder name `file` rather than an error.
pub fn sanitize(original: &str) -> String {
    let component = original
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(original);

    let sanitized: String = component
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // Names made only of dots or underscores carry no information and `..`
    // must never survive into a path.
    if sanitized.trim_matches(|c| c == '.' || c == '_').is_empty() {
        return "file".to_string();
    }

    sanitized
}
