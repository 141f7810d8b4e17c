use std::sync::Arc;

pub type AircraftId = Arc<str>;

/// Trimmed, upper-cased form used for every identifier the tower stores.
/// Returns `None` when nothing but whitespace was given.
pub fn normalize(raw: &str) -> Option<Arc<str>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(Arc::from(trimmed.to_uppercase()))
    }
}
