//! Sparse-merge helpers shared by every update operation.
//!
//! An omitted field keeps the stored value; a supplied field replaces it.
//! There is no way to null out a nullable column through an update, only
//! to overwrite it.

/// Merge a patch field onto the stored value of a required column.
pub fn keep_or<T>(patch: Option<T>, current: T) -> T {
    patch.unwrap_or(current)
}

/// Merge a patch field onto the stored value of a nullable column.
pub fn keep_or_opt<T>(patch: Option<T>, current: Option<T>) -> Option<T> {
    patch.or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Omitted fields keep whatever is stored.
    #[test]
    fn omitted_field_keeps_current() {
        assert_eq!(keep_or(None, 7i64), 7);
        assert_eq!(keep_or(None, "kept".to_string()), "kept");
        assert_eq!(keep_or_opt(None, Some("kept".to_string())), Some("kept".to_string()));
        assert_eq!(keep_or_opt::<String>(None, None), None);
    }

    /// Supplied fields replace the stored value, empty strings included.
    #[test]
    fn supplied_field_replaces_current() {
        assert_eq!(keep_or(Some(9i64), 7), 9);
        assert_eq!(keep_or(Some(String::new()), "old".to_string()), "");
        assert_eq!(
            keep_or_opt(Some("new".to_string()), Some("old".to_string())),
            Some("new".to_string())
        );
        assert_eq!(keep_or_opt(Some("new".to_string()), None), Some("new".to_string()));
    }
}
