//! List limit constants and clamping.

/// Number of entities shown per collection on the home page.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Upper bound for any user-supplied list limit.
pub const MAX_LIST_LIMIT: usize = 100;

/// Clamp a user-provided limit to `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: usize, max: usize) -> usize {
    match limit {
        None => default.clamp(1, max.max(1)),
        Some(value) => {
            let value = usize::try_from(value.max(1)).unwrap_or(max);
            value.clamp(1, max.max(1))
        }
    }
}
