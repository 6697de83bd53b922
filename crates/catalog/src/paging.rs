//! Page/limit bounds shared by every paged listing.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Checks `page >= 1` and `1 <= limit <= MAX_LIMIT`. The message is meant to
/// be wrapped in the caller's own error type.
pub fn check_bounds(page: u32, limit: u32) -> Result<(), String> {
    if page < 1 {
        return Err("page must be at least 1".into());
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(format!("limit must be between 1 and {MAX_LIMIT}"));
    }
    Ok(())
}

/// The `page`-th run of `limit` items. Pages past the end are empty.
pub fn slice<T>(items: Vec<T>, page: u32, limit: u32) -> Vec<T> {
    let offset = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    items.into_iter().skip(offset).take(limit as usize).collect()
}
