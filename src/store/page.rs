/// One page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, already clamped into `1..=total_pages`
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

/// Slice `items` into pages of `page_size`. There is always at least one
/// page, and out-of-range page numbers are clamped.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages,
        page_size,
    }
}
