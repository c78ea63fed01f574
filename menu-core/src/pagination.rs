//! Pagination
//!
//! Fixed-size pages over the filtered view, sized by viewport width.

/// Page size when the viewport width is unknown
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Totals above this get condensed page labels
pub const MAX_PLAIN_LABELS: usize = 7;

/// (exclusive upper width in px, page size), one row per grid breakpoint
const BREAKPOINTS: [(f64, usize); 3] = [(640.0, 6), (1024.0, 8), (1280.0, 9)];
const WIDE_PAGE_SIZE: usize = 12;

/// Page size for a viewport width in CSS pixels
pub fn page_size_for_width(width: Option<f64>) -> usize {
    let Some(width) = width.filter(|w| w.is_finite() && *w > 0.0) else {
        return DEFAULT_PAGE_SIZE;
    };
    BREAKPOINTS
        .iter()
        .find(|(upper, _)| width < *upper)
        .map_or(WIDE_PAGE_SIZE, |(_, size)| *size)
}

/// `ceil(len / page_size)`; zero for an empty view
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// One page of a view
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based
    pub number: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice `[(page-1)*page_size, page*page_size)` clamped to the view.
/// Page 0 is treated as page 1.
pub fn paginate<T>(view: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let number = page.max(1);
    let start = (number - 1).saturating_mul(page_size).min(view.len());
    let end = number.saturating_mul(page_size).min(view.len());

    Page {
        items: &view[start..end],
        number,
        total_pages: total_pages(view.len(), page_size),
    }
}

/// Current page plus the identity of the view it belongs to.
///
/// The page snaps back to 1 whenever the view's length or the search text
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    view_len: usize,
    query: String,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            view_len: 0,
            query: String::new(),
        }
    }
}

impl PageCursor {
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns `true` when the page was reset
    pub fn sync(&mut self, view_len: usize, query: &str) -> bool {
        if self.view_len == view_len && self.query == query {
            return false;
        }
        self.view_len = view_len;
        self.query = query.to_string();
        let changed = self.page != 1;
        self.page = 1;
        changed
    }

    /// Move to `page`, clamped to `[1, total]`
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, total.max(1));
    }
}

/// Entry in the page-number control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Labels for the page control.
///
/// Up to [`MAX_PLAIN_LABELS`] pages are listed in full. Beyond that: first,
/// last, current±1, with an ellipsis for every gap.
pub fn page_labels(current: usize, total: usize) -> Vec<PageLabel> {
    if total <= MAX_PLAIN_LABELS {
        return (1..=total).map(PageLabel::Page).collect();
    }

    let current = current.clamp(1, total);
    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total - 1);

    let mut labels = vec![PageLabel::Page(1)];
    if window_start > 2 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.extend((window_start..=window_end).map(PageLabel::Page));
    if window_end < total - 1 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.push(PageLabel::Page(total));
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLabel::{Ellipsis, Page as P};

    #[test]
    fn test_breakpoints() {
        assert_eq!(page_size_for_width(None), DEFAULT_PAGE_SIZE);
        assert_eq!(page_size_for_width(Some(0.0)), DEFAULT_PAGE_SIZE);
        assert_eq!(page_size_for_width(Some(f64::NAN)), DEFAULT_PAGE_SIZE);
        assert_eq!(page_size_for_width(Some(375.0)), 6);
        assert_eq!(page_size_for_width(Some(640.0)), 8);
        assert_eq!(page_size_for_width(Some(1023.9)), 8);
        assert_eq!(page_size_for_width(Some(1024.0)), 9);
        assert_eq!(page_size_for_width(Some(1920.0)), 12);
    }

    #[test]
    fn test_twenty_three_items_in_pages_of_ten() {
        let view: Vec<usize> = (0..23).collect();

        let first = paginate(&view, 1, 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items, &view[0..10]);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&view, 3, 10);
        assert_eq!(last.items, &view[20..23]);
        assert_eq!(last.items.len(), 3);
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let view: Vec<usize> = (0..5).collect();
        assert_eq!(paginate(&view, 0, 10).items, &view[..]);
        assert!(paginate(&view, 4, 10).items.is_empty());
        assert_eq!(paginate(&view, 1, 0).items, &view[0..1]);

        let empty: Vec<usize> = Vec::new();
        let page = paginate(&empty, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_cursor_resets_when_view_changes() {
        let mut cursor = PageCursor::default();
        cursor.sync(23, "");
        cursor.go_to(3, total_pages(23, 10));
        assert_eq!(cursor.page(), 3);

        // same identity keeps the page
        assert!(!cursor.sync(23, ""));
        assert_eq!(cursor.page(), 3);

        // 23 -> 5 items
        assert!(cursor.sync(5, ""));
        assert_eq!(cursor.page(), 1);

        cursor.go_to(9, total_pages(5, 10));
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_cursor_resets_on_new_query_with_same_length() {
        let mut cursor = PageCursor::default();
        cursor.sync(30, "pi");
        cursor.go_to(2, 3);
        assert!(cursor.sync(30, "piz"));
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_short_label_lists_are_complete() {
        assert_eq!(page_labels(1, 0), vec![]);
        assert_eq!(page_labels(2, 3), vec![P(1), P(2), P(3)]);
        assert_eq!(page_labels(4, 7).len(), 7);
    }

    #[test]
    fn test_condensed_labels() {
        assert_eq!(page_labels(1, 12), vec![P(1), P(2), Ellipsis, P(12)]);
        assert_eq!(page_labels(6, 12), vec![P(1), Ellipsis, P(5), P(6), P(7), Ellipsis, P(12)]);
        assert_eq!(page_labels(12, 12), vec![P(1), Ellipsis, P(11), P(12)]);
        assert_eq!(page_labels(3, 12), vec![P(1), P(2), P(3), P(4), Ellipsis, P(12)]);
    }

    #[test]
    fn test_condensed_labels_always_include_ends_and_current() {
        for total in 8..30 {
            for current in 1..=total {
                let labels = page_labels(current, total);
                assert_eq!(labels.first(), Some(&P(1)));
                assert_eq!(labels.last(), Some(&P(total)));
                assert!(labels.contains(&P(current)));
                assert!(labels.len() <= MAX_PLAIN_LABELS);
            }
        }
    }
}
