// crates/loadboard-core/src/paginate.rs
use serde::{Deserialize, Serialize};

/// Number of listing cards shown per page.
pub const ITEMS_PER_PAGE: usize = 9;

/// `ceil(count / per_page)`, never less than 1.
///
/// A zero `per_page` is treated as 1 so the division is always defined.
pub fn total_pages(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a 1-based page number into `[1, total]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Paginate stage: the `page`-th window of `items` (1-based).
///
/// Out-of-range pages are clamped rather than rejected, so this never
/// panics and never returns a window past the end of `items`.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let page = clamp_page(page, total_pages(items.len(), per_page));
    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// The page cursor of a session.
///
/// `current_page` is stored as requested, and every read clamps it against
/// the current match count; that keeps the invariant
/// `1 <= page <= max(1, ceil(count / per_page))` even when the count shrinks
/// underneath a stored page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        PageState::new(ITEMS_PER_PAGE)
    }
}

impl PageState {
    pub fn new(items_per_page: usize) -> Self {
        PageState {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.items_per_page)
    }

    /// The current page, clamped for a result set of `count` items.
    pub fn current(&self, count: usize) -> usize {
        clamp_page(self.current_page, self.total_pages(count))
    }

    /// Select `page`, clamped for `count` items. Returns the page actually
    /// selected.
    pub fn select(&mut self, page: usize, count: usize) -> usize {
        self.current_page = clamp_page(page, self.total_pages(count));
        self.current_page
    }

    /// Back to page 1 (used whenever the query changes).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling_with_floor_of_one() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(12, 9), 2);
        assert_eq!(total_pages(27, 9), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn twelve_items_split_nine_and_three() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 1, 9), &items[..9]);
        assert_eq!(paginate(&items, 2, 9), &[10, 11, 12]);
    }

    #[test]
    fn every_page_is_full_except_possibly_the_last() {
        for n in 0..40usize {
            let items: Vec<usize> = (0..n).collect();
            let pages = total_pages(n, ITEMS_PER_PAGE);
            let mut seen = 0;
            for p in 1..=pages {
                let window = paginate(&items, p, ITEMS_PER_PAGE);
                if p < pages {
                    assert_eq!(window.len(), ITEMS_PER_PAGE);
                }
                seen += window.len();
            }
            assert_eq!(seen, n);
        }
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 0, 9), &items[..9]);
        assert_eq!(paginate(&items, 99, 9), &[10, 11, 12]);
        let empty: [u32; 0] = [];
        assert!(paginate(&empty, 3, 9).is_empty());
    }

    #[test]
    fn stored_page_is_clamped_on_read() {
        let mut state = PageState::default();
        assert_eq!(state.select(3, 30), 3);
        assert_eq!(state.current(30), 3);
        // result set shrank to a single page
        assert_eq!(state.current(4), 1);
        state.reset();
        assert_eq!(state.current(30), 1);
    }
}
