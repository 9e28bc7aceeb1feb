//! Page windowing over ordered result sets

use std::ops::Range;

/// Questions per page unless configured otherwise
pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

/// Compute the window for a 1-based page, clamped to `total` items.
///
/// Returns an empty range for pages before 1 or past the end of the data.
pub fn page_window(page: i64, per_page: usize, total: usize) -> Range<usize> {
    if page < 1 || per_page == 0 {
        return 0..0;
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(per_page))
        .unwrap_or(usize::MAX);
    if start >= total {
        return 0..0;
    }

    let end = start.saturating_add(per_page).min(total);
    start..end
}

/// Slice `items` down to the given page
pub fn paginate<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    &items[page_window(page, per_page, items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        assert_eq!(page_window(1, 10, 19), 0..10);
    }

    #[test]
    fn test_partial_last_page() {
        assert_eq!(page_window(2, 10, 19), 10..19);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        assert!(page_window(3, 10, 19).is_empty());
        assert!(page_window(100, 10, 19).is_empty());
    }

    #[test]
    fn test_page_zero_and_negative_are_empty() {
        assert!(page_window(0, 10, 19).is_empty());
        assert!(page_window(-4, 10, 19).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        assert!(page_window(i64::MAX, 10, 19).is_empty());
    }

    #[test]
    fn test_item_count_formula() {
        // min(P, max(0, T - P*(page-1)))
        for total in 0..45usize {
            for page in 1..7i64 {
                let expected = total
                    .saturating_sub(10 * (page as usize - 1))
                    .min(10);
                assert_eq!(
                    page_window(page, 10, total).len(),
                    expected,
                    "total={} page={}",
                    total,
                    page
                );
            }
        }
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(paginate(&items, 4, 10).is_empty());
    }
}
