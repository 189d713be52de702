//! Pagination request and response envelopes shared by all list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination parameters shared across all list endpoints.
///
/// - `per_page`: 1–100, default 20
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to the valid range 1–100 and `page` to ≥ 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, 100),
        }
    }

    /// Row offset for this page. Widens before multiplying, so an absurd
    /// `page` from a query string yields a huge offset instead of
    /// overflowing `u32`.
    pub fn offset(&self) -> u64 {
        (u64::from(self.page.max(1)) - 1) * u64::from(self.per_page)
    }
}

/// Paginated response envelope.
///
/// `total_pages` is never 0: an empty result set still has one (empty) page,
/// so `has_next`/`has_prev` stay consistent for clients that render pagers.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Paginated<T> {
    /// Build the envelope from a page of items and the unpaginated total.
    /// `page` and `per_page` must already be clamped.
    pub fn new(items: Vec<T>, total: u64, page: u32, per_page: u32) -> Self {
        let total_pages = if total > 0 {
            total.div_ceil(per_page as u64) as u32
        } else {
            1
        };
        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_per_page_20_page_1() {
        let p = PageRequest::default();
        assert_eq!(p.per_page, 20);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn should_deserialize_defaults_when_fields_absent() {
        let p: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(p.per_page, 20);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn should_clamp_per_page_to_1_100() {
        assert_eq!(
            PageRequest {
                page: 1,
                per_page: 0
            }
            .clamped()
            .per_page,
            1
        );
        assert_eq!(
            PageRequest {
                page: 1,
                per_page: 200
            }
            .clamped()
            .per_page,
            100
        );
    }

    #[test]
    fn should_clamp_page_to_minimum_1() {
        assert_eq!(
            PageRequest {
                page: 0,
                per_page: 20
            }
            .clamped()
            .page,
            1
        );
    }

    #[test]
    fn should_compute_offset_without_overflowing_u32() {
        let p = PageRequest {
            page: 50_000_000,
            per_page: 100,
        }
        .clamped();
        assert_eq!(p.offset(), 4_999_999_900);
    }

    #[test]
    fn should_compute_zero_offset_for_first_page() {
        assert_eq!(PageRequest::default().offset(), 0);
    }

    #[test]
    fn should_compute_total_pages_with_partial_last_page() {
        let p = Paginated::<u32>::new(vec![], 45, 1, 20);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn should_mark_last_page_without_next() {
        let p = Paginated::<u32>::new(vec![], 45, 3, 20);
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn should_report_one_page_for_empty_result() {
        let p = Paginated::<u32>::new(vec![], 0, 1, 20);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn should_not_round_down_exact_multiples() {
        let p = Paginated::<u32>::new(vec![], 40, 2, 20);
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next);
    }
}
