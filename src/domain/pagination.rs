//! Page-number resolution and page slices.
//!
//! Listing pages never fail on a bad `page` parameter:
//!
//! - missing or non-integer → first page
//! - integer outside `1..=num_pages` → last page
//!
//! An empty collection still has one (empty) page.

/// First page number; pages are 1-indexed.
pub const FIRST_PAGE: u32 = 1;

/// Splits a collection of `total_items` into pages of `per_page` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u32,
    total_items: u64,
}

impl Paginator {
    /// Creates a paginator. `per_page` is clamped to at least 1.
    pub fn new(per_page: u32, total_items: u64) -> Self {
        Self {
            per_page: per_page.max(1),
            total_items,
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Number of pages, never less than one.
    pub fn num_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.per_page));
        u32::try_from(pages).unwrap_or(u32::MAX).max(FIRST_PAGE)
    }

    /// Resolves a raw `page` query value to a valid page number.
    pub fn resolve(&self, raw: Option<&str>) -> u32 {
        let Some(number) = raw.and_then(|s| s.trim().parse::<i64>().ok()) else {
            return FIRST_PAGE;
        };

        let last = self.num_pages();
        if number < i64::from(FIRST_PAGE) || number > i64::from(last) {
            last
        } else {
            number as u32
        }
    }

    /// Row offset of the first item on `page`.
    pub fn offset(&self, page: u32) -> i64 {
        i64::from(page.saturating_sub(1)) * i64::from(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// Wraps already-sliced items as page `number`.
    pub fn page<T>(&self, number: u32, items: Vec<T>) -> Page<T> {
        Page {
            items,
            number,
            num_pages: self.num_pages(),
            per_page: self.per_page,
            total_items: self.total_items,
        }
    }
}

/// One page of a paginated collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub num_pages: u32,
    pub per_page: u32,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > FIRST_PAGE
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_page_number(&self) -> u32 {
        self.number.saturating_sub(1).max(FIRST_PAGE)
    }

    pub fn next_page_number(&self) -> u32 {
        (self.number + 1).min(self.num_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            per_page: self.per_page,
            total_items: self.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pages() {
        assert_eq!(Paginator::new(3, 0).num_pages(), 1);
        assert_eq!(Paginator::new(3, 3).num_pages(), 1);
        assert_eq!(Paginator::new(3, 4).num_pages(), 2);
        assert_eq!(Paginator::new(3, 9).num_pages(), 3);
    }

    #[test]
    fn test_missing_page_is_first() {
        assert_eq!(Paginator::new(3, 10).resolve(None), 1);
    }

    #[test]
    fn test_non_integer_page_is_first() {
        let paginator = Paginator::new(3, 10);
        assert_eq!(paginator.resolve(Some("abc")), 1);
        assert_eq!(paginator.resolve(Some("")), 1);
        assert_eq!(paginator.resolve(Some("2.5")), 1);
    }

    #[test]
    fn test_out_of_range_page_is_last() {
        let paginator = Paginator::new(3, 10);
        assert_eq!(paginator.resolve(Some("5")), 4);
        assert_eq!(paginator.resolve(Some("99999999999")), 4);
        assert_eq!(paginator.resolve(Some("0")), 4);
        assert_eq!(paginator.resolve(Some("-1")), 4);
    }

    #[test]
    fn test_in_range_page_is_kept() {
        let paginator = Paginator::new(3, 10);
        assert_eq!(paginator.resolve(Some("2")), 2);
        assert_eq!(paginator.resolve(Some(" 3 ")), 3);
    }

    #[test]
    fn test_offset_and_limit() {
        let paginator = Paginator::new(3, 10);
        assert_eq!(paginator.offset(1), 0);
        assert_eq!(paginator.offset(3), 6);
        assert_eq!(paginator.limit(), 3);
    }

    #[test]
    fn test_page_navigation() {
        let paginator = Paginator::new(3, 7);

        let first = paginator.page(1, vec![1, 2, 3]);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.next_page_number(), 2);

        let last = paginator.page(3, vec![7]);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.previous_page_number(), 2);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Paginator::new(3, 4).page(2, vec![4]).map(|n| n * 10);
        assert_eq!(page.items, vec![40]);
        assert_eq!(page.number, 2);
        assert_eq!(page.num_pages, 2);
        assert_eq!(page.total_items, 4);
    }
}
