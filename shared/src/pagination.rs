//! Fixed-size page windows over an already filtered list.

use thiserror::Error;

/// Requested page lies outside `1..=total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page {requested} is out of range (total pages: {total})")]
pub struct PageOutOfRange {
    pub requested: usize,
    pub total: usize,
}

/// Splits lists into pages of `page_size` items. Pages are 1-based.
///
/// Out-of-range requests are rejected, not clamped; callers keep their page
/// state inside `1..=total_pages` and disable the controls at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`; zero for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Items of page `page`.
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> Result<&'a [T], PageOutOfRange> {
        let total = self.total_pages(items.len());
        if page < 1 || page > total {
            return Err(PageOutOfRange {
                requested: page,
                total,
            });
        }
        let start = (page - 1) * self.page_size;
        let end = usize::min(start + self.page_size, items.len());
        Ok(&items[start..end])
    }

    pub fn has_prev(&self, page: usize) -> bool {
        page > 1
    }

    pub fn has_next(&self, page: usize, len: usize) -> bool {
        page < self.total_pages(len)
    }

    /// Pull a page number back into range after the list changed size.
    /// Returns 1 for an empty list so the controls have something to show.
    pub fn clamp(&self, page: usize, len: usize) -> usize {
        page.clamp(1, self.total_pages(len).max(1))
    }
}

/// One button position in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

/// Numbered buttons to show for `current` of `total` pages.
///
/// Up to seven pages are all shown. Beyond that the first and last page are
/// always present with a window around `current` and ellipses over the gaps.
pub fn page_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::new();
    slots.push(PageSlot::Page(1));

    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total - 1);

    if current <= 3 {
        start = 2;
        end = 5;
    } else if current + 2 >= total {
        start = total.saturating_sub(4).max(2);
        end = total - 1;
    }

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    for page in start..=end {
        slots.push(PageSlot::Page(page));
    }
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }

    slots.push(PageSlot::Page(total));
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_items_in_pages_of_six() {
        let items: Vec<u32> = (1..=13).collect();
        let pager = Paginator::new(6);

        assert_eq!(pager.total_pages(items.len()), 3);
        assert_eq!(pager.page(&items, 1), Ok(&items[0..6]));
        assert_eq!(pager.page(&items, 2), Ok(&items[6..12]));
        assert_eq!(pager.page(&items, 3), Ok(&[13][..]));
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let items: Vec<u32> = (1..=13).collect();
        let pager = Paginator::new(6);

        assert_eq!(
            pager.page(&items, 0),
            Err(PageOutOfRange {
                requested: 0,
                total: 3
            })
        );
        assert!(pager.page(&items, 4).is_err());
        assert!(!pager.has_prev(1));
        assert!(pager.has_next(2, items.len()));
        assert!(!pager.has_next(3, items.len()));
    }

    #[test]
    fn empty_list_has_no_pages() {
        let pager = Paginator::new(6);
        let empty: [u32; 0] = [];

        assert_eq!(pager.total_pages(0), 0);
        assert!(pager.page(&empty, 1).is_err());
        assert_eq!(pager.clamp(4, 0), 1);
        assert_eq!(Paginator::new(0).page_size(), 1);
    }

    #[test]
    fn clamp_pulls_stale_page_back_into_range() {
        let pager = Paginator::new(6);
        assert_eq!(pager.clamp(5, 13), 3);
        assert_eq!(pager.clamp(0, 13), 1);
        assert_eq!(pager.clamp(2, 13), 2);
    }

    #[test]
    fn slots_collapse_long_ranges() {
        use PageSlot::{Ellipsis, Page};

        assert_eq!(page_slots(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_slots(1, 10), vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Ellipsis("right"),
            Page(10)
        ]);
        assert_eq!(page_slots(6, 12), vec![
            Page(1),
            Ellipsis("left"),
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Page(8),
            Ellipsis("right"),
            Page(12)
        ]);
        assert_eq!(page_slots(10, 10), vec![
            Page(1),
            Ellipsis("left"),
            Page(6),
            Page(7),
            Page(8),
            Page(9),
            Page(10)
        ]);
    }
}
