use crate::domain::entities::table::PAGE_SIZE;

const WINDOW_RADIUS: usize = 2;
const WINDOW_SIZE: usize = 5;

/// 1-based page cursor over a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn total_pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size)
    }

    /// Index range of the current page, clamped to the row count.
    pub fn page_range(&self, row_count: usize) -> std::ops::Range<usize> {
        let start = (self.current_page.max(1) - 1) * self.page_size;
        let start = start.min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }

    pub fn go_to(&mut self, page: usize, row_count: usize) {
        let total = self.total_pages(row_count).max(1);
        self.current_page = page.clamp(1, total);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Prev { target: usize, enabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { target: usize, enabled: bool },
}

/// Navigation strip: prev, first (+ ellipsis), a window of up to five pages
/// around the current one, (ellipsis +) last, next.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);

    let mut start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let mut end = (current + WINDOW_RADIUS).min(total_pages);
    if end - start + 1 < WINDOW_SIZE.min(total_pages) {
        if current * 2 < total_pages {
            end = (start + WINDOW_SIZE - 1).min(total_pages);
        } else {
            start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
        }
    }

    let mut buttons = vec![PageButton::Prev {
        target: current.saturating_sub(1).max(1),
        enabled: current > 1,
    }];
    if start > 1 {
        buttons.push(PageButton::Page {
            number: 1,
            current: false,
        });
        if start > 2 {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons.extend((start..=end).map(|number| PageButton::Page {
        number,
        current: number == current,
    }));
    if end < total_pages {
        if end + 1 < total_pages {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(PageButton::Page {
            number: total_pages,
            current: false,
        });
    }
    buttons.push(PageButton::Next {
        target: (current + 1).min(total_pages),
        enabled: current < total_pages,
    });
    buttons
}
