use serde::Serialize;

/// Page sizes offered by the "Entries per page" selector.
pub const PAGE_SIZE_CHOICES: [usize; 4] = [4, 25, 50, 100];

/// Tracks the current page window over the active record list.
///
/// The pager never stores the list itself; every operation that depends on
/// the number of records takes it as an argument so the window is always
/// derived from the current store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    go_to_input: String,
}

/// Rendering summary for the pagination footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_entries: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub go_to_input: String,
}

impl PageInfo {
    pub fn caption(&self) -> String {
        format!("Displaying Page {} of {}", self.page, self.total_pages)
    }
}

impl Pager {
    /// Builds a pager on page 1. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            go_to_input: String::new(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn go_to_input(&self) -> &str {
        &self.go_to_input
    }

    /// `ceil(len / page_size)`; zero for an empty list.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Page count as shown to users: an empty list still renders one page.
    pub fn display_total_pages(&self, len: usize) -> usize {
        self.page_count(len).max(1)
    }

    /// Slice of `records` for the current page, clamped to what exists.
    pub fn window<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= records.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(records.len());
        &records[start..end]
    }

    pub fn previous(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self, len: usize) -> bool {
        if self.page < self.page_count(len) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Changes the page size and returns to page 1. Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    pub fn set_go_to_input(&mut self, input: impl Into<String>) {
        self.go_to_input = input.into();
    }

    /// Jumps to `page` if it lies in `[1, display_total_pages]`.
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        if page >= 1 && page <= self.display_total_pages(len) {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// Applies the retained "Go to page" text. The input is cleared only when the jump succeeds.
    pub fn go(&mut self, len: usize) -> bool {
        let Ok(page) = self.go_to_input.trim().parse::<usize>() else {
            return false;
        };
        if self.go_to(page, len) {
            self.go_to_input.clear();
            true
        } else {
            false
        }
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Pulls the page back onto the last page after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.display_total_pages(len));
    }

    /// Back to page 1 with the given page size and an empty go-to field.
    pub fn reset(&mut self, page_size: usize) {
        self.page = 1;
        self.page_size = page_size.max(1);
        self.go_to_input.clear();
    }

    pub fn info(&self, len: usize) -> PageInfo {
        let window_len = self.window_len(len);
        let first_row = if window_len == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        };
        let last_row = if window_len == 0 {
            0
        } else {
            first_row + window_len - 1
        };

        PageInfo {
            page: self.page,
            page_size: self.page_size,
            total_pages: self.display_total_pages(len),
            total_entries: len,
            first_row,
            last_row,
            has_previous: self.page > 1,
            has_next: self.page < self.page_count(len),
            go_to_input: self.go_to_input.clone(),
        }
    }

    fn window_len(&self, len: usize) -> usize {
        let start = (self.page - 1).saturating_mul(self.page_size);
        len.saturating_sub(start).min(self.page_size)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
