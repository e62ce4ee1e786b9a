//! Fixed-size, non-overlapping pages over a slice of rows.

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    rows: &'a [T],
    page_size: usize,
    offset: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// A page size of 0 is treated as 1.
    pub fn new(rows: &'a [T], page_size: usize) -> Self {
        Self {
            rows,
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True while the next page holds at least one row.
    pub fn has_more(&self) -> bool {
        self.offset < self.rows.len()
    }

    /// Returns the rows at the current offset and advances by one page.
    /// Past the end the page is empty.
    pub fn next_page(&mut self) -> &'a [T] {
        let rows = self.rows;
        let start = self.offset.min(rows.len());
        let end = self.offset.saturating_add(self.page_size).min(rows.len());
        if self.offset < rows.len() {
            self.offset += self.page_size;
        }
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_rows_in_pages_of_five() {
        let rows: Vec<u32> = (0..12).collect();
        let mut p = Paginator::new(&rows, DEFAULT_PAGE_SIZE);

        assert_eq!(p.next_page(), &[0, 1, 2, 3, 4]);
        assert_eq!(p.next_page(), &[5, 6, 7, 8, 9]);
        assert!(p.has_more());
        assert_eq!(p.next_page(), &[10, 11]);
        assert!(!p.has_more());
        assert!(p.next_page().is_empty());
        assert!(p.next_page().is_empty());
        assert_eq!(p.offset(), 15);
    }

    #[test]
    fn empty_input() {
        let rows: Vec<u32> = Vec::new();
        let mut p = Paginator::new(&rows, 5);
        assert!(!p.has_more());
        assert!(p.next_page().is_empty());
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let rows = [1, 2];
        let mut p = Paginator::new(&rows, 0);
        assert_eq!(p.page_size(), 1);
        assert_eq!(p.next_page(), &[1]);
    }
}
