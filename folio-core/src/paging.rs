/// Tracks how much of a match set has been revealed. Pages are one-based and
/// every step reveals at most `page_size` further entries; the last page may
/// be partial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    page: usize,
    page_size: usize,
}

impl Cursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Reveals the next page and returns it, or returns an empty slice and
    /// leaves the cursor alone when everything is already revealed.
    pub fn advance<'a, T>(&mut self, matches: &'a [T]) -> &'a [T] {
        if !self.can_advance(matches) {
            return &[];
        }
        self.page += 1;
        self.visible_slice(matches)
    }

    pub fn can_advance<T>(&self, matches: &[T]) -> bool {
        self.remaining(matches) > 0
    }

    /// The most recently revealed page. For page one this is the initial
    /// window.
    pub fn visible_slice<'a, T>(&self, matches: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.page_size).min(matches.len());
        let end = self.revealed(matches);
        &matches[start..end]
    }

    /// Everything revealed so far, across all pages.
    pub fn revealed_slice<'a, T>(&self, matches: &'a [T]) -> &'a [T] {
        &matches[..self.revealed(matches)]
    }

    pub fn revealed<T>(&self, matches: &[T]) -> usize {
        self.end().min(matches.len())
    }

    pub fn remaining<T>(&self, matches: &[T]) -> usize {
        matches.len().saturating_sub(self.end())
    }

    fn end(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_the_initial_window() {
        let matches: Vec<usize> = (0..50).collect();
        let cursor = Cursor::new(36);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.visible_slice(&matches), &matches[..36]);
        assert_eq!(cursor.revealed(&matches), 36);
        assert_eq!(cursor.remaining(&matches), 14);
        assert!(cursor.can_advance(&matches));
    }

    #[test]
    fn advance_reveals_partial_last_page() {
        let matches: Vec<usize> = (0..50).collect();
        let mut cursor = Cursor::new(36);
        assert_eq!(cursor.advance(&matches), &matches[36..]);
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.revealed(&matches), 50);
        assert_eq!(cursor.remaining(&matches), 0);
        assert!(!cursor.can_advance(&matches));
    }

    #[test]
    fn advance_is_rejected_when_nothing_remains() {
        let matches: Vec<usize> = (0..36).collect();
        let mut cursor = Cursor::new(36);
        assert!(cursor.advance(&matches).is_empty());
        assert_eq!(cursor.page(), 1);

        let empty: Vec<usize> = Vec::new();
        assert!(cursor.advance(&empty).is_empty());
        assert_eq!(cursor.remaining(&empty), 0);
        assert!(cursor.visible_slice(&empty).is_empty());
    }

    #[test]
    fn reset_returns_to_first_page() {
        let matches: Vec<usize> = (0..100).collect();
        let mut cursor = Cursor::new(10);
        for _ in 0..5 {
            cursor.advance(&matches);
        }
        assert_eq!(cursor.page(), 6);
        cursor.reset();
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.revealed(&matches), 10);
    }

    #[test]
    fn reveal_invariants_hold_for_every_page() {
        for len in [0, 1, 9, 10, 11, 35, 36, 37, 72, 100] {
            let matches: Vec<usize> = (0..len).collect();
            let mut cursor = Cursor::new(10);
            let mut shown = cursor.visible_slice(&matches).to_vec();
            loop {
                assert!(cursor.visible_slice(&matches).len() <= cursor.page_size());
                assert!(cursor.revealed(&matches) <= matches.len());
                assert_eq!(shown.len(), cursor.revealed(&matches));
                assert_eq!(cursor.revealed_slice(&matches), shown.as_slice());
                assert_eq!(
                    cursor.remaining(&matches) == 0,
                    shown.len() == matches.len()
                );
                let next = cursor.advance(&matches);
                if next.is_empty() {
                    break;
                }
                shown.extend_from_slice(next);
            }
            assert_eq!(shown, matches);
        }
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let cursor = Cursor::new(0);
        assert_eq!(cursor.page_size(), 1);
    }
}
