use crate::{Result, SearchError};
use std::slice::Chunks;

/// Fixed-size pages over a borrowed slice. The last page may be shorter.
/// Iterating does not consume the paginator, so it can be walked again.
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(SearchError::ZeroPageSize);
        }
        Ok(Self { items, page_size })
    }

    /// Number of pages.
    pub fn len(&self) -> usize { self.items.len().div_ceil(self.page_size) }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn page(&self, n: usize) -> Option<&'a [T]> { self.iter().nth(n) }

    pub fn iter(&self) -> Chunks<'a, T> { self.items.chunks(self.page_size) }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = Chunks<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = Chunks<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Paginator<'_, T>> { Paginator::new(items, page_size) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_fixed_pages() {
        let items = [1, 2, 3, 4, 5];
        let pages = paginate(&items, 2).unwrap();
        assert_eq!(pages.len(), 3);
        let collected: Vec<&[i32]> = pages.iter().collect();
        assert_eq!(collected, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
        assert_eq!(pages.page(2), Some(&[5][..]));
        assert_eq!(pages.page(3), None);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items = [1, 2, 3, 4];
        assert_eq!(paginate(&items, 2).unwrap().len(), 2);
        assert_eq!(paginate(&items, 10).unwrap().len(), 1);
    }

    #[test]
    fn restartable_and_empty() {
        let items = [1, 2, 3];
        let pages = paginate(&items, 2).unwrap();
        assert_eq!((&pages).into_iter().count(), 2);
        assert_eq!((&pages).into_iter().count(), 2);

        let none: [i32; 0] = [];
        let pages = paginate(&none, 3).unwrap();
        assert!(pages.is_empty());
        assert_eq!(pages.iter().count(), 0);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(paginate(&[1], 0).unwrap_err(), SearchError::ZeroPageSize);
    }
}
