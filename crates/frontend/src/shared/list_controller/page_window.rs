/// Page buttons to render for the current position, 1-indexed.
///
/// All pages when there are at most 3; otherwise a window of 3 clamped to
/// the edges: `{1,2,3}` on the first page, the last three on the last
/// page, `{page-1, page, page+1}` in between.
pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= 3 {
        return (1..=total_pages).collect();
    }
    if page <= 1 {
        vec![1, 2, 3]
    } else if page >= total_pages {
        vec![total_pages - 2, total_pages - 1, total_pages]
    } else {
        vec![page - 1, page, page + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_edges() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3]);
        assert_eq!(page_window(10, 10), vec![8, 9, 10]);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(page_window(5, 10), vec![4, 5, 6]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3]);
        assert_eq!(page_window(9, 10), vec![8, 9, 10]);
    }

    #[test]
    fn test_few_pages_show_all() {
        assert_eq!(page_window(2, 2), vec![1, 2]);
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn test_no_pages() {
        assert!(page_window(1, 0).is_empty());
    }
}
