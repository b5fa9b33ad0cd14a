//! Client-side filter / sort / paginate pipeline used by every dashboard
//! table. Pages are zero-based; display adds one.

pub const PAGE_SIZE: usize = 10;

pub fn page_count(len: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(PAGE_SIZE)
    }
}

/// Keeps the current page in range after the filtered list shrinks.
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.min(page_count(len) - 1)
}

pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    items
        .iter()
        .skip(page * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

/// Case-insensitive substring match over any of the row's searchable
/// fields. An empty query matches everything.
pub fn matches_query(haystacks: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&query))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggle(self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

pub fn sort_by_str_key<T>(rows: &mut [T], key: impl Fn(&T) -> String, dir: SortDir) {
    rows.sort_by(|a, b| {
        let ord = key(a).to_lowercase().cmp(&key(b).to_lowercase());
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_never_overruns_by_more_than_one_page() {
        for len in 0..45 {
            let items: Vec<usize> = (0..len).collect();
            for requested in 0..8 {
                let page = clamp_page(requested, len);
                assert!(page * PAGE_SIZE <= len + PAGE_SIZE);
                let rows = paginate(&items, page);
                if len > 0 {
                    assert!(!rows.is_empty(), "len={len} requested={requested}");
                }
            }
        }
    }

    #[test]
    fn clamp_page_recovers_after_filter_shrinks() {
        assert_eq!(clamp_page(4, 45), 4);
        assert_eq!(clamp_page(4, 12), 1);
        assert_eq!(clamp_page(4, 0), 0);
    }

    #[test]
    fn paginate_returns_the_requested_window() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&items, 0).len(), 10);
        assert_eq!(paginate(&items, 2), vec![20, 21, 22, 23, 24]);
        assert!(paginate(&items, 3).is_empty());
    }

    #[test]
    fn matches_query_is_case_insensitive_and_multi_field() {
        assert!(matches_query(&["Dana Reyes", "Travis"], "reyes"));
        assert!(matches_query(&["Dana Reyes", "Travis"], "TRAV"));
        assert!(!matches_query(&["Dana Reyes"], "smith"));
        assert!(matches_query(&["anything"], "  "));
    }

    #[test]
    fn sort_by_str_key_respects_direction() {
        let mut rows = vec!["banana", "Apple", "cherry"];
        sort_by_str_key(&mut rows, |r| r.to_string(), SortDir::Asc);
        assert_eq!(rows, vec!["Apple", "banana", "cherry"]);
        sort_by_str_key(&mut rows, |r| r.to_string(), SortDir::Desc);
        assert_eq!(rows, vec!["cherry", "banana", "Apple"]);
    }
}
