//! Property tests for page windowing.

use backend::paging::{Page, PageRequest};
use proptest::prelude::*;

proptest! {
    #[test]
    fn window_never_exceeds_requested_size(len in 0usize..200, page in 0u64..20, size in 1u64..50) {
        let all: Vec<u64> = (0..len as u64).collect();
        let out = Page::paginate(all, PageRequest::of(page, size));

        prop_assert!(out.content.len() as u64 <= size);
        prop_assert_eq!(out.total_elements, len as u64);
    }

    #[test]
    fn windows_are_disjoint_and_cover_everything(len in 0usize..200, size in 1u64..50) {
        let all: Vec<u64> = (0..len as u64).collect();
        let total_pages = Page::paginate(all.clone(), PageRequest::of(0, size)).total_pages();

        let mut seen = Vec::new();
        for page in 0..total_pages {
            seen.extend(Page::paginate(all.clone(), PageRequest::of(page, size)).content);
        }

        prop_assert_eq!(seen, all);
    }

    #[test]
    fn map_preserves_window_shape(len in 0usize..100, page in 0u64..10, size in 1u64..20) {
        let all: Vec<u64> = (0..len as u64).collect();
        let window = Page::paginate(all, PageRequest::of(page, size));
        let expected_len = window.content.len();

        let mapped = window.map(|n| n.to_string());

        prop_assert_eq!(mapped.content.len(), expected_len);
        prop_assert_eq!(mapped.total_elements, len as u64);
    }
}
