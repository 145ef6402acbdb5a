//! Property tests for the batch partition arithmetic.

use feedgen_core::query_builder::Pagination;
use proptest::prelude::*;

proptest! {
    /// Zero items produce zero batches; otherwise ceil(total / size)
    #[test]
    fn batch_count_partitions_the_collection(total in 0u64..100_000, size in 1u64..1_000) {
        let count = Pagination::batch_count_for(total, size);

        if total == 0 {
            prop_assert_eq!(count, 0);
        } else {
            // Enough batches to hold everything
            prop_assert!(count * size >= total);
            // But no entirely empty trailing batch
            prop_assert!((count - 1) * size < total);
        }
    }

    /// The count is consistent with slicing the collection into pages
    #[test]
    fn batch_count_matches_page_slicing(total in 0u64..5_000, size in 1u64..200) {
        let mut pages = 0u64;
        let mut offset = 0u64;
        while offset < total {
            pages += 1;
            offset += size.min(total - offset);
        }

        prop_assert_eq!(Pagination::batch_count_for(total, size), pages);
    }
}
