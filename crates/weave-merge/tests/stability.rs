//! Property tests: merging unchanged copies of the original is a no-op.

use proptest::prelude::*;
use weave_merge::merge;

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c", "}", ""]),
        0..20,
    )
    .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn single_copy_is_stable(original in lines_strategy()) {
        prop_assert_eq!(merge(&original, &[original.clone()]), original);
    }

    #[test]
    fn many_copies_are_stable(original in lines_strategy(), copies in 1usize..5) {
        let versions = vec![original.clone(); copies];
        prop_assert_eq!(merge(&original, &versions), original);
    }
}
