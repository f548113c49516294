use crate::utils;
use hedera_walkthrough::resolver::{resolve, ResolveError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_paths_resolve_to_their_leaf(
        segments in utils::segments(),
        leaf in utils::scalar_leaf(),
    ) {
        let doc = utils::nest(&segments, leaf.clone());
        prop_assert_eq!(resolve(&doc, &segments).unwrap(), &leaf);
    }

    #[test]
    fn renamed_final_segments_report_missing_key(
        segments in utils::segments(),
        leaf in utils::scalar_leaf(),
    ) {
        let doc = utils::nest(&segments, leaf);
        let mut query = segments.clone();
        // Each nesting level holds exactly one key, so any longer name misses.
        let renamed = format!("{}-missing", query.last().unwrap());
        *query.last_mut().unwrap() = renamed.clone();

        prop_assert_eq!(
            resolve(&doc, &query).unwrap_err(),
            ResolveError::MissingKey { segment: renamed }
        );
    }

    #[test]
    fn descending_past_the_leaf_reports_type_mismatch(
        segments in utils::segments(),
        leaf in utils::scalar_leaf(),
    ) {
        let doc = utils::nest(&segments, leaf);
        let mut query = segments.clone();
        query.push("deeper".to_owned());

        let err = resolve(&doc, &query).unwrap_err();
        match err {
            ResolveError::TypeMismatch { segment, expected, .. } => {
                prop_assert_eq!(&segment, segments.last().unwrap());
                prop_assert_eq!(expected, "an object");
            }
            other => prop_assert!(false, "expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_paths_always_fail(doc in utils::json_value()) {
        let empty: [&str; 0] = [];
        prop_assert_eq!(resolve(&doc, &empty).unwrap_err(), ResolveError::EmptyPath);
    }
}
