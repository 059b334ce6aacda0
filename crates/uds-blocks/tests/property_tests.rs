use proptest::prelude::*;
use uds_blocks::{BlockMarkers, splice};

// Text drawn from this alphabet can never contain a marker.
const PLAIN: &str = "[a-z0-9 :.\n]{0,64}";

proptest! {
    #[test]
    fn test_apply_twice_equals_apply_once(prefix in PLAIN, content in PLAIN) {
        let markers = BlockMarkers::haproxy_uds();
        let once = splice(&prefix, &markers, Some(&content), false).unwrap();
        let twice = splice(&once, &markers, Some(&content), false).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_preserves_prefix_and_suffix(
        prefix in PLAIN,
        suffix in PLAIN,
        old in PLAIN,
        new in PLAIN,
    ) {
        let markers = BlockMarkers::haproxy_uds();
        let text = format!("{prefix}{}{suffix}", markers.render(&old));

        let replaced = splice(&text, &markers, Some(&new), true).unwrap();
        prop_assert_eq!(replaced, format!("{prefix}{}{suffix}", markers.render(&new)));

        let removed = splice(&text, &markers, None, true).unwrap();
        prop_assert_eq!(removed, format!("{prefix}{suffix}"));
    }

    #[test]
    fn test_insert_keeps_whole_text_as_prefix(text in PLAIN, content in PLAIN) {
        let markers = BlockMarkers::haproxy_uds();
        let out = splice(&text, &markers, Some(&content), false).unwrap();
        prop_assert_eq!(out, format!("{text}{}\n", markers.render(&content)));
    }
}
