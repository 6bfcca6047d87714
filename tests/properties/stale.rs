//! Property tests for stale artifact selection.

use std::collections::HashSet;

use proptest::prelude::*;

use ccsync::domain::services::{stale_artifacts, ArtifactName};

fn artifact_names() -> impl Strategy<Value = Vec<String>> {
    let name = prop_oneof![
        (0..3usize, 0..3usize, 0..5usize)
            .prop_map(|(peer, cc, v)| format!("dev-peer{peer}-cc{cc}-{v}.0")),
        proptest::string::string_regex("[a-z/]{1,12}").unwrap(),
    ];
    proptest::collection::vec(name, 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: exactly one artifact survives per (peer, chaincode); foreign names are untouched.
    #[test]
    fn property_newest_survives(names in artifact_names()) {
        let stale = stale_artifacts(&names);

        let mut keys = HashSet::new();
        let mut expected = Vec::new();
        for name in &names {
            if let Some(parsed) = ArtifactName::parse(name) {
                if !keys.insert((parsed.peer, parsed.chaincode)) {
                    expected.push(name.clone());
                }
            }
        }
        prop_assert_eq!(&stale, &expected);
        prop_assert!(stale.iter().all(|name| name.starts_with("dev-")));
    }
}
