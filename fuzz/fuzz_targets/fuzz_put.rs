#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|keys: Vec<(String, u8)>| {
    // Arbitrary keys under arbitrary ids: construction must not panic and
    // every non-empty key must stay findable under its id
    let mut tree = gstree::GeneralizedSuffixTree::new();
    for (key, id) in &keys {
        tree.put(key, u32::from(*id));
    }
    for (key, id) in &keys {
        if !key.is_empty() {
            assert!(tree.search(key, 0).contains(&u32::from(*id)));
        }
    }
});
