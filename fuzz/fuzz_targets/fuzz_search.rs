#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<String>, String)| {
    // Differential check against a naive scan over the corpus
    let (keys, query) = input;
    let mut tree = gstree::GeneralizedSuffixTree::new();
    for (i, key) in keys.iter().enumerate() {
        tree.put(key, i as u32);
    }

    let naive = !query.is_empty() && keys.iter().any(|k| k.contains(&query));
    assert_eq!(tree.contains(&query), naive);
});
