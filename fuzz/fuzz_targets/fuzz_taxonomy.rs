#![no_main]

use common_errors::TaxonomyRegistry;
use libfuzzer_sys::fuzz_target;

// Each byte pair is a (child, parent) edge over a 16-name alphabet.
fuzz_target!(|data: &[u8]| {
    let mut registry = TaxonomyRegistry::new();

    for pair in data.chunks_exact(2) {
        let child = format!("K{}Error", pair[0] % 16);
        let parent = format!("K{}Error", pair[1] % 16);
        let _ = registry.register_parent(child.clone(), parent);
        registry.register_status(child, 400 + u16::from(pair[0] % 100));
    }

    for n in 0..16 {
        let name = format!("K{n}Error");
        let lineage: Vec<_> = registry.lineage(&name).collect();
        assert!(lineage.len() <= 16, "lineage of {name} revisits a node");
        let _ = registry.resolve_status(&name);
    }
});
