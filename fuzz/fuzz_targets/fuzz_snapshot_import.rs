#![no_main]

use curve_editor::{CurveSet, CurveSnapshot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = CurveSnapshot::from_json(text) else {
        return;
    };

    let mut curve = CurveSet::new();
    curve.replace_from_snapshot(&snapshot);

    for pair in curve.points().windows(2) {
        assert!(pair[0].position.x <= pair[1].position.x);
    }
    let _ = curve.value_at(0.0);
});
