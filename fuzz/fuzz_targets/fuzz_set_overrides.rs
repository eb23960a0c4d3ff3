//! Fuzz target for `--set KEY=BOOL` assignment parsing.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_set_overrides
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct OverrideInput {
    assignments: Vec<String>,
}

fuzz_target!(|input: OverrideInput| {
    if input.assignments.len() > 40 {
        return;
    }
    let _ = mhguard_settings::Overrides::from_assignments(&input.assignments);
});
