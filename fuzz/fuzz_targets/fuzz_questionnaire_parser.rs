//! Fuzz target for questionnaire parsing and evaluation.
//!
//! Goal: parsing, resolving, and evaluating should **never panic** on any input.
//! Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_questionnaire_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use mhguard_settings::{Overrides, QuestionnaireFormat};

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for format in [QuestionnaireFormat::Json, QuestionnaireFormat::Toml] {
        let Ok(parsed) = mhguard_settings::parse_questionnaire(text, format) else {
            continue;
        };
        if let Ok(resolved) = mhguard_settings::resolve_questionnaire(&parsed, &Overrides::default())
        {
            let _ = mhguard_domain::evaluate(&resolved.questionnaire);
        }
    }
});
