//! Fuzz target for the transcript JSON boundary.
//!
//! Documents come from untrusted uploads: parsing must only ever return an
//! error, and any document that does parse must sanitize without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ss_redact::Sanitizer;
use ss_schema::Transcript;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(transcript) = Transcript::from_json(raw) {
        let _ = Sanitizer::shared().sanitize_session(&transcript);
    }
});
