#![no_main]

use libfuzzer_sys::fuzz_target;
use zb_installcode::parse_install_code;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Any input must either parse or fail with an error, never panic
    if let Ok(parsed) = parse_install_code(input) {
        assert!(parsed.device_address.as_str().starts_with("0x"));
    }

    // Same bytes wrapped in the tagged layout
    let tagged = format!("G$M:F$A:{input}$I:{input}");
    let _ = parse_install_code(&tagged);
});
