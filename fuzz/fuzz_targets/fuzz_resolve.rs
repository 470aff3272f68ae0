#![no_main]

use drivedb_rs::BUILTIN_DB;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Resolution over arbitrary identification bytes is total and pure.
    let resolved = BUILTIN_DB.resolve(data);
    assert_eq!(resolved.family, "DEFAULT");
});
