#![no_main]

use drivedb_rs::{decode_attributes, load_builtin, SmartPage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = SmartPage::parse(data);

    // Pages of the accepted size must decode without panicking, whatever
    // their slot contents.
    if data.len() >= 362 {
        if let Ok(page) = SmartPage::parse(&data[..362]) {
            let db = load_builtin().expect("builtin database loads");
            let resolved = db.resolve(b"");
            let _ = decode_attributes(&resolved, &page);
        }
    }
});
