#![no_main]

use drivedb_rs::IdentifyDevice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must either parse or fail with a shape error, never
    // read out of bounds.
    let _ = IdentifyDevice::parse(data);

    // Exercise the string accessors on records of the accepted size.
    if data.len() >= 512 {
        if let Ok(ident) = IdentifyDevice::parse(&data[..512]) {
            let _ = ident.model_number();
            let _ = ident.serial_number();
            let _ = ident.firmware_revision();
            let _ = ident.model_number_raw();
        }
    }
});
