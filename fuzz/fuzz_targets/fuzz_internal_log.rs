#![no_main]

use common_errors::{CommonError, MAX_FIELD_OUTPUT_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let message = String::from_utf8_lossy(data).into_owned();
    let status = data
        .get(..2)
        .map_or(500, |b| u16::from_le_bytes([b[0], b[1]]));

    let err = CommonError::new("CommonError", message.clone())
        .with_status(status)
        .with_metadata("raw", message);

    let mut buffer = String::new();
    err.with_internal_log(|log| log.write_to(&mut buffer))
        .expect("writing to a String cannot fail");
    assert!(buffer.len() <= 2 * MAX_FIELD_OUTPUT_LEN + 128);
});
