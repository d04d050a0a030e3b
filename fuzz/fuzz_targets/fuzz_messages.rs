#![no_main]

use common_errors::{
    ArgumentInvalidOptions, ErrorTemplate, MessageValue, NoAccessOptions, Param,
    UnavailableOptions,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = text.splitn(3, '\u{0}');
    let first = parts.next().unwrap_or_default().to_owned();
    let second = parts.next().unwrap_or_default().to_owned();
    let third = parts.next().unwrap_or_default().to_owned();

    let hidden = data.first().is_some_and(|b| b & 1 == 1);
    let target: Param<String> = if hidden {
        Param::hidden(first.clone())
    } else {
        Param::from(first.clone())
    };

    let message = UnavailableOptions::new()
        .target(target)
        .issue(second.clone())
        .expected_time(third.clone())
        .generate_message();
    assert!(message.ends_with('.'));

    let err = ArgumentInvalidOptions::new()
        .argument_name(first)
        .argument_value(MessageValue::from(second))
        .issue(third.clone())
        .build();
    assert!(!err.message().is_empty());

    let _ = NoAccessOptions::new().resource(third).build();
});
