use crate::common::{el_with, mrkdwn};
use blockkit_babel::{render_mrkdwn, AttrValue, FormatOptions, RenderError};

#[test]
fn test_time_with_timestamp() {
    let time = el_with("time", vec![("datetime", 1552212000_i64)], "{date_num} at {time}");
    assert_eq!(
        mrkdwn(time),
        "<!date^1552212000^{date_num} at {time}|2019-03-10 at 10:00 AM>"
    );
}

#[test]
fn test_time_with_date_string_and_fallback() {
    let time = el_with(
        "time",
        vec![
            ("datetime", AttrValue::from("2019-03-10T10:00:00Z")),
            ("fallback", AttrValue::from("Mar 10")),
        ],
        "{date_short}",
    );
    assert_eq!(mrkdwn(time), "<!date^1552212000^{date_short}|Mar 10>");
}

#[test]
fn test_pipe_in_format_is_replaced() {
    let time = el_with("time", vec![("datetime", "1552212000")], "{date_num}|x");
    assert_eq!(
        mrkdwn(time),
        "<!date^1552212000^{date_num}\u{01c0}x|2019-03-10\u{01c0}x>"
    );
}

#[test]
fn test_invalid_datetime() {
    let time = el_with("time", vec![("datetime", "yesterday")], "{date}");
    assert_eq!(
        render_mrkdwn(time, &FormatOptions::default()),
        Err(RenderError::InvalidDatetime("yesterday".into()))
    );
}
