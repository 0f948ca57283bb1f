use dataurl_core::{parse, DataUrl, Error, ErrorKind};

fn fail(input: &str) -> (ErrorKind, usize) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.input(), input);
    (err.kind(), err.position())
}

#[test]
fn media_type_and_parameter() {
    let url = parse("data:text/plain;charset=US-ASCII,hello").unwrap();
    assert_eq!(url.content_type(), Some("text/plain"));
    assert_eq!(url.parameters().len(), 1);
    assert_eq!(url.parameters()["charset"], "US-ASCII");
    assert!(!url.is_base64());
    assert_eq!(url.data(), b"hello");
}

#[test]
fn base64_payload() {
    let url = parse("data:text/plain;base64,aGVsbG8=").unwrap();
    assert_eq!(url.content_type(), Some("text/plain"));
    assert!(url.parameters().is_empty());
    assert!(url.is_base64());
    assert_eq!(url.data(), b"hello");

    // Padding is optional
    let url = parse("data:;base64,aGVsbG8").unwrap();
    assert_eq!(url.data(), b"hello");

    // Unescaping happens before decoding
    let url = parse("data:;base64,aGVsbG8%3D").unwrap();
    assert_eq!(url.data(), b"hello");
}

#[test]
fn parameters_before_base64() {
    let url = parse("data:image/png;name=a.png;base64,AAEC").unwrap();
    assert_eq!(url.content_type(), Some("image/png"));
    assert_eq!(url.parameters()["name"], "a.png");
    assert_eq!(url.data(), [0, 1, 2]);
}

#[test]
fn base64_as_attribute() {
    let url = parse("data:;base64=yes,x").unwrap();
    assert_eq!(url.parameters()["base64"], "yes");
    assert!(!url.is_base64());
}

#[test]
fn absent_media_type() {
    let url = parse("data:,A%20brief%20note").unwrap();
    assert_eq!(url.content_type(), None);
    assert!(url.parameters().is_empty());
    assert_eq!(url.data(), b"A brief note");
}

#[test]
fn empty_payload() {
    let url = parse("data:,").unwrap();
    assert!(url.data().is_empty());
    assert!(!url.is_base64());

    let url = parse("data:;base64,").unwrap();
    assert!(url.data().is_empty());
    assert!(url.is_base64());
}

#[test]
fn relaxed_values_and_payload() {
    let url = parse("data:;url=http://x/y?z=1,<p>\"hi\"</p>").unwrap();
    assert_eq!(url.parameters()["url"], "http://x/y?z=1");
    assert_eq!(url.data(), b"<p>\"hi\"</p>");
}

#[test]
fn escaped_tokens() {
    assert_eq!(
        fail("data:text/vnd%2Bx;a%20b=c,x").0,
        ErrorKind::InvalidToken
    );

    let url = parse("data:text/vnd%2Bx;ab=%2F,%e2%82%ac").unwrap();
    assert_eq!(url.content_type(), Some("text/vnd+x"));
    assert_eq!(url.parameters()["ab"], "/");
    assert_eq!(url.data(), "€".as_bytes());
}

#[test]
fn escaped_separators_in_value() {
    let url = parse("data:;a=x%3By%2Cz,q").unwrap();
    assert_eq!(url.parameters()["a"], "x;y,z");
    assert_eq!(url.to_text(), "data:;a=x%3By%2Cz,q");
}

#[test]
fn duplicate_attribute_keeps_position() {
    let url = parse("data:;a=1;a=2,x").unwrap();
    assert_eq!(url.parameters().len(), 1);
    assert_eq!(url.parameters()["a"], "2");

    let url = parse("data:;a=1;b=2;a=3,x").unwrap();
    let keys: Vec<_> = url.parameters().keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(url.parameters()["a"], "3");
}

#[test]
fn malformed_prefix() {
    assert_eq!(fail("not-a-data-url"), (ErrorKind::MalformedPrefix, 0));
    assert_eq!(fail("DATA:,x"), (ErrorKind::MalformedPrefix, 0));
    assert_eq!(fail(""), (ErrorKind::MalformedPrefix, 0));
}

#[test]
fn missing_separator() {
    assert_eq!(fail("data:"), (ErrorKind::MissingSeparator, 5));
    assert_eq!(fail("data:text/plain"), (ErrorKind::MissingSeparator, 15));
    assert_eq!(fail("data:text,x"), (ErrorKind::MissingSeparator, 5));
    assert_eq!(fail("data:text/,x"), (ErrorKind::MissingSeparator, 5));
    assert_eq!(fail("data:/plain,x"), (ErrorKind::MissingSeparator, 5));
    assert_eq!(fail("data:;foo,x"), (ErrorKind::MissingSeparator, 5));
    assert_eq!(fail("data:;a=,x"), (ErrorKind::MissingSeparator, 5));
    assert_eq!(fail("data:;base64x,x"), (ErrorKind::MissingSeparator, 12));
    assert_eq!(
        fail("data:;base64;a=1,x"),
        (ErrorKind::MissingSeparator, 12)
    );
}

#[test]
fn invalid_token() {
    assert_eq!(fail("data:te%20xt/plain,x"), (ErrorKind::InvalidToken, 5));
    assert_eq!(fail("data:text/pl%2Fain,x"), (ErrorKind::InvalidToken, 10));
    assert_eq!(fail("data:text/pl ain,x"), (ErrorKind::InvalidToken, 10));
    assert_eq!(fail("data:;a%3D=1,x"), (ErrorKind::InvalidToken, 6));
    assert_eq!(fail("data:;a=%20,x"), (ErrorKind::InvalidToken, 8));
    assert_eq!(fail("data:;a=\u{e9},x"), (ErrorKind::InvalidToken, 8));
    assert_eq!(fail("data:t\u{e9}xt/plain,x"), (ErrorKind::InvalidToken, 5));
    assert_eq!(fail("data:text/pl\u{e9},x"), (ErrorKind::InvalidToken, 10));
}

#[test]
fn invalid_payload() {
    assert_eq!(fail("data:,a b"), (ErrorKind::InvalidPayload, 7));
    assert_eq!(fail("data:,\u{e9}"), (ErrorKind::InvalidPayload, 6));
    assert_eq!(fail("data:,x\n"), (ErrorKind::InvalidPayload, 7));
}

#[test]
fn malformed_percent_escape() {
    assert_eq!(fail("data:,%zz"), (ErrorKind::MalformedPercentEscape, 6));
    assert_eq!(fail("data:,%41%"), (ErrorKind::MalformedPercentEscape, 9));
    assert_eq!(
        fail("data:te%2/plain,x"),
        (ErrorKind::MalformedPercentEscape, 7)
    );
    assert_eq!(
        fail("data:;a=%4,x"),
        (ErrorKind::MalformedPercentEscape, 8)
    );
}

#[test]
fn malformed_base64() {
    let input = "data:text/plain;base64,not-valid-base64!!";
    let err = parse(input).unwrap_err();
    assert!(matches!(err, Error::Base64 { .. }));
    assert_eq!(err.kind(), ErrorKind::MalformedBase64);
    assert_eq!(err.position(), 23);
    assert_eq!(err.input(), input);
}

#[test]
fn error_message() {
    let err = parse("not-a-data-url").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot parse at position 0 in not-a-data-url: expected `data:` prefix"
    );
}

#[test]
fn from_str_and_try_from() {
    let a: DataUrl = "data:,x".parse().unwrap();
    let b = DataUrl::try_from("data:,x").unwrap();
    assert_eq!(a, b);
}

#[test]
fn defaults() {
    let url = parse("data:,x").unwrap();
    assert_eq!(url.media_type(), "text/plain");
    assert_eq!(url.charset(), Some("US-ASCII"));

    let url = parse("data:image/gif;base64,R0lG").unwrap();
    assert_eq!(url.media_type(), "image/gif");
    assert_eq!(url.charset(), None);
}
