use dataurl_core::{parse, DataUrl};

const VALID: &[&str] = &[
    "data:,",
    "data:,A%20brief%20note",
    "data:text/plain;charset=US-ASCII,hello",
    "data:text/plain;base64,aGVsbG8=",
    "data:;base64,aGVsbG8",
    "data:image/png;name=a.png;base64,AAEC",
    "data:;url=http://x/y?z=1,<p>",
    "data:text/vnd%2bx;ab=%2F,%e2%82%ac",
    "data:;a=1;b=2;a=3,x",
    "data:;a=x%3By%2Cz;b=%2c,q",
];

#[test]
fn canonical_form() {
    let url = parse("data:text/plain;charset=US-ASCII,hello").unwrap();
    assert_eq!(url.to_text(), "data:text/plain;charset=US-ASCII,hello");

    let url = parse("data:;base64,aGVsbG8").unwrap();
    assert_eq!(url.to_text(), "data:;base64,aGVsbG8=");

    let url = parse("data:;url=http://x/y,%e2%82%ac").unwrap();
    assert_eq!(url.to_text(), "data:;url=http%3A%2F%2Fx%2Fy,%E2%82%AC");
}

#[test]
fn reparse_is_stable() {
    for input in VALID {
        let url = parse(input).unwrap();
        let text = url.to_text();
        assert_eq!(parse(&text).unwrap(), url, "{input} -> {text}");
        assert_eq!(url.to_string(), text);
    }
}

#[test]
fn raw_bytes_round_trip() {
    let url = DataUrl::builder([0_u8, 1, 2, 255]).base64(false).build();
    let parsed = parse(&url.to_text()).unwrap();
    assert_eq!(parsed.data(), [0, 1, 2, 255]);
    assert!(!parsed.is_base64());
    assert_eq!(parsed, url);
}

#[test]
fn base64_round_trip() {
    let url = DataUrl::builder(vec![0xFB, 0xFF, 0x00])
        .content_type("application/octet-stream")
        .parameter("name", "blob.bin")
        .build();
    assert_eq!(
        url.to_text(),
        "data:application/octet-stream;name=blob.bin;base64,+/8A"
    );
    assert_eq!(parse(&url.to_text()).unwrap(), url);
}

#[test]
fn into_data() {
    let url = parse("data:,abc").unwrap();
    assert_eq!(url.into_data(), b"abc".to_vec());
}
