use dataurl_core::encoding::{escape, unescape};
use dataurl_core::{parse, DataUrl, Parameters};
use proptest::collection::vec;
use proptest::prelude::*;

const TOKEN: &str = "[!#$%&'*+.0-9A-Z^_`a-z{|}~-]{1,8}";
const VALUE: &str = "[!-~]{1,12}";

proptest! {
    #[test]
    fn escape_then_unescape(bytes in vec(any::<u8>(), 0..64)) {
        let text = escape(&bytes);
        prop_assert_eq!(&*unescape(&text).unwrap(), bytes.as_slice());
    }

    #[test]
    fn serialize_then_parse(
        data in vec(any::<u8>(), 0..64),
        media in proptest::option::of((TOKEN, TOKEN)),
        pairs in vec((TOKEN, VALUE), 0..4),
        is_base64 in any::<bool>(),
    ) {
        let content_type = media.map(|(kind, subtype)| {
            format!("{kind}/{subtype}")
        });
        let parameters: Parameters = pairs.into_iter().collect();
        let url = DataUrl::from_parts(data, content_type, parameters, is_base64);
        prop_assert_eq!(parse(&url.to_text()).unwrap(), url);
    }
}
