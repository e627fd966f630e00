use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes percent-encoded when serializing a query component: everything
/// outside the RFC 3986 unreserved set.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a name or value for use in a query string.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}

/// Decode a raw query component: `+` means space (form convention), then
/// percent sequences are decoded. Malformed sequences pass through as-is.
pub fn decode_component(input: &str) -> String {
    let unplussed = input.replace('+', " ");
    percent_decode_str(&unplussed)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unreserved_passthrough() {
        assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode_component("foo bar"), "foo%20bar");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("1+1"), "1%2B1");
    }

    #[test]
    fn test_decode_percent_and_plus() {
        assert_eq!(decode_component("foo%20bar"), "foo bar");
        assert_eq!(decode_component("foo+bar"), "foo bar");
        assert_eq!(decode_component("a%26b%3Dc"), "a&b=c");
    }

    #[test]
    fn test_decode_plus_before_percent() {
        // %2B decodes to a literal '+', never to a space
        assert_eq!(decode_component("1%2B1"), "1+1");
    }

    #[test]
    fn test_decode_malformed_passthrough() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }

    #[test]
    fn test_round_trip() {
        let original = "värde med blanksteg & tecken";
        assert_eq!(decode_component(&encode_component(original)), original);
    }
}
