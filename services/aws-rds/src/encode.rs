// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Percent encoding used by signature version 2.

use std::borrow::Cow;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Lookup table for the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '_', '.' and '~'.
///
/// Indexed by byte value. Bytes `>= 128` are never unreserved.
static UNRESERVED: [bool; 128] = unreserved_table();

const fn unreserved_table() -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < table.len() {
        let c = i as u8;
        table[i] = c.is_ascii_alphanumeric() || matches!(c, b'-' | b'_' | b'.' | b'~');
        i += 1;
    }
    table
}

/// Check if the byte may appear unescaped in a signed query.
#[inline]
pub fn is_unreserved(b: u8) -> bool {
    UNRESERVED.get(b as usize).copied().unwrap_or(false)
}

/// Percent encode input for signing.
///
/// Every byte outside the unreserved set is written as `%XX` with uppercase
/// hex digits. The input is returned as is when nothing needs escaping.
///
/// ```
/// use rdsquery_aws_rds::encode;
///
/// assert_eq!(encode("mydb"), "mydb");
/// assert_eq!(encode("2014-10-31T12:00:00Z"), "2014-10-31T12%3A00%3A00Z");
/// ```
pub fn encode(s: &str) -> Cow<'_, str> {
    if s.bytes().all(is_unreserved) {
        return Cow::Borrowed(s);
    }

    let mut encoded = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        if is_unreserved(b) {
            encoded.push(b as char);
        } else {
            encoded.push('%');
            encoded.push(HEX[(b >> 4) as usize] as char);
            encoded.push(HEX[(b & 0xF) as usize] as char);
        }
    }

    Cow::Owned(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
    /// for query values.
    static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'.')
        .remove(b'_')
        .remove(b'~');

    #[test_case("", ""; "empty")]
    #[test_case("DescribeDBInstances", "DescribeDBInstances"; "alphanumeric")]
    #[test_case("a-b_c.d~e", "a-b_c.d~e"; "unreserved punctuation")]
    #[test_case("a b", "a%20b"; "space")]
    #[test_case("a+b/c=", "a%2Bb%2Fc%3D"; "base64 characters")]
    #[test_case("100%", "100%25"; "percent")]
    #[test_case("é", "%C3%A9"; "non ascii")]
    #[test_case("*", "%2A"; "asterisk")]
    fn test_encode(input: &str, expected: &str) {
        assert_eq!(encode(input), expected);
    }

    #[test]
    fn test_encode_borrows_unreserved_input() {
        assert!(matches!(encode("mydb-01"), Cow::Borrowed("mydb-01")));
        assert!(matches!(encode("my db"), Cow::Owned(_)));
    }

    #[test]
    fn test_table_matches_aws_query_encode_set() {
        for b in 0u8..128 {
            let s = (b as char).to_string();
            assert_eq!(
                encode(&s),
                utf8_percent_encode(&s, &AWS_QUERY_ENCODE_SET).to_string(),
                "byte {b:#04x}"
            );
        }
    }

    #[test]
    fn test_bytes_above_ascii_are_reserved() {
        for b in 128u8..=255 {
            assert!(!is_unreserved(b), "byte {b:#04x}");
        }
    }

    #[test]
    fn test_encode_twice_escapes_percent() {
        for input in ["a b", "2014-10-31T12:00:00Z", "é", "a/b"] {
            let once = encode(input).into_owned();
            let twice = encode(&once).into_owned();

            assert_ne!(once, twice, "{input}");
            assert_eq!(twice, once.replace('%', "%25"), "{input}");
        }
    }
}
