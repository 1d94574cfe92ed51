//! Combinators for the pieces of a design file URL.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::opt,
    sequence::{delimited, pair, preceded},
    IResult,
};

/// Parse a `/file/<id>` or `/design/<id>` route, returning the id.
pub fn route_segment(input: &str) -> IResult<&str, &str> {
    preceded(
        delimited(char('/'), alt((tag("file"), tag("design"))), char('/')),
        take_while1(|c: char| c.is_ascii_alphanumeric()),
    )(input)
}

/// Parse an optional `/<segment>` following the document id.
pub fn name_segment(input: &str) -> IResult<&str, Option<&str>> {
    opt(preceded(char('/'), take_while1(|c: char| c != '/')))(input)
}

/// Parse the raw value of a node id: digits and separators, possibly escaped.
pub fn node_id_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | ';' | '%'))(input)
}

/// Parse a `node-id=<value>` pair.
pub fn node_id_param(input: &str) -> IResult<&str, &str> {
    preceded(tag("node-id="), node_id_value)(input)
}

/// Parse one `%XX` escape.
fn percent_escape(input: &str) -> IResult<&str, u8> {
    let (rest, (_, hex)) = pair(
        char('%'),
        nom::bytes::complete::take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
    )(input)?;
    // Two hex digits always fit in a byte.
    let byte = u8::from_str_radix(hex, 16).unwrap_or_default();
    Ok((rest, byte))
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes pass through.
pub fn percent_decode(input: &str) -> String {
    let mut bytes = Vec::with_capacity(input.len());
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        if let Ok((remaining, byte)) = percent_escape(rest) {
            bytes.push(byte);
            rest = remaining;
            continue;
        }
        if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        rest = &rest[c.len_utf8()..];
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Split a query string into key/value pairs.
pub fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| p.split_once('=').unwrap_or((p, "")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segment() {
        assert_eq!(route_segment("/file/AbC123/Name"), Ok(("/Name", "AbC123")));
        assert_eq!(route_segment("/design/XyZ9"), Ok(("", "XyZ9")));
        assert!(route_segment("/proto/AbC123").is_err());
        assert!(route_segment("/file/").is_err());
    }

    #[test]
    fn test_name_segment() {
        assert_eq!(name_segment("/My-File/extra"), Ok(("/extra", Some("My-File"))));
        assert_eq!(name_segment(""), Ok(("", None)));
    }

    #[test]
    fn test_node_id_param() {
        assert_eq!(node_id_param("node-id=12-34&t=1"), Ok(("&t=1", "12-34")));
        assert_eq!(node_id_param("node-id=12%3A34"), Ok(("", "12%3A34")));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("12%3A34"), "12:34");
        assert_eq!(percent_decode("Design%20System+v2"), "Design System v2");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn test_query_pairs() {
        let pairs: Vec<_> = query_pairs("node-id=1-2&page-id=3&flag").collect();
        assert_eq!(pairs, vec![("node-id", "1-2"), ("page-id", "3"), ("flag", "")]);
    }
}
