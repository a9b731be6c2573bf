//! Percent-escaping for generic type paths used as URL path segments.
//!
//! The fullnode REST API addresses a resource by its fully-qualified type,
//! e.g. `0x..::liquidity_pool::LiquidityPool<X,Y,Curve>`. The angle brackets
//! must be percent-encoded and spaces become `+` before the path can be used
//! in a request URL.

const UPPERHEX: &[u8; 16] = b"0123456789ABCDEF";

fn should_escape(c: u8) -> bool {
    c == b'<' || c == b'>'
}

/// Escape `<` and `>` as `%XX` and spaces as `+`; all other bytes pass
/// through unchanged. Single pass, deterministic, identity on inputs free of
/// the three reserved characters.
pub fn escape_type_path(s: &str) -> String {
    let bytes = s.as_bytes();
    let hex_count = bytes.iter().filter(|&&c| should_escape(c)).count();
    if hex_count == 0 && !bytes.contains(&b' ') {
        return s.to_string();
    }

    let mut out = Vec::with_capacity(bytes.len() + 2 * hex_count);
    for &c in bytes {
        match c {
            b' ' => out.push(b'+'),
            c if should_escape(c) => {
                out.push(b'%');
                out.push(UPPERHEX[(c >> 4) as usize]);
                out.push(UPPERHEX[(c & 15) as usize]);
            }
            c => out.push(c),
        }
    }
    // Only ASCII was rewritten, the rest was copied verbatim.
    String::from_utf8(out).expect("escaped type path is valid utf-8")
}
