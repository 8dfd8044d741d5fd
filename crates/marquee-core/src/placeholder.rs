//! Generated fallback posters for movies without artwork.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped by the data-URI encoder (RFC 3986 unreserved
/// plus `!*'()`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const PLACEHOLDER_WIDTH: u32 = 400;
pub const PLACEHOLDER_HEIGHT: u32 = 600;

/// Title used when the caller has none.
pub const DEFAULT_LABEL: &str = "Movie";

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// SVG markup for a 2:3 poster with `label` centred on a slate gradient.
pub fn placeholder_svg(label: &str) -> String {
    let label = if label.is_empty() { DEFAULT_LABEL } else { label };
    let w = PLACEHOLDER_WIDTH;
    let h = PLACEHOLDER_HEIGHT;
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\
         <defs><linearGradient id='g' x1='0' x2='1' y1='0' y2='1'>\
         <stop offset='0' stop-color='#cbd5e1'/><stop offset='1' stop-color='#e2e8f0'/>\
         </linearGradient></defs>\
         <rect width='{w}' height='{h}' fill='url(#g)'/>\
         <text x='{cx}' y='{cy}' text-anchor='middle' \
         font-family='system-ui, -apple-system, Segoe UI, Roboto' font-size='28' fill='#475569'>{text}</text>\
         </svg>",
        cx = w / 2,
        cy = h / 2,
        text = escape_xml(label),
    )
}

/// The placeholder as an inline `data:` URI, usable wherever an image URL is.
pub fn placeholder_data_uri(label: &str) -> String {
    let svg = placeholder_svg(label);
    format!(
        "data:image/svg+xml;utf8,{}",
        utf8_percent_encode(&svg, URI_COMPONENT)
    )
}
