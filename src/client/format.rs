//! Light reply formatting for HTML display: escape, link URLs, keep line breaks.
//!
//! Replies are plain text, not markdown. Escaping goes through
//! `pulldown-cmark-escape`, the same escaper the markdown renderer uses.

use pulldown_cmark_escape::{escape_href, escape_html};

const URL_SCHEMES: [&str; 2] = ["https://", "http://"];
const TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?', ')', '"', '\''];

/// Render assistant reply text as an HTML fragment.
///
/// Everything is escaped; `http(s)://` URLs become links that open in a new
/// tab; `\n` and `\r\n` become `<br>`.
#[must_use]
pub fn format_reply(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = find_url_start(rest) {
        push_text(&mut out, &rest[..start]);
        let tail = &rest[start..];
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let url = tail[..end].trim_end_matches(TRAILING_PUNCT);
        if URL_SCHEMES.contains(&url) {
            // A bare scheme is not a link.
            push_text(&mut out, url);
        } else {
            push_link(&mut out, url);
        }
        rest = &tail[url.len()..];
    }
    push_text(&mut out, rest);
    out
}

fn find_url_start(text: &str) -> Option<usize> {
    URL_SCHEMES.iter().filter_map(|scheme| text.find(scheme)).min()
}

fn push_link(out: &mut String, url: &str) {
    out.push_str("<a href=\"");
    push_href(out, url);
    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
    push_escaped(out, url);
    out.push_str("</a>");
}

fn push_text(out: &mut String, text: &str) {
    let normalized = text.replace("\r\n", "\n");
    for (i, line) in normalized.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        push_escaped(out, line);
    }
}

/// Escape text for use as HTML content or a quoted attribute value.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

// Escaping into a String cannot fail.
fn push_escaped(out: &mut String, text: &str) {
    let _ = escape_html(out, text);
}

fn push_href(out: &mut String, url: &str) {
    let _ = escape_href(out, url);
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
