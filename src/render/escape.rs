//! HTML escaping for untrusted text.

use maud::Render;

/// Replaces `& < > " '` with `&amp; &lt; &gt; &quot; &#039;`.
///
/// Single left-to-right pass with a per-character lookup, so entities produced
/// here are never escaped again within the same call. Applying it twice does
/// double-escape: callers must run it exactly once, at render time.
pub fn escape_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Same as [`escape_for_display`], appending into an existing buffer.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
}

/// Testo non fidato da interpolare in un template maud.
///
/// L'escaper di maud non tocca l'apostrofo: questo wrapper passa invece per
/// [`escape_into`], così la mappatura resta quella di [`escape_for_display`].
pub struct Escaped<'a>(pub &'a str);

impl Render for Escaped<'_> {
    fn render_to(&self, buffer: &mut String) {
        escape_into(buffer, self.0);
    }
}
