//! Pagina principale e pagina di errore della bacheca.
//!
//! Template maud: i valori dell'utente entrano solo tramite [`Escaped`].

use super::escape::Escaped;
use crate::entities::Message;
use chrono::{DateTime, Local, TimeZone};
use maud::{DOCTYPE, PreEscaped, html};
use std::fmt::Display;

pub const EMPTY_PLACEHOLDER: &str = "No messages yet. Be the first to post!";

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; background-color: #f5f5f5; }
.container { background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
h1 { color: #333; text-align: center; margin-bottom: 30px; }
.form-section { background-color: #e8f4fd; padding: 20px; border-radius: 8px; margin-bottom: 30px; }
input, textarea, button { width: 100%; padding: 12px; margin: 8px 0; border: 1px solid #ddd; border-radius: 5px; box-sizing: border-box; }
button { background-color: #007bff; color: white; border: none; cursor: pointer; font-size: 16px; }
button:hover { background-color: #0056b3; }
.message { background-color: #f8f9fa; padding: 15px; margin: 10px 0; border-left: 4px solid #007bff; border-radius: 5px; }
.message-author { font-weight: bold; color: #007bff; }
.message-time { color: #666; font-size: 12px; }
.message-content { margin: 10px 0; line-height: 1.5; white-space: pre-wrap; }
.empty { text-align: center; color: #666; }
"#;

/// Formato "locale" en-US, es. `3/5/2024, 2:07:09 PM`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Renders the full board: submission form, message count, then one block per
/// message in the order received. Nothing is re-sorted here.
pub fn render_page(messages: &[Message]) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Message Board" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div.container {
                    h1 { "Message Board" }
                    div.form-section {
                        h2 { "Add New Message" }
                        form action="/add" method="POST" {
                            input type="text" name="author" placeholder="Your name" required;
                            textarea name="content" placeholder="Your message" rows="3" required {}
                            button type="submit" { "Send Message" }
                        }
                    }
                    h2 { "Messages (" (messages.len()) ")" }
                    @for message in messages {
                        div.message {
                            div.message-author { (Escaped(&message.author)) }
                            div.message-content { (Escaped(&message.content)) }
                            div.message-time {
                                (Escaped(&format_timestamp(&message.created_at.with_timezone(&Local))))
                            }
                        }
                    }
                    @if messages.is_empty() {
                        p.empty { (EMPTY_PLACEHOLDER) }
                    }
                }
            }
        }
    }
    .into_string()
}

/// Pagina restituita da `GET /` quando lo store non risponde.
pub fn render_error_page(message: &str, details: Option<&str>) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Database Error" }
            }
            body {
                h1 { "Database Error" }
                p { (Escaped(message)) }
                @if let Some(details) = details {
                    p { "Error: " (Escaped(details)) }
                }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(id: i64, author: &str, content: &str) -> Message {
        Message {
            id,
            author: author.to_string(),
            content: content.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap(),
        }
    }

    #[test]
    fn test_empty_page_has_placeholder_and_zero_count() {
        let html = render_page(&[]);
        assert!(html.contains(EMPTY_PLACEHOLDER));
        assert!(html.contains("Messages (0)"));
        assert!(!html.contains(r#"class="message""#));
    }

    #[test]
    fn test_form_has_required_fields() {
        let html = render_page(&[]);
        assert!(html.contains(r#"<form action="/add" method="POST">"#));
        assert!(html.contains(r#"name="author" placeholder="Your name" required"#));
        assert!(html.contains(r#"name="content" placeholder="Your message" rows="3" required"#));
    }

    #[test]
    fn test_script_is_escaped() {
        let html = render_page(&[message(1, "Alice", "<script>alert(1)</script>")]);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Messages (1)"));
        assert!(!html.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_author_is_escaped_once() {
        let html = render_page(&[message(1, "Tom & \"Jerry\"", "hi")]);
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn test_apostrophe_uses_numeric_entity() {
        let html = render_page(&[message(1, "O'Brien", "it's fine")]);
        assert!(html.contains("O&#039;Brien"));
        assert!(html.contains("it&#039;s fine"));
        assert!(!html.contains("O'Brien"));
    }

    #[test]
    fn test_block_order_author_content_time() {
        let html = render_page(&[message(1, "Alice", "hello there")]);
        let author = html.find("message-author\">Alice").unwrap();
        let content = html.find("message-content\">hello there").unwrap();
        let time = html.find("message-time\">").unwrap();
        assert!(author < content && content < time);
    }

    #[test]
    fn test_messages_keep_given_order() {
        let html = render_page(&[
            message(1, "Alice", "older-first"),
            message(2, "Bob", "newer-second"),
        ]);
        assert!(html.find("older-first").unwrap() < html.find("newer-second").unwrap());
        assert!(html.contains("Messages (2)"));
    }

    #[test]
    fn test_render_is_pure() {
        let messages = [message(1, "Alice", "a"), message(2, "Bob", "b")];
        assert_eq!(render_page(&messages), render_page(&messages));
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(format_timestamp(&at), "3/5/2024, 2:07:09 PM");
        let midnight = Utc.with_ymd_and_hms(2024, 12, 25, 0, 5, 0).unwrap();
        assert_eq!(format_timestamp(&midnight), "12/25/2024, 12:05:00 AM");
    }

    #[test]
    fn test_error_page_escapes_details() {
        let html = render_error_page("Could not connect", Some("bad <input>"));
        assert!(html.contains("<h1>Database Error</h1>"));
        assert!(html.contains("<p>Could not connect</p>"));
        assert!(html.contains("Error: bad &lt;input&gt;"));
    }
}
