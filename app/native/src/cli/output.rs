//! CLI output formatting utilities.
//!
//! Colored JSON for terminals, and cell helpers for `tabled` tables.

use colored::Colorize;

/// Prints pretty JSON with syntax highlighting.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta.
pub fn print_highlighted_json(value: &serde_json::Value) {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{}", highlight_json(&pretty));
}

/// Colors an already formatted JSON document.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut chars = json.chars().peekable();
    // Open containers, innermost last.
    let mut open: Vec<char> = Vec::new();
    let mut expecting_value = true;

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let mut literal = String::from('"');
                let mut escaped = false;
                for c in chars.by_ref() {
                    literal.push(c);
                    match c {
                        _ if escaped => escaped = false,
                        '\\' => escaped = true,
                        '"' => break,
                        _ => {}
                    }
                }

                if expecting_value {
                    out.push_str(&literal.green().to_string());
                } else {
                    out.push_str(&literal.cyan().to_string());
                }
            }
            ':' => {
                out.push(':');
                expecting_value = true;
            }
            ',' => {
                out.push_str(&",".white().to_string());
                expecting_value = open.last() == Some(&'[');
            }
            '{' | '[' => {
                out.push_str(&ch.to_string().white().bold().to_string());
                open.push(ch);
                expecting_value = ch == '[';
            }
            '}' | ']' => {
                out.push_str(&ch.to_string().white().bold().to_string());
                open.pop();
            }
            c if c.is_whitespace() => out.push(c),
            _ => {
                let mut token = String::from(ch);
                while let Some(&next) = chars.peek() {
                    if next == ',' || next == '}' || next == ']' || next.is_whitespace() {
                        break;
                    }
                    token.push(next);
                    chars.next();
                }

                match token.as_str() {
                    "true" | "false" | "null" => out.push_str(&token.magenta().to_string()),
                    _ => out.push_str(&token.yellow().to_string()),
                }
            }
        }
    }

    out
}

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
///
/// Counts characters, not bytes.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    if max_chars <= 1 {
        return "…".to_string();
    }

    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{kept}…")
}

/// Formats a boolean as a colored check mark.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value { "✓".green().to_string() } else { "✗".red().to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(json: &str) -> String {
        colored::control::set_override(false);
        highlight_json(json)
    }

    #[test]
    fn test_highlight_json_preserves_text_without_colors() {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "name": "Built-in \"Retina\" Display",
            "screen": 1,
            "isMain": true,
            "wallpaper": null,
            "paths": ["/tmp/a.png", "/tmp/b.png"]
        }))
        .unwrap();

        assert_eq!(plain(&json), json);
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_min_length() {
        assert_eq!(truncate("hello", 1), "…");
    }

    #[test]
    fn test_truncate_multibyte_path() {
        let s = "/Users/me/Pictures/Café/été.heic";
        assert_eq!(truncate(s, 24), "/Users/me/Pictures/Café…");
        assert_eq!(truncate(s, 40), s);
    }

    #[test]
    fn test_format_bool() {
        assert!(format_bool(true).contains('✓'));
        assert!(format_bool(false).contains('✗'));
    }
}
