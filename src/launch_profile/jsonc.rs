//! Comment stripping for JSON-with-comments documents
//!
//! `launchSettings.json` files written by hand or by IDE templates sometimes
//! carry `//` or `/* */` comments. Comments inside string literals are kept.

/// UTF-8 byte-order mark
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Strip a leading UTF-8 BOM, if present.
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Remove `//` line comments and `/* */` block comments outside strings.
///
/// Newlines ending a line comment are kept so that decoder error positions
/// still point at the right line.
pub fn strip_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_line_comment {
            if c == '\n' {
                in_line_comment = false;
                result.push(c);
            }
        } else if in_block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                in_block_comment = false;
                chars.next();
            }
        } else if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else {
            match (c, chars.peek()) {
                ('/', Some('/')) => {
                    in_line_comment = true;
                    chars.next();
                }
                ('/', Some('*')) => {
                    in_block_comment = true;
                    chars.next();
                }
                ('"', _) => {
                    in_string = true;
                    result.push(c);
                }
                _ => result.push(c),
            }
        }
    }

    result
}
