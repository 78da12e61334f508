//! Comment stripping
//!
//! Replaces single-line (`//`) and block (`/* */`) comment spans with spaces
//! before any pattern matching runs. Newlines inside block comments are kept
//! so every later diagnostic still points at the original line. String,
//! raw-string, and rune literals are honored so comment markers inside them
//! are left alone.

/// Strip comments from source text, preserving line structure
pub fn strip_comments(source: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        Code,
        LineComment,
        BlockComment,
        Str,
        RawStr,
        Rune,
    }

    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::BlockComment;
                }
                '"' => {
                    out.push(c);
                    state = State::Str;
                }
                '`' => {
                    out.push(c);
                    state = State::RawStr;
                }
                '\'' => {
                    out.push(c);
                    state = State::Rune;
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = State::Code;
                } else {
                    out.push(' ');
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else if c == '\n' {
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::Str => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == '"' || c == '\n' {
                    // an unterminated literal ends at the line break
                    state = State::Code;
                }
            }
            State::RawStr => {
                out.push(c);
                if c == '`' {
                    state = State::Code;
                }
            }
            State::Rune => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == '\'' || c == '\n' {
                    state = State::Code;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_comments() {
        let stripped = strip_comments("x := 1 // trailing\ny := 2\n");
        assert_eq!(stripped.lines().count(), 2);
        assert!(!stripped.contains("trailing"));
        assert!(stripped.contains("y := 2"));
    }

    #[test]
    fn test_block_comments_preserve_line_structure() {
        let source = "a\n/* one\ntwo\nthree */\nb\n";
        let stripped = strip_comments(source);
        assert_eq!(stripped.lines().count(), source.lines().count());
        assert!(!stripped.contains("two"));
    }

    #[test]
    fn test_markers_inside_strings_survive() {
        let stripped = strip_comments(r#"u := "http://example.com" // real comment"#);
        assert!(stripped.contains("http://example.com"));
        assert!(!stripped.contains("real comment"));
    }

    #[test]
    fn test_markers_inside_raw_strings_survive() {
        let stripped = strip_comments("tag := `json:\"a\" /* not a comment */`\n");
        assert!(stripped.contains("/* not a comment */"));
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let stripped = strip_comments(r#"s := "quote \" // inside""#);
        assert!(stripped.contains(r#"\" // inside"#));
    }
}
