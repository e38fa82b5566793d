//! Line lexer for the manifest grammar.

/// A single lexical token on a manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Bare word (verb, module path, version).
    Word(String),
    /// Quoted string, with quotes removed and escapes resolved.
    Quoted(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=>`
    Arrow,
}

impl Token {
    /// The string value of a word or quoted string.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Word(s) | Token::Quoted(s) => Some(s),
            _ => None,
        }
    }
}

/// Tokens on one line, plus the trailing `//` comment if any.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub tokens: Vec<Token>,
    pub comment: Option<String>,
}

impl Line {
    /// Whether the line has no tokens (blank or comment-only).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the trailing comment marks a requirement as indirect.
    pub fn is_indirect(&self) -> bool {
        match &self.comment {
            Some(c) => c == "indirect" || c.starts_with("indirect;"),
            None => false,
        }
    }
}

/// Split one manifest line into tokens.
///
/// Strings may not span lines. The error is a human-readable message; the
/// caller attaches file and line information.
pub fn lex_line(line: &str) -> std::result::Result<Line, String> {
    let chars: Vec<char> = line.chars().collect();
    let mut out = Line::default();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '/' && chars.get(i + 1) == Some(&'/') {
            let rest: String = chars[i + 2..].iter().collect();
            out.comment = Some(rest.trim().to_string());
            break;
        }

        match c {
            '(' => {
                out.tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                out.tokens.push(Token::RParen);
                i += 1;
            }
            '=' if chars.get(i + 1) == Some(&'>') => {
                out.tokens.push(Token::Arrow);
                i += 2;
            }
            '"' => {
                let (value, next) = lex_interpreted(&chars, i + 1)?;
                out.tokens.push(Token::Quoted(value));
                i = next;
            }
            '`' => {
                let end = chars[i + 1..]
                    .iter()
                    .position(|&ch| ch == '`')
                    .ok_or_else(|| "unterminated raw string".to_string())?;
                let value: String = chars[i + 1..i + 1 + end].iter().collect();
                out.tokens.push(Token::Quoted(value));
                i += end + 2;
            }
            _ => {
                let start = i;
                while i < chars.len() && !ends_word(&chars, i) {
                    i += 1;
                }
                out.tokens
                    .push(Token::Word(chars[start..i].iter().collect()));
            }
        }
    }

    Ok(out)
}

fn ends_word(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    c.is_whitespace()
        || matches!(c, '(' | ')' | '"' | '`')
        || (c == '/' && chars.get(i + 1) == Some(&'/'))
        || (c == '=' && chars.get(i + 1) == Some(&'>'))
}

/// Lex a double-quoted string body starting after the opening quote.
///
/// Escapes follow Go string literals: single-character escapes, `\xHH` and
/// `\NNN` bytes, and `\uHHHH`/`\UHHHHHHHH` code points. Returns the
/// unescaped value and the index just past the closing quote.
fn lex_interpreted(chars: &[char], mut i: usize) -> std::result::Result<(String, usize), String> {
    let mut value = Vec::new();
    while i < chars.len() {
        match chars[i] {
            '"' => {
                let value = String::from_utf8(value)
                    .map_err(|_| "invalid UTF-8 in quoted string".to_string())?;
                return Ok((value, i + 1));
            }
            '\\' => {
                let escaped = *chars
                    .get(i + 1)
                    .ok_or_else(|| "unterminated quoted string".to_string())?;
                i += 2;
                let simple = match escaped {
                    'a' => Some('\u{07}'),
                    'b' => Some('\u{08}'),
                    'f' => Some('\u{0c}'),
                    'n' => Some('\n'),
                    'r' => Some('\r'),
                    't' => Some('\t'),
                    'v' => Some('\u{0b}'),
                    '\\' => Some('\\'),
                    '"' => Some('"'),
                    _ => None,
                };
                match (simple, escaped) {
                    (Some(c), _) => push_char(&mut value, c),
                    (None, 'x') => {
                        value.push(hex_escape(chars, i, 2)? as u8);
                        i += 2;
                    }
                    (None, 'u') => {
                        push_char(&mut value, code_point(hex_escape(chars, i, 4)?)?);
                        i += 4;
                    }
                    (None, 'U') => {
                        push_char(&mut value, code_point(hex_escape(chars, i, 8)?)?);
                        i += 8;
                    }
                    (None, '0'..='7') => {
                        let digits: String = chars
                            .get(i - 1..i + 2)
                            .map(|d| d.iter().collect())
                            .unwrap_or_default();
                        let byte = u8::from_str_radix(&digits, 8)
                            .ok()
                            .filter(|_| digits.len() == 3)
                            .ok_or_else(|| format!("invalid octal escape \\{}", digits))?;
                        value.push(byte);
                        i += 2;
                    }
                    (None, other) => {
                        return Err(format!("invalid escape sequence \\{}", other));
                    }
                }
            }
            c => {
                push_char(&mut value, c);
                i += 1;
            }
        }
    }
    Err("unterminated quoted string".to_string())
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

/// Parse exactly `len` hex digits starting at `start`.
fn hex_escape(chars: &[char], start: usize, len: usize) -> std::result::Result<u32, String> {
    let digits: String = chars
        .get(start..start + len)
        .map(|d| d.iter().collect())
        .unwrap_or_default();
    if digits.len() != len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex escape '{}'", digits));
    }
    u32::from_str_radix(&digits, 16).map_err(|e| e.to_string())
}

fn code_point(value: u32) -> std::result::Result<char, String> {
    char::from_u32(value).ok_or_else(|| format!("invalid code point U+{:X}", value))
}
