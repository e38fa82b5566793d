//! Lax manifest parsing.
//!
//! Only the directives needed to read dependency versions are interpreted:
//! `module`, `go` and `require`. Every other statement or block (`toolchain`,
//! `replace`, `exclude`, `retract`, and anything unknown) is skipped, but
//! still has to be lexically well formed.

use crate::error::{Result, ToolpinError};

use super::lexer::{lex_line, Line, Token};
use super::version::{canonical_module_version, lax_go_version};

/// A single `require` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Module path (e.g., `github.com/a-h/templ`).
    pub path: String,
    /// Canonical version (e.g., `v0.2.543`).
    pub version: String,
    /// Whether the entry is marked `// indirect`.
    pub indirect: bool,
}

/// Parsed representation of a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    module: Option<String>,
    go_version: Option<String>,
    requires: Vec<Requirement>,
}

impl Manifest {
    /// Declared module path, if any.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Version from the `go` directive, if any.
    pub fn go_version(&self) -> Option<&str> {
        self.go_version.as_deref()
    }

    /// Required modules in file order.
    pub fn requires(&self) -> &[Requirement] {
        &self.requires
    }

    /// Version of the first requirement whose path equals `path` exactly.
    pub fn version_of(&self, path: &str) -> Option<&str> {
        self.requires
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.version.as_str())
    }
}

/// An open `verb (` block.
struct Block {
    verb: String,
    line: usize,
}

/// Parse manifest contents.
///
/// `file_name` is used only for error messages.
pub fn parse(file_name: &str, data: &[u8]) -> Result<Manifest> {
    let err = |line: usize, message: String| ToolpinError::ManifestParse {
        path: file_name.to_string(),
        line,
        message,
    };

    let text = std::str::from_utf8(data).map_err(|e| {
        let line = data[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count() + 1;
        err(line, "invalid UTF-8".to_string())
    })?;

    let mut manifest = Manifest::default();
    let mut block: Option<Block> = None;

    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = lex_line(raw).map_err(|m| err(lineno, m))?;
        if line.is_empty() {
            continue;
        }

        if let Some(verb) = block.as_ref().map(|b| b.verb.clone()) {
            if line.tokens == [Token::RParen] {
                block = None;
                continue;
            }
            if has_paren(&line.tokens) {
                return Err(err(lineno, "unexpected parenthesis in block".to_string()));
            }
            apply(&mut manifest, &verb, &line.tokens, &line).map_err(|m| err(lineno, m))?;
            continue;
        }

        let verb = match &line.tokens[0] {
            Token::Word(w) => w.clone(),
            Token::RParen => return Err(err(lineno, "unexpected )".to_string())),
            _ => return Err(err(lineno, "expected directive".to_string())),
        };
        let rest = &line.tokens[1..];

        match rest {
            [Token::LParen] => {
                block = Some(Block { verb, line: lineno });
            }
            [Token::LParen, Token::RParen] => {}
            _ if has_paren(rest) => {
                return Err(err(lineno, "unexpected parenthesis".to_string()));
            }
            args => {
                apply(&mut manifest, &verb, args, &line).map_err(|m| err(lineno, m))?;
            }
        }
    }

    if let Some(open) = block {
        return Err(err(
            open.line,
            format!("unterminated {} block", open.verb),
        ));
    }

    Ok(manifest)
}

fn has_paren(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .any(|t| matches!(t, Token::LParen | Token::RParen))
}

/// Apply one statement (or block entry) to the manifest.
fn apply(
    manifest: &mut Manifest,
    verb: &str,
    args: &[Token],
    line: &Line,
) -> std::result::Result<(), String> {
    match verb {
        "module" => {
            let [path] = args else {
                return Err("usage: module module/path".to_string());
            };
            let path = path
                .text()
                .ok_or_else(|| "usage: module module/path".to_string())?;
            if manifest.module.is_some() {
                return Err("repeated module statement".to_string());
            }
            manifest.module = Some(path.to_string());
        }
        "go" => {
            let [version] = args else {
                return Err("go directive expects exactly one argument".to_string());
            };
            let raw = version.text().unwrap_or_default();
            let version = lax_go_version(raw).ok_or_else(|| {
                format!("invalid go version '{}': must match format 1.23.0", raw)
            })?;
            if manifest.go_version.is_some() {
                return Err("repeated go statement".to_string());
            }
            manifest.go_version = Some(version);
        }
        "require" => {
            let usage = || "usage: require module/path v1.2.3".to_string();
            let [path, version] = args else {
                return Err(usage());
            };
            let path = path.text().filter(|p| !p.is_empty()).ok_or_else(usage)?;
            let raw = version.text().ok_or_else(usage)?;
            let version = canonical_module_version(raw).ok_or_else(|| {
                format!(
                    "{}@{}: invalid version: must be of the form v1.2.3",
                    path, raw
                )
            })?;
            manifest.requires.push(Requirement {
                path: path.to_string(),
                version,
                indirect: line.is_indirect(),
            });
        }
        other => {
            tracing::trace!("Skipping manifest directive '{}'", other);
        }
    }
    Ok(())
}
