//! Dependency requirement line parsing.
//!
//! Blacklist entries use the standard dependency-specifier form: a package
//! name optionally followed by extras, version specifiers, a direct URL
//! reference, and an environment marker. The project filter only keeps bare
//! names, but every line must parse so that typos surface at initialization
//! instead of silently never matching.

use crate::error::{PacksieveError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Package names: alphanumeric, with `.`, `_` and `-` allowed inside.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?").unwrap());

/// Version tokens: release segments, wildcards, epochs, local versions.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._+!*-]+$").unwrap());

/// Comparison operator of a version specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `~=` compatible release
    Compatible,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `===` arbitrary string equality
    ArbitraryEqual,
}

impl CompareOp {
    /// The operator as written in a requirement line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Compatible => "~=",
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
            CompareOp::LessEqual => "<=",
            CompareOp::GreaterEqual => ">=",
            CompareOp::Less => "<",
            CompareOp::Greater => ">",
            CompareOp::ArbitraryEqual => "===",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single version constraint, e.g. `>=1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub op: CompareOp,
    pub version: String,
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

/// A parsed dependency requirement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package name exactly as written (no normalization).
    pub name: String,
    /// Extras requested in brackets, e.g. `foo[tls,test]`.
    pub extras: Vec<String>,
    /// Version constraints, empty for a bare name.
    pub specifiers: Vec<Specifier>,
    /// Direct reference target for `name @ url` lines.
    pub url: Option<String>,
    /// Environment marker text after `;`, stored verbatim.
    pub marker: Option<String>,
}

impl Requirement {
    /// Parse a single requirement line.
    ///
    /// Surrounding whitespace is ignored. Returns
    /// [`PacksieveError::InvalidRequirement`] for anything that is not a
    /// well-formed requirement.
    pub fn parse(line: &str) -> Result<Requirement> {
        let line = line.trim();
        if line.is_empty() {
            return Err(invalid(line, "empty requirement"));
        }

        // The marker is everything after the first semicolon.
        let (head, marker) = match line.split_once(';') {
            Some((head, marker)) => {
                let marker = marker.trim();
                if marker.is_empty() {
                    return Err(invalid(line, "empty environment marker"));
                }
                (head.trim_end(), Some(marker.to_string()))
            }
            None => (line, None),
        };

        let name_match = NAME_RE
            .find(head)
            .ok_or_else(|| invalid(line, "invalid package name"))?;
        let name = name_match.as_str().to_string();
        let mut rest = head[name_match.end()..].trim_start();

        let mut extras = Vec::new();
        if let Some(after_bracket) = rest.strip_prefix('[') {
            let close = after_bracket
                .find(']')
                .ok_or_else(|| invalid(line, "unclosed extras bracket"))?;
            extras = parse_extras(line, &after_bracket[..close])?;
            rest = after_bracket[close + 1..].trim_start();
        }

        let mut url = None;
        let mut specifiers = Vec::new();
        if let Some(target) = rest.strip_prefix('@') {
            let target = target.trim();
            if target.is_empty() {
                return Err(invalid(line, "empty URL reference"));
            }
            url = Some(target.to_string());
        } else if let Some(inner) = rest.strip_prefix('(') {
            let close = inner
                .find(')')
                .ok_or_else(|| invalid(line, "unclosed specifier parenthesis"))?;
            if !inner[close + 1..].trim().is_empty() {
                return Err(invalid(line, "unexpected text after specifiers"));
            }
            specifiers = parse_specifiers(line, &inner[..close])?;
        } else if !rest.is_empty() {
            specifiers = parse_specifiers(line, rest)?;
        }

        Ok(Requirement {
            name,
            extras,
            specifiers,
            url,
            marker,
        })
    }
}

fn invalid(line: &str, message: impl Into<String>) -> PacksieveError {
    PacksieveError::InvalidRequirement {
        line: line.to_string(),
        message: message.into(),
    }
}

/// Parse the comma-separated identifiers inside an extras bracket.
///
/// An empty bracket (`foo[]`) is accepted and yields no extras.
fn parse_extras(line: &str, inner: &str) -> Result<Vec<String>> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let mut extras = Vec::new();
    for part in inner.split(',') {
        let part = part.trim();
        let valid = NAME_RE
            .find(part)
            .map(|m| m.end() == part.len())
            .unwrap_or(false);
        if !valid {
            return Err(invalid(line, format!("invalid extra name '{}'", part)));
        }
        extras.push(part.to_string());
    }
    Ok(extras)
}

/// Parse a comma-separated list of version constraints.
fn parse_specifiers(line: &str, text: &str) -> Result<Vec<Specifier>> {
    let mut specifiers = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(invalid(line, "empty version specifier"));
        }
        specifiers.push(parse_specifier(line, part)?);
    }
    Ok(specifiers)
}

fn parse_specifier(line: &str, part: &str) -> Result<Specifier> {
    // Longest operators first so `==` is not read as two errors
    // and `===` is not read as `==` followed by `=`.
    const OPS: [(&str, CompareOp); 8] = [
        ("===", CompareOp::ArbitraryEqual),
        ("==", CompareOp::Equal),
        ("!=", CompareOp::NotEqual),
        ("~=", CompareOp::Compatible),
        ("<=", CompareOp::LessEqual),
        (">=", CompareOp::GreaterEqual),
        ("<", CompareOp::Less),
        (">", CompareOp::Greater),
    ];

    for (text, op) in OPS {
        if let Some(version) = part.strip_prefix(text) {
            let version = version.trim();
            if version.is_empty() {
                return Err(invalid(line, format!("missing version after '{}'", text)));
            }
            if !VERSION_RE.is_match(version) {
                return Err(invalid(line, format!("invalid version '{}'", version)));
            }
            return Ok(Specifier {
                op,
                version: version.to_string(),
            });
        }
    }

    Err(invalid(
        line,
        format!("expected version specifier, got '{}'", part),
    ))
}
