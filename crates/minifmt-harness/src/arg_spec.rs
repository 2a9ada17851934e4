//! Serializable argument values.
//!
//! [`ArgSpec`] mirrors [`minifmt_core::Arg`] with owned data so it can live
//! in fixture files and on the command line. In JSON it is externally
//! tagged (`{"int": 5}`, `{"str": null}`); on the command line it is
//! `tag:value` (`i:5`, `s:text`) or the bare word `null`.

use std::str::FromStr;

use minifmt_core::Arg;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One owned, typed format argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgSpec {
    Int(i32),
    Uint(u32),
    Long(i64),
    Ulong(u64),
    Double(f64),
    /// Only the low byte reaches the engine, as with a C `char`.
    Char(char),
    /// `None` is a null string.
    Str(Option<String>),
}

impl ArgSpec {
    /// Borrow as an engine argument.
    #[must_use]
    pub fn to_arg(&self) -> Arg<'_> {
        match self {
            Self::Int(v) => Arg::Int(*v),
            Self::Uint(v) => Arg::UInt(*v),
            Self::Long(v) => Arg::Long(*v),
            Self::Ulong(v) => Arg::ULong(*v),
            Self::Double(v) => Arg::Double(*v),
            Self::Char(c) => Arg::Char(u32::from(*c) as u8),
            Self::Str(s) => Arg::Str(s.as_deref().map(str::as_bytes)),
        }
    }
}

/// Borrow a whole list as engine arguments.
#[must_use]
pub fn lower(specs: &[ArgSpec]) -> Vec<Arg<'_>> {
    specs.iter().map(ArgSpec::to_arg).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgParseError {
    #[error("argument `{0}` has no type tag (expected e.g. `i:42`, `s:text` or `null`)")]
    MissingTag(String),
    #[error("unknown type tag `{tag}` in `{token}` (expected i, u, l, lu, f, c or s)")]
    UnknownTag { tag: String, token: String },
    #[error("`{value}` is not a valid {kind} value")]
    BadValue { kind: &'static str, value: String },
    #[error("`c:` expects exactly one character, got `{0}`")]
    BadChar(String),
}

impl FromStr for ArgSpec {
    type Err = ArgParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token == "null" {
            return Ok(Self::Str(None));
        }
        let (tag, value) = token
            .split_once(':')
            .ok_or_else(|| ArgParseError::MissingTag(token.to_string()))?;

        match tag {
            "i" => parse_num(value, "int").map(Self::Int),
            "u" => parse_num(value, "unsigned int").map(Self::Uint),
            "l" => parse_num(value, "long").map(Self::Long),
            "lu" => parse_num(value, "unsigned long").map(Self::Ulong),
            "f" => parse_num(value, "double").map(Self::Double),
            "c" => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::Char(c)),
                    _ => Err(ArgParseError::BadChar(value.to_string())),
                }
            }
            "s" => Ok(Self::Str(Some(value.to_string()))),
            _ => Err(ArgParseError::UnknownTag {
                tag: tag.to_string(),
                token: token.to_string(),
            }),
        }
    }
}

fn parse_num<T: FromStr>(value: &str, kind: &'static str) -> Result<T, ArgParseError> {
    value.parse().map_err(|_| ArgParseError::BadValue {
        kind,
        value: value.to_string(),
    })
}
