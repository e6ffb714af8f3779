//! Delimiter handling
//!
//! Two pieces:
//! - [`DelimiterSet`]: splits text on any delimiter from a set
//! - [`Declaration`]: reads the optional `//<delimiter>\n<payload>` prefix

use crate::error::{CalcError, CalcResult};
use smallvec::{smallvec, SmallVec};

/// Line break separating a declaration from its payload
pub const LINE_BREAK: char = '\n';

/// Set of delimiters a tokenizer splits on
///
/// Delimiters are literal strings, never patterns. When two delimiters match
/// at the same position the longer one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    delimiters: SmallVec<[String; 2]>,
}

impl DelimiterSet {
    /// Create set from delimiters
    ///
    /// Empty delimiters are dropped; an empty set never splits.
    #[must_use]
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut delimiters: SmallVec<[String; 2]> = delimiters
            .into_iter()
            .map(Into::<String>::into)
            .filter(|d| !d.is_empty())
            .collect();
        delimiters.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        delimiters.dedup();
        Self { delimiters }
    }

    /// Set with a single delimiter
    #[inline]
    #[must_use]
    pub fn single(delimiter: impl Into<String>) -> Self {
        let delimiter: String = delimiter.into();
        Self::new([delimiter])
    }

    /// `,` only
    #[inline]
    #[must_use]
    pub fn comma() -> Self {
        Self {
            delimiters: smallvec![",".to_string()],
        }
    }

    /// `,` or `\n`
    #[inline]
    #[must_use]
    pub fn comma_or_newline() -> Self {
        Self::new([",", "\n"])
    }

    /// Delimiters, longest first
    #[must_use]
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Split text on any delimiter in the set
    ///
    /// Always yields `matches + 1` tokens, so `""` gives `[""]` and a
    /// trailing delimiter gives a trailing empty token.
    #[must_use]
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            if let Some(matched) = self.delimiters.iter().find(|d| rest.starts_with(d.as_str())) {
                tokens.push(&text[start..pos]);
                pos += matched.len();
                start = pos;
            } else {
                // advance one char, staying on a UTF-8 boundary
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }

        tokens.push(&text[start..]);
        tokens
    }
}

/// How a variant reacts to a declaration with no usable payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationCheck {
    /// Fail only when no line break follows the marker
    RequirePayloadLine,
    /// Fail when the payload after the line break is empty, or missing
    RejectEmptyPayload,
}

/// Resolved delimiter and the text to split with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Active delimiter for this call
    pub delimiter: String,
    /// Number payload
    pub payload: &'a str,
    /// Whether the input carried a declaration prefix
    pub declared: bool,
}

impl<'a> Declaration<'a> {
    /// Resolve the active delimiter and payload of an input
    ///
    /// Without the marker prefix the whole input is payload and the default
    /// delimiter applies. With it, the declared delimiter runs up to the first
    /// line break (empty falls back to the default) and the payload is the
    /// second line only; anything after the next line break is dropped.
    ///
    /// # Errors
    /// [`CalcError::MalformedDelimiterDeclaration`] per `check`.
    pub fn parse(
        text: &'a str,
        marker: &str,
        default_delimiter: &str,
        check: DeclarationCheck,
    ) -> CalcResult<Self> {
        let Some(declaration) = text.strip_prefix(marker) else {
            return Ok(Self {
                delimiter: default_delimiter.to_string(),
                payload: text,
                declared: false,
            });
        };

        let Some((declared, rest)) = declaration.split_once(LINE_BREAK) else {
            return Err(CalcError::MalformedDelimiterDeclaration);
        };
        let payload = rest.split(LINE_BREAK).next().unwrap_or_default();

        if check == DeclarationCheck::RejectEmptyPayload && payload.is_empty() {
            return Err(CalcError::MalformedDelimiterDeclaration);
        }

        let delimiter = if declared.is_empty() {
            default_delimiter
        } else {
            declared
        };

        Ok(Self {
            delimiter: delimiter.to_string(),
            payload,
            declared: true,
        })
    }
}
