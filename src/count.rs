//! Heuristic code line counting for Java and Python sources.
//!
//! These are line-oriented state machines, not lexers: comment delimiters
//! inside string literals, or code sharing a line with a comment, are not
//! recognised.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid UTF-8
//! are dropped before counting, so `\xff// note` is still a comment line.

use crate::error::{GlocError, Result};
use crate::model::Language;
use gix::bstr::ByteSlice;
use std::path::Path;

const JAVA_BLOCK_OPEN: &str = "/*";
const JAVA_BLOCK_CLOSE: &str = "*/";
const JAVA_LINE_COMMENT: &str = "//";
const PYTHON_DOC_DELIMITERS: [&str; 2] = ["\"\"\"", "'''"];
const PYTHON_LINE_COMMENT: &str = "#";

/// Count the non-blank, non-comment lines of the file at `path`.
///
/// Undecodable bytes are ignored rather than rejected. Only a failure to
/// read the file at all is reported, as [`GlocError::FileRead`].
pub fn count_lines(path: &Path, language: Language) -> Result<u64> {
    let bytes = std::fs::read(path).map_err(|source| GlocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_ignoring_invalid(&bytes);
    Ok(count_source(&text, language))
}

fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    ByteSlice::utf8_chunks(bytes)
        .map(|chunk| chunk.valid())
        .collect()
}

/// Split on `\r\n`, `\n` and lone `\r`, without the terminators.
fn split_universal_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

pub fn count_source(text: &str, language: Language) -> u64 {
    match language {
        Language::Java => count_java(text),
        Language::Python => count_python(text),
    }
}

pub fn count_java(text: &str) -> u64 {
    let mut code_lines = 0;
    let mut in_block_comment = false;

    for line in split_universal_lines(text).map(str::trim) {
        if in_block_comment {
            if line.contains(JAVA_BLOCK_CLOSE) {
                in_block_comment = false;
            }
            continue;
        }

        if let Some(open) = line.find(JAVA_BLOCK_OPEN) {
            let rest = &line[open + JAVA_BLOCK_OPEN.len()..];
            in_block_comment = !rest.contains(JAVA_BLOCK_CLOSE);
            continue;
        }

        if line.starts_with(JAVA_LINE_COMMENT) {
            continue;
        }

        if !line.is_empty() {
            code_lines += 1;
        }
    }

    code_lines
}

pub fn count_python(text: &str) -> u64 {
    let mut code_lines = 0;
    let mut in_docstring = false;

    for line in split_universal_lines(text).map(str::trim) {
        if let Some(delimiter) = PYTHON_DOC_DELIMITERS
            .iter()
            .copied()
            .find(|d| line.starts_with(*d))
        {
            // `"""doc"""` opens and closes on one line.
            let closes_inline = line[delimiter.len()..].contains(delimiter);
            if in_docstring || !closes_inline {
                in_docstring = !in_docstring;
            }
            continue;
        }

        if in_docstring || line.starts_with(PYTHON_LINE_COMMENT) {
            continue;
        }

        if !line.is_empty() {
            code_lines += 1;
        }
    }

    code_lines
}
