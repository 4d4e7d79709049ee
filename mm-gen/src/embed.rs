//! Helpers for splicing generated model files into consumer source code.

use std::fs::File;
use std::io::{
    self,
    BufRead,
    BufReader,
    Write,
};
use std::path::Path;

use anyhow::{
    Context,
    Result,
};
use tracing::instrument;

/// Copy `input` to `out`, one double-quoted string literal per line.
///
/// Embedded double quotes are backslash-escaped and trailing whitespace is
/// stripped; nothing else is transformed, so backslashes pass through
/// untouched.
pub fn write_quoted_lines<R: BufRead, W: Write>(input: R, mut out: W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let escaped = line.trim_end().replace('"', "\\\"");
        writeln!(out, "\"{escaped}\"")?;
    }
    Ok(())
}

/// Print a previously written model file to stdout as quoted literals.
#[instrument]
pub fn print_file_as_literals(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let stdout = io::stdout();
    write_quoted_lines(BufReader::new(file), stdout.lock())
}

#[cfg(test)]
mod tests {
    use assertables::*;

    use super::*;

    /// Run the printer over an in-memory input and return its output.
    fn quoted(input: &str) -> String {
        let mut out = Vec::new();
        write_quoted_lines(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(quoted("foo\"bar\nbaz"), "\"foo\\\"bar\"\n\"baz\"\n");
    }

    #[test]
    fn trailing_whitespace_is_stripped() {
        assert_eq!(quoted("x  \t\n"), "\"x\"\n");
    }

    #[test]
    fn backslashes_pass_through_untouched() {
        assert_eq!(quoted(r"a\b"), "\"a\\b\"\n");
    }

    #[test]
    fn empty_lines_become_empty_literals() {
        assert_eq!(quoted("a\n\nb"), "\"a\"\n\"\"\n\"b\"\n");
    }

    #[test]
    fn missing_files_are_an_error() {
        let err = print_file_as_literals(Path::new("no-such-file.graphml")).unwrap_err();
        assert_contains!(format!("{err:#}"), "no-such-file.graphml");
    }
}
