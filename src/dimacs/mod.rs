// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading and writing flow networks in DIMACS format.
//!
//! Only the max-flow variant (`p max`) is supported, see [`max`].

pub mod max;
pub use self::max::{read, read_from_file, write, write_to_file, Instance};

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Read};
use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

/// Error when reading a file in DIMACS format.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The file is not syntactically valid.
    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
    /// The file is well-formed but describes no valid network.
    #[error("Data error on line {line}: {msg}")]
    Data { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn format<S: Display>(line: usize, msg: S) -> Self {
        Error::Format {
            line,
            msg: msg.to_string(),
        }
    }

    fn data<S: Display>(line: usize, msg: S) -> Self {
        Error::Data {
            line,
            msg: msg.to_string(),
        }
    }
}

/// Reads the content lines of a DIMACS file.
///
/// Empty lines and comment lines (starting with `c`) are skipped.
pub struct LineReader<R: Read> {
    input: BufReader<R>,
    buf: String,
    lineno: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(input: R) -> Self {
        LineReader {
            input: BufReader::new(input),
            buf: String::new(),
            lineno: 0,
        }
    }

    /// Return the number of the last line read.
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    /// Return the next content line or `None` at the end of the input.
    pub fn next_line(&mut self) -> Result<Option<Line>> {
        loop {
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.lineno += 1;

            match self.buf.split_whitespace().next() {
                Some(d) if !d.starts_with('c') => break,
                _ => continue,
            }
        }

        let mut fields = self.buf.split_whitespace();
        Ok(Some(Line {
            descriptor: fields.next().unwrap_or_default(),
            fields,
            lineno: self.lineno,
        }))
    }

    /// Return the next content line, which must start with `descriptor`.
    pub fn line(&mut self, descriptor: &str) -> Result<Line> {
        let last = self.lineno;
        match self.next_line()? {
            Some(line) if line.descriptor == descriptor => Ok(line),
            Some(line) => Err(Error::format(
                line.lineno,
                format!("expected '{}' line, got '{}'", descriptor, line.descriptor),
            )),
            None => Err(Error::format(
                last,
                format!("missing '{}' line at end of file", descriptor),
            )),
        }
    }
}

/// A content line split into its descriptor and the remaining fields.
pub struct Line<'a> {
    pub descriptor: &'a str,
    fields: SplitWhitespace<'a>,
    pub lineno: usize,
}

impl<'a> Line<'a> {
    /// Return the next field.
    pub fn word(&mut self) -> Result<&'a str> {
        let lineno = self.lineno;
        self.fields
            .next()
            .ok_or_else(|| Error::format(lineno, "too few fields"))
    }

    /// Parse the next field.
    pub fn parse<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let lineno = self.lineno;
        let word = self.word()?;
        word.parse()
            .map_err(|e| Error::format(lineno, format!("invalid field '{}': {}", word, e)))
    }

    /// Fail if the line has more fields.
    pub fn finish(mut self) -> Result<()> {
        match self.fields.next() {
            Some(w) => Err(Error::format(self.lineno, format!("too many fields, got '{}'", w))),
            None => Ok(()),
        }
    }
}
