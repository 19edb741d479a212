//! Character-level tokenizer for SMAP text.
//!
//! The grammar is line oriented but fields are not whitespace delimited, so
//! the reader works one character at a time with a single character of
//! lookahead. Every reader owns its cursor and line counter; embedded SMAPs
//! get a fresh reader over the remaining text and hand their position back
//! when they finish.

use super::rules::AssertionRule;
use crate::{Location, SmapError, SmapResult};

pub struct SmapReader<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    artifact: &'a str,
}

impl<'a> SmapReader<'a> {
    /// Create a reader over `text` whose first line is numbered `line`.
    pub fn new(text: &'a str, artifact: &'a str, line: usize) -> Self {
        Self {
            text,
            pos: 0,
            line,
            artifact,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current (1-based, cumulative) line number.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn artifact(&self) -> &'a str {
        self.artifact
    }

    /// Text not consumed yet.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Move past text consumed by an embedded reader.
    pub fn resume_after(&mut self, consumed: usize, line: usize) {
        self.pos += consumed;
        self.line = line;
    }

    pub fn location(&self) -> Location {
        Location::new(self.artifact, Some(self.line))
    }

    pub fn syntax(&self, message: impl Into<String>) -> SmapError {
        SmapError::Syntax {
            location: self.location(),
            message: message.into(),
        }
    }

    pub fn violation(&self, rule: AssertionRule, detail: Option<String>) -> SmapError {
        SmapError::Assertion {
            location: self.location(),
            rule,
            detail,
        }
    }

    pub fn peek(&self) -> SmapResult<char> {
        self.remaining()
            .chars()
            .next()
            .ok_or_else(|| self.syntax("unexpected end of SMAP"))
    }

    pub fn read(&mut self) -> SmapResult<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Ok(ch)
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> SmapResult<bool> {
        if self.peek()? == expected {
            self.pos += expected.len_utf8();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Skip spaces and tabs.
    pub fn ignore_white(&mut self) -> SmapResult<()> {
        while matches!(self.peek()?, ' ' | '\t') {
            self.pos += 1;
        }
        Ok(())
    }

    /// Read the rest of the current line, trimmed, and move to the start of
    /// the next line's content.
    pub fn read_line(&mut self) -> SmapResult<String> {
        self.ignore_white()?;
        let start = self.pos;
        let mut ch = self.read()?;
        while ch != '\n' && ch != '\r' {
            ch = self.read()?;
        }
        let content = &self.text[start..self.pos - 1];
        if ch == '\r' {
            self.eat('\n')?;
        }
        self.ignore_white()?;
        self.line += 1;
        Ok(content.trim_matches(|c: char| c <= ' ').to_string())
    }

    /// Require that nothing but whitespace remains on the current line, then
    /// move to the start of the next line's content.
    pub fn skip_remaining_white(&mut self) -> SmapResult<()> {
        self.ignore_white()?;
        let ch = self.read()?;
        if ch != '\n' && ch != '\r' {
            let rest = self.read_line().unwrap_or_default();
            return Err(self.syntax(format!(
                "unexpected characters at end of line: {}{}",
                ch, rest
            )));
        }
        if ch == '\r' {
            self.eat('\n')?;
        }
        self.ignore_white()?;
        self.line += 1;
        Ok(())
    }

    /// Read an unsigned decimal number surrounded by optional spaces or tabs.
    pub fn read_number(&mut self) -> SmapResult<u32> {
        self.ignore_white()?;
        if !self.peek()?.is_ascii_digit() {
            return Err(self.syntax("Number expected"));
        }
        let mut value: u32 = 0;
        while let Some(digit) = self.peek()?.to_digit(10) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| self.syntax("Number too large"))?;
            self.pos += 1;
        }
        self.ignore_white()?;
        Ok(value)
    }
}
