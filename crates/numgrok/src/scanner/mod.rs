//! Scanner: a byte cursor over one input string, shared by every layer of the
//! grammar.
//!
//! What it does
//! - Walks `&'src str` one ASCII byte at a time via `peek()`/`eat()`
//!   and hands back borrowed slices of the input (`since()`, `rest()`), so no
//!   layer ever copies text.
//! - Provides `attempt()`, which runs a sub-grammar and rewinds to the starting
//!   offset if it fails. Every atom and spelling is built on this, which keeps
//!   the grammar free of explicit backtracking bookkeeping.
//!
//! Invariants
//! - The offset only ever moves over ASCII bytes (`eat*`) or over whole
//!   whitespace scalars (`skip_whitespace`), so it always sits on a UTF-8
//!   character boundary and every slice is valid.
//! - Predicates passed to `eat_if`/`eat_while` are only shown ASCII bytes;
//!   a non-ASCII byte always stops them.
//!
//! Example
//! ```ignore
//! let mut s = Scanner::new("12.5e3");
//! assert_eq!(s.eat_while(|b| b.is_ascii_digit()), 2);
//! assert!(s.eat(b'.'));
//! assert_eq!(s.rest(), "5e3");
//! ```


#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the cursor.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back (or forward) to an offset previously returned by
    /// [`Scanner::pos`].
    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(self.src.is_char_boundary(pos));
        self.pos = pos;
    }

    /// Next ASCII byte, or `None` at end of input or on a non-ASCII scalar.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.src
            .as_bytes()
            .get(self.pos)
            .copied()
            .filter(u8::is_ascii)
    }

    /// Consumes `expected` if it is the next byte.
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        self.eat_if(|b| b == expected).is_some()
    }

    pub(crate) fn eat_if(&mut self, pred: impl FnOnce(u8) -> bool) -> Option<u8> {
        match self.peek() {
            Some(b) if pred(b) => {
                self.pos += 1;
                Some(b)
            }
            _ => None,
        }
    }

    /// Consumes ASCII bytes while `pred` holds and returns how many were
    /// consumed.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.pos;
        while self.eat_if(&mut pred).is_some() {}
        self.pos - start
    }

    /// Consumes `literal` (given in lowercase ASCII) ignoring ASCII case.
    /// Consumes nothing unless the whole literal matches.
    pub(crate) fn eat_ignore_case(&mut self, literal: &[u8]) -> bool {
        let end = self.pos + literal.len();
        let matched = self
            .src
            .as_bytes()
            .get(self.pos..end)
            .is_some_and(|window| window.eq_ignore_ascii_case(literal));
        if matched {
            self.pos = end;
        }
        matched
    }

    /// Skips Unicode whitespace and returns the number of bytes skipped.
    pub(crate) fn skip_whitespace(&mut self) -> usize {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
        skipped
    }

    /// Runs `f`, rewinding to the current offset when it returns `None`.
    pub(crate) fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let out = f(self);
        if out.is_none() {
            self.pos = start;
        }
        out
    }

    /// Input consumed since `start`.
    pub(crate) fn since(&self, start: usize) -> &'src str {
        &self.src[start..self.pos]
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }
}
