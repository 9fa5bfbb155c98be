/// A byte cursor over a single line of inline content.
///
/// Delimiters are ASCII, so every index the scanner stops at on a delimiter
/// is also a valid `char` boundary for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte index.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Finds the next occurrence of `pat` at or after the current index,
    /// returning its absolute byte index without moving the cursor.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        if pat.is_empty() {
            return Some(self.i);
        }
        let rest = self.s.as_bytes().get(self.i..)?;
        rest.windows(pat.len())
            .position(|w| w == pat)
            .map(|off| self.i + off)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Moves the cursor to an absolute byte index.
    pub fn seek(&mut self, i: usize) {
        self.i = i;
    }
}
