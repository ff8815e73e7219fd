//! Code fence detection for the structural pass.

/// An open code fence: the delimiter character and its run length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FenceMarker {
    ch: char,
    len: usize,
}

impl FenceMarker {
    /// Parse an opening fence from a trimmed line.
    ///
    /// Returns the marker and the info string following it. A fence is a
    /// run of three or more backticks or tildes at the start of the line.
    pub fn open(trimmed: &str) -> Option<(Self, &str)> {
        let ch = trimmed.chars().next()?;
        if ch != '`' && ch != '~' {
            return None;
        }
        let len = trimmed.chars().take_while(|&c| c == ch).count();
        if len < 3 {
            return None;
        }
        Some((Self { ch, len }, &trimmed[len..]))
    }

    /// Whether a trimmed line closes this fence.
    ///
    /// Closing matches by prefix: any run of three or more of the opening
    /// character counts, even when the fence was opened with a longer run.
    pub fn closes(self, trimmed: &str) -> bool {
        trimmed.chars().take_while(|&c| c == self.ch).count() >= 3
    }
}
