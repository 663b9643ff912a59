//! The line-consistency scanner: one pass over a record body, O(1) extra
//! space. See [`scan`](fn.scan.html).

use memchr::memchr;

/// What [`scan`](fn.scan.html) found in one record body.
///
/// Convertible into the plain `(seq_len, errors)` pair for hosts that hand
/// results around as two-element arrays.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Total number of sequence characters in the whole buffer, regardless
    /// of how (or whether) it is wrapped into lines.
    pub seq_len: usize,
    /// Number of line-wrapping irregularities: lines whose width differs
    /// from the expected one, and content lines following a blank line.
    pub errors: usize,
}

impl ScanOutcome {
    /// Returns `true` if no wrapping irregularity was found.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.errors == 0
    }
}

impl From<ScanOutcome> for (usize, usize) {
    #[inline]
    fn from(outcome: ScanOutcome) -> (usize, usize) {
        (outcome.seq_len, outcome.errors)
    }
}

/// Returns `true` for bytes that count as sequence characters: everything
/// strictly above ASCII space. Spaces, tabs and line ends are layout.
#[inline]
pub fn is_residue(byte: u8) -> bool {
    byte > b' '
}

/// Returns `true` for `\r`, which is ignored in line-width accounting.
#[inline]
pub fn is_carriage_return(byte: u8) -> bool {
    byte == b'\r'
}

/// Width of one line in content characters, `\r` excluded.
#[inline]
fn line_width(line: &[u8]) -> usize {
    line.iter().filter(|&&b| !is_carriage_return(b)).count()
}

/// Number of sequence characters in a slice.
#[inline]
fn residue_count(line: &[u8]) -> usize {
    line.iter().filter(|&&b| is_residue(b)).count()
}

/// Scans the body of one sequence record for line-wrapping consistency.
///
/// `seq` is the record body including its line terminators (`\n`, optionally
/// preceded by `\r`); `width` is the number of content characters each
/// wrapped line is expected to hold. The buffer is only read, never retained.
///
/// Each `\n` closes a line and the closed line is judged:
///
/// * an empty line is tolerated, but only as part of a trailing run: every
///   content line found after a blank line counts as one error;
/// * a line whose width (excluding `\r`) differs from `width` counts as one
///   error.
///
/// If the *only* error recorded was the most recently closed line
/// mismatching, it is discounted again at the end: wrapping tools pad all
/// lines to a fixed width except the last, so a lone short (or long) final
/// line is normal. The correction never applies once a second irregularity
/// co-occurred.
///
/// Characters after the last `\n` still count towards `seq_len`, but an
/// unterminated trailing line is never judged for its width.
///
/// A `width` of 0 gets no special treatment: every non-empty line then
/// mismatches by construction. Callers must supply the width the record was
/// actually wrapped at.
///
/// The function is total (malformed input raises `errors`, it never faults)
/// and has no side effects, so independent buffers can be scanned
/// concurrently without coordination.
pub fn scan(seq: &[u8], width: usize) -> ScanOutcome {
    let mut seq_len = 0;
    let mut errors = 0;
    let mut blank_seen = false;
    let mut last_mismatched = false;

    let mut rest = seq;
    while let Some(pos) = memchr(b'\n', rest) {
        let (line, remaining) = rest.split_at(pos);
        rest = &remaining[1..];
        seq_len += residue_count(line);
        let w = line_width(line);
        if w == 0 {
            blank_seen = true;
        } else if blank_seen {
            // content below a blank line, the record body ended earlier
            errors += 1;
        } else if w != width {
            errors += 1;
            last_mismatched = true;
        } else {
            last_mismatched = false;
        }
    }
    // unterminated trailing line: counted, never judged
    seq_len += residue_count(rest);

    // forgive a lone mismatch on the last closed line
    if last_mismatched && errors == 1 {
        errors -= 1;
    }

    ScanOutcome { seq_len, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_classes() {
        assert!(is_residue(b'A'));
        assert!(is_residue(b'*'));
        assert!(is_residue(0xffu8));
        assert!(!is_residue(b' '));
        assert!(!is_residue(b'\t'));
        assert!(!is_residue(b'\r'));
        assert!(!is_residue(b'\n'));
        assert!(is_carriage_return(b'\r'));
        assert!(!is_carriage_return(b'\n'));
    }

    #[test]
    fn empty_input() {
        assert_eq!(scan(b"", 60), ScanOutcome::default());
        assert_eq!(scan(b"", 0), ScanOutcome::default());
    }

    #[test]
    fn outcome_pair() {
        let pair: (usize, usize) = scan(b"ACGT\nAC\nGT\n", 4).into();
        assert_eq!(pair, (8, 2));
    }
}
