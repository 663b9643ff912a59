//! This library checks whether the body of a FASTA sequence record is wrapped
//! into lines of a consistent width, and reports the total number of sequence
//! characters along the way. It operates on an in-memory byte buffer holding
//! the body of *one* record (everything below the `>` header line); reading
//! files, splitting records and parsing headers are left to a full parser
//! such as `seq_io`.
//!
//! The single entry point is [`scan`](scan/fn.scan.html), which takes the
//! record body and the expected line width and returns a
//! [`ScanOutcome`](scan/struct.ScanOutcome.html) with the sequence length and
//! the number of wrapping irregularities. Irregularities are reported as
//! data, never as an error value: the function is total and never fails,
//! however malformed the input.
//!
//! # Example
//!
//! A record wrapped at 8 characters per line, with the usual shorter last
//! line, is consistent:
//!
//! ```
//! use seq_wrap::scan;
//!
//! let body = b"GATCACAG\nGTCTATCA\nCCCT\n";
//! let outcome = scan(body, 8);
//! assert_eq!(outcome.seq_len, 20);
//! assert_eq!(outcome.errors, 0);
//! ```
//!
//! A line break in the wrong place shows up in the error count, while the
//! sequence length is unaffected:
//!
//! ```
//! use seq_wrap::scan;
//!
//! let body = b"GATCACAG\nGTCTA\nTCACCCT\n";
//! let outcome = scan(body, 8);
//! assert_eq!(outcome.seq_len, 20);
//! assert_eq!(outcome.errors, 2);
//! ```
//!
//! Callers decide what a non-zero error count means for them (reject the
//! record, warn, or re-wrap); typical use is deciding whether a record can
//! be indexed by line arithmetic, which requires uniform wrapping.
//!
//! Carriage returns are tolerated everywhere and never count towards line
//! widths or the sequence length, so `\r\n` files check out the same as
//! `\n` files.

extern crate memchr;

#[macro_use]
extern crate serde_derive;
extern crate serde;

pub mod scan;

pub use crate::scan::{scan, ScanOutcome};
