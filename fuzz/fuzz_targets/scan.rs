#![no_main]

use libfuzzer_sys::fuzz_target;
use seq_wrap::scan::{is_residue, scan};

fuzz_target!(|data: &[u8]| {
    let (&first, body) = match data.split_first() {
        Some(split) => split,
        None => return,
    };
    let width = first as usize;

    let outcome = scan(body, width);

    // seq_len is a straight residue count, whatever the line structure
    let residues = body.iter().filter(|&&b| is_residue(b)).count();
    assert_eq!(outcome.seq_len, residues);

    // at most one error per terminated line
    let terminators = body.iter().filter(|&&b| b == b'\n').count();
    assert!(outcome.errors <= terminators);

    // deterministic
    assert_eq!(scan(body, width), outcome);
});
