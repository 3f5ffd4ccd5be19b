#![no_main]

use cfgscan::TextAccumulator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The first byte of each chunk is its length.
    let mut chunks = Vec::new();
    let mut rest = data;
    while let Some((&len, tail)) = rest.split_first() {
        let (chunk, tail) = tail.split_at(usize::from(len).min(tail.len()));
        chunks.push(chunk);
        rest = tail;
    }

    let mut acc = TextAccumulator::new();
    let mut expected = Vec::new();
    for chunk in chunks {
        acc.push(chunk);
        expected.extend_from_slice(chunk);
    }
    assert_eq!(acc.len(), expected.len());
    assert_eq!(acc.finish().as_slice(), expected.as_slice());
    assert!(acc.is_empty());
});
