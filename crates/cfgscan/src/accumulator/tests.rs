use alloc::vec::Vec;
use core::fmt::Write;

use super::*;

const EIGHTY: &[u8] =
    b"aaaaaaaaaaaaaaaabbbbbbbbbbbbbbbbccccccccccccccccddddddddddddddddeeeeeeeeeeeeeeee";

fn capacities(acc: &TextAccumulator) -> Vec<usize> {
    acc.segment_capacities().collect()
}

#[test]
fn finish_concatenates_small_and_large_pushes() {
    let mut acc = TextAccumulator::new();
    acc.push(b"test");
    acc.push(b"qwer");
    acc.push(EIGHTY);
    acc.push(b"qwer");

    assert_eq!(acc.len(), 92);
    let out = acc.finish();
    assert_eq!(
        out,
        "testqweraaaaaaaaaaaaaaaabbbbbbbbbbbbbbbbccccccccccccccccddddddddddddddddeeeeeeeeeeeeeeeeqwer"
    );
    assert_eq!(acc.len(), 0);
    assert_eq!(acc.segment_count(), 0);
}

#[test]
fn accumulator_is_reusable_after_finish() {
    let mut acc = TextAccumulator::new();
    acc.push(b"first");
    assert_eq!(acc.finish(), "first");

    acc.push(b"second");
    assert_eq!(acc.finish(), "second");
}

#[test]
fn empty_push_is_a_no_op() {
    let mut acc = TextAccumulator::new();
    acc.push(b"");
    assert!(acc.is_empty());
    assert_eq!(acc.segment_count(), 0);

    acc.push(b"abc");
    acc.push(b"");
    assert_eq!(acc.len(), 3);
    assert_eq!(capacities(&acc), [64]);
}

#[test]
fn finishing_empty_accumulator_yields_empty_buffer() {
    let mut acc = TextAccumulator::new();
    assert!(acc.finish().is_empty());
}

#[test]
fn small_first_push_gets_minimum_segment() {
    let mut acc = TextAccumulator::new();
    acc.push(b"x");
    assert_eq!(capacities(&acc), [TextAccumulator::MIN_SEGMENT]);
}

#[test]
fn large_first_push_gets_exactly_sized_segment() {
    let mut acc = TextAccumulator::new();
    acc.push(EIGHTY);
    assert_eq!(capacities(&acc), [80]);
}

#[test]
fn overflow_allocates_one_segment_for_the_remainder() {
    let mut acc = TextAccumulator::new();
    acc.push(&[b'a'; 60]);
    assert_eq!(capacities(&acc), [64]);

    // 4 bytes fill the first segment, 6 spill into a fresh minimum segment.
    acc.push(&[b'b'; 10]);
    assert_eq!(capacities(&acc), [64, 64]);

    // 58 bytes top up the second segment, 142 need a segment of their own.
    acc.push(&[b'c'; 200]);
    assert_eq!(capacities(&acc), [64, 64, 142]);
    assert_eq!(acc.len(), 270);

    let out = acc.finish();
    assert_eq!(&out[..60], &[b'a'; 60][..]);
    assert_eq!(&out[60..70], &[b'b'; 10][..]);
    assert_eq!(&out[70..], &[b'c'; 200][..]);
}

#[test]
fn exact_fit_does_not_allocate() {
    let mut acc = TextAccumulator::new();
    acc.push(&[b'a'; 32]);
    acc.push(&[b'b'; 32]);
    assert_eq!(acc.segment_count(), 1);
    acc.push_byte(b'c');
    assert_eq!(acc.segment_count(), 2);
}

#[test]
fn destroy_discards_partial_data() {
    let mut acc = TextAccumulator::new();
    acc.push(b"in flight");
    acc.destroy();
    assert!(acc.is_empty());
    assert_eq!(acc.segment_count(), 0);
    assert!(acc.finish().is_empty());
}

#[test]
fn extend_and_write_append_in_order() {
    let mut acc = TextAccumulator::new();
    acc.extend(*b"ab");
    acc.extend([&b"cd"[..], &b"ef"[..]]);
    write!(acc, "-{}", 42).unwrap();
    assert_eq!(acc.finish(), "abcdef-42");
}

#[test]
fn many_single_byte_pushes() {
    let mut acc = TextAccumulator::new();
    for i in 0..300_000u32 {
        acc.push_byte(b'a' + (i % 26) as u8);
    }
    assert_eq!(acc.len(), 300_000);
    assert!(acc.segment_capacities().all(|c| c == TextAccumulator::MIN_SEGMENT));
    let out = acc.finish();
    assert_eq!(out.len(), 300_000);
    assert!(out.starts_with(b"abc"));
    assert_eq!(out[26], b'a');
}
