#![no_main]

use arbitrary::Arbitrary;
use cfgscan::{CharStream, CommentLexer, LexerOptions, MemoryCharStream};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    marker: u8,
    start: u8,
    data: Vec<u8>,
}

fn run(input: &Input) {
    let lexer = CommentLexer::new(LexerOptions {
        comment_marker: input.marker,
    });
    let mut stream = MemoryCharStream::from(input.data.clone());
    let start = i64::from(input.start);
    stream.seek(start, cfgscan::Whence::Start).unwrap();
    let before = stream.position();

    match lexer.parse_comment_block(&mut stream) {
        None => {
            // A rejected position is left unread.
            assert_eq!(stream.position(), before);
        }
        Some(block) => {
            assert!(!block.is_empty());
            assert_eq!(input.data[before], input.marker);
            assert!(stream.position() > before);
            for line in &block {
                assert!(!line.contains(&b'\n'));
            }
            // The block ends on a byte that is neither whitespace nor a marker.
            if let Some(next) = stream.next_char() {
                assert_ne!(next, input.marker);
                assert!(!next.is_ascii_whitespace() && next != 0x0b);
            }
        }
    }
    assert_eq!(stream.error(), None);
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(input) = Input::arbitrary(&mut u) {
        run(&input);
    }
});
