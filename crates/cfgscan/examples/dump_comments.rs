//! Prints the comment blocks of a configuration file, together with the
//! uncommented lines between them.
//!
//! Run with
//!
//! ```bash
//! cargo run -p cfgscan --example dump_comments -- path/to/file.conf
//! ```

use std::process::ExitCode;

use cfgscan::{
    CharStream, FileCharStream, TextAccumulator, check_end_of_input, parse_comment_block,
    parse_newline, skip_whitespace,
};

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: dump_comments <file>");
        return ExitCode::FAILURE;
    };

    let mut stream = FileCharStream::open(&path);
    if let Some(err) = stream.error() {
        eprintln!("{}: {err}", path.to_string_lossy());
        return ExitCode::FAILURE;
    }

    let mut scratch = TextAccumulator::new();
    loop {
        skip_whitespace(&mut stream);
        if check_end_of_input(&mut stream) {
            break;
        }
        if let Some(block) = parse_comment_block(&mut stream) {
            println!("--- comment ({} lines)", block.len());
            println!("{block}");
            continue;
        }
        while !parse_newline(&mut stream) {
            match stream.next_char() {
                Some(byte) => scratch.push_byte(byte),
                None => break,
            }
        }
        println!("--- text: {}", scratch.finish());
        if let Some(err) = stream.error() {
            eprintln!("read failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
