#![expect(missing_docs)]

use core::fmt::Write;

use cfgscan::{
    CharStream, CommentLexer, LexerOptions, MemoryCharStream, TextAccumulator, check_end_of_input,
    parse_newline, skip_whitespace,
};

/// Walks a config-like document, printing comment blocks and the text lines
/// between them.
fn render(input: &str, options: LexerOptions) -> String {
    let lexer = CommentLexer::new(options);
    let mut stream = MemoryCharStream::from(input);
    let mut scratch = TextAccumulator::new();
    let mut out = String::new();
    let mut blocks = 0;

    loop {
        skip_whitespace(&mut stream);
        if check_end_of_input(&mut stream) {
            break;
        }
        if let Some(block) = lexer.parse_comment_block(&mut stream) {
            writeln!(out, "block {blocks}").unwrap();
            for line in &block {
                writeln!(out, "  |{line}|").unwrap();
            }
            blocks += 1;
            continue;
        }
        while !parse_newline(&mut stream) {
            match stream.next_char() {
                Some(byte) => scratch.push_byte(byte),
                None => break,
            }
        }
        writeln!(out, "text {}", scratch.finish()).unwrap();
    }
    out
}

#[test]
fn snapshot_config_document() {
    let doc = "# Server settings\n#\n#   listen on all interfaces\nhost = 0.0.0.0\n\n# Port to bind.\nport = 8080\n";
    insta::assert_snapshot!(render(doc, LexerOptions::default()), @r"
    block 0
      | Server settings|
      ||
      |   listen on all interfaces|
    text host = 0.0.0.0
    block 1
      | Port to bind.|
    text port = 8080
    ");
}

#[test]
fn snapshot_crlf_document_with_indented_comments() {
    let doc = "  # a\r\n\r\n\t# b\r\nkey\r\n# tail";
    insta::assert_snapshot!(render(doc, LexerOptions::default()), @r"
    block 0
      | a|
      | b|
    text key
    block 1
      | tail|
    ");
}

#[test]
fn snapshot_semicolon_comments() {
    let doc = "; ini style\n[section]\n;; doubled\nname=x";
    let options = LexerOptions { comment_marker: b';' };
    insta::assert_snapshot!(render(doc, options), @r"
    block 0
      | ini style|
    text [section]
    block 1
      |; doubled|
    text name=x
    ");
}
