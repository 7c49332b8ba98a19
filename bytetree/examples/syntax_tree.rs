//! Serialize a small syntax tree and dump the stream.
//!
//! Run with `cargo run -p bytetree --example syntax_tree`.

use bytetree::{Encoder, Object, Wrapper};

/// Wire format revision of this tree.
const PROTOCOL_VERSION: u32 = 1;

#[derive(Clone, Copy, Wrapper)]
#[repr(u8)]
enum TokenKind {
    Identifier = 1,
    Keyword = 2,
    Punctuation = 3,
}

#[derive(Clone, Copy, Wrapper)]
#[repr(u8)]
enum NodeKind {
    VariableDecl = 10,
    Pattern = 11,
    Initializer = 12,
}

#[derive(Object)]
struct Token {
    kind: TokenKind,
    text: String,
    leading_trivia: Option<String>,
}

#[derive(Object)]
struct Node {
    kind: NodeKind,
    tokens: Vec<Token>,
    children: Vec<Node>,
    is_missing: bool,
}

fn token(kind: TokenKind, text: &str) -> Token {
    Token {
        kind,
        text: text.into(),
        leading_trivia: None,
    }
}

fn main() {
    // let answer = 42
    let tree = Node {
        kind: NodeKind::VariableDecl,
        tokens: vec![token(TokenKind::Keyword, "let")],
        children: vec![
            Node {
                kind: NodeKind::Pattern,
                tokens: vec![Token {
                    leading_trivia: Some(" ".into()),
                    ..token(TokenKind::Identifier, "answer")
                }],
                children: Vec::new(),
                is_missing: false,
            },
            Node {
                kind: NodeKind::Initializer,
                tokens: vec![
                    Token {
                        leading_trivia: Some(" ".into()),
                        ..token(TokenKind::Punctuation, "=")
                    },
                    Token {
                        leading_trivia: Some(" ".into()),
                        ..token(TokenKind::Identifier, "42")
                    },
                ],
                children: Vec::new(),
                is_missing: false,
            },
        ],
        is_missing: false,
    };

    let encoder = Encoder::new(PROTOCOL_VERSION);
    let bytes = encoder.encode(&tree).expect("in-memory encoding cannot fail");
    assert_eq!(bytes.len(), encoder.encoded_len(&tree).unwrap());

    println!("{} bytes", bytes.len());
    for chunk in bytes.chunks(16) {
        let line: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("{}", line.join(" "));
    }
}
