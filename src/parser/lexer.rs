//! Logos-based lexer for interface declarations
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"@?[\p{XID_Start}_][\p{XID_Continue}]*")]
    Ident,

    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9][0-9a-zA-Z_]*)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.[^']*)'")]
    Char,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("::")]
    ColonColon,

    #[token("=>")]
    FatArrow,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("?")]
    Question,
    #[token("-")]
    Minus,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("using")]
    UsingKw,
    #[token("static")]
    StaticKw,
    #[token("namespace")]
    NamespaceKw,
    #[token("interface")]
    InterfaceKw,
    #[token("class")]
    ClassKw,
    #[token("struct")]
    StructKw,
    #[token("record")]
    RecordKw,
    #[token("enum")]
    EnumKw,
    #[token("event")]
    EventKw,
    #[token("this")]
    ThisKw,
    #[token("ref")]
    RefKw,
    #[token("out")]
    OutKw,
    #[token("in")]
    InKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("null")]
    NullKw,
    #[token("default")]
    DefaultKw,
    #[token("public")]
    PublicKw,
    #[token("internal")]
    InternalKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("partial")]
    PartialKw,
    #[token("new")]
    NewKw,
    #[token("abstract")]
    AbstractKw,
    #[token("sealed")]
    SealedKw,
    #[token("readonly")]
    ReadonlyKw,
    #[token("where")]
    WhereKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            Char => SyntaxKind::CHAR,

            // Punctuation
            ColonColon => SyntaxKind::COLON_COLON,
            FatArrow => SyntaxKind::FAT_ARROW,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LAngle => SyntaxKind::L_ANGLE,
            RAngle => SyntaxKind::R_ANGLE,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            Question => SyntaxKind::QUESTION,
            Minus => SyntaxKind::MINUS,

            // Keywords
            UsingKw => SyntaxKind::USING_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            NamespaceKw => SyntaxKind::NAMESPACE_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            StructKw => SyntaxKind::STRUCT_KW,
            RecordKw => SyntaxKind::RECORD_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            EventKw => SyntaxKind::EVENT_KW,
            ThisKw => SyntaxKind::THIS_KW,
            RefKw => SyntaxKind::REF_KW,
            OutKw => SyntaxKind::OUT_KW,
            InKw => SyntaxKind::IN_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            NullKw => SyntaxKind::NULL_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            PublicKw => SyntaxKind::PUBLIC_KW,
            InternalKw => SyntaxKind::INTERNAL_KW,
            PrivateKw => SyntaxKind::PRIVATE_KW,
            ProtectedKw => SyntaxKind::PROTECTED_KW,
            PartialKw => SyntaxKind::PARTIAL_KW,
            NewKw => SyntaxKind::NEW_KW,
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            SealedKw => SyntaxKind::SEALED_KW,
            ReadonlyKw => SyntaxKind::READONLY_KW,
            WhereKw => SyntaxKind::WHERE_KW,
        }
    }
}
