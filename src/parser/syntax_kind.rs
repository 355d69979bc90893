//! Token kinds of the declaration language.

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // identifier, including contextual keywords like `get`
    NUMBER, // 42, 3.5m, 0xFF
    STRING, // "hello"
    CHAR,   // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    L_PAREN,     // (
    R_PAREN,     // )
    L_ANGLE,     // <
    R_ANGLE,     // >
    SEMICOLON,   // ;
    COLON,       // :
    COLON_COLON, // ::
    COMMA,       // ,
    DOT,         // .
    EQ,          // =
    QUESTION,    // ?
    MINUS,       // -
    FAT_ARROW,   // =>

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    USING_KW,
    STATIC_KW,
    NAMESPACE_KW,
    INTERFACE_KW,
    CLASS_KW,
    STRUCT_KW,
    RECORD_KW,
    ENUM_KW,
    EVENT_KW,
    THIS_KW,
    REF_KW,
    OUT_KW,
    IN_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    DEFAULT_KW,
    PUBLIC_KW,
    INTERNAL_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PARTIAL_KW,
    NEW_KW,
    ABSTRACT_KW,
    SEALED_KW,
    READONLY_KW,
    WHERE_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
    EOF,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WHITESPACE | SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT
        )
    }

    /// Modifiers accepted (and ignored) in front of declarations and members.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::PUBLIC_KW
                | SyntaxKind::INTERNAL_KW
                | SyntaxKind::PRIVATE_KW
                | SyntaxKind::PROTECTED_KW
                | SyntaxKind::PARTIAL_KW
                | SyntaxKind::NEW_KW
                | SyntaxKind::ABSTRACT_KW
                | SyntaxKind::SEALED_KW
                | SyntaxKind::READONLY_KW
                | SyntaxKind::STATIC_KW
        )
    }

    /// Keywords that open a type declaration.
    pub fn is_type_decl_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::INTERFACE_KW
                | SyntaxKind::CLASS_KW
                | SyntaxKind::STRUCT_KW
                | SyntaxKind::RECORD_KW
                | SyntaxKind::ENUM_KW
        )
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SyntaxKind::IDENT => "identifier",
            SyntaxKind::NUMBER => "number",
            SyntaxKind::STRING => "string literal",
            SyntaxKind::CHAR => "character literal",
            SyntaxKind::L_BRACE => "'{'",
            SyntaxKind::R_BRACE => "'}'",
            SyntaxKind::L_BRACKET => "'['",
            SyntaxKind::R_BRACKET => "']'",
            SyntaxKind::L_PAREN => "'('",
            SyntaxKind::R_PAREN => "')'",
            SyntaxKind::L_ANGLE => "'<'",
            SyntaxKind::R_ANGLE => "'>'",
            SyntaxKind::SEMICOLON => "';'",
            SyntaxKind::COLON => "':'",
            SyntaxKind::COLON_COLON => "'::'",
            SyntaxKind::COMMA => "','",
            SyntaxKind::DOT => "'.'",
            SyntaxKind::EQ => "'='",
            SyntaxKind::QUESTION => "'?'",
            SyntaxKind::EOF => "end of file",
            SyntaxKind::ERROR => "invalid token",
            _ => "keyword",
        }
    }
}
