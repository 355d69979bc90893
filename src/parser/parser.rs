//! Recursive-descent parser for interface declaration files.
//!
//! Trivia is dropped up front; the parser works on significant tokens only.
//! Errors are collected rather than returned: a malformed member is
//! reported and skipped so the rest of the interface still parses.

use text_size::{TextRange, TextSize};

use super::error::SyntaxError;
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::syntax::ast::*;

/// Result of parsing one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parse {
    pub file: SourceFile,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a declaration file.
pub fn parse(source: &str) -> Parse {
    let mut parser = Parser::new(source);
    let file = parser.source_file();
    Parse {
        file,
        errors: parser.errors,
    }
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        let tokens = Lexer::new(source)
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    // ========================================================================
    // TOKEN CURSOR
    // ========================================================================

    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map_or(SyntaxKind::EOF, |t| t.kind)
    }

    fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn text(&self) -> &'a str {
        self.tokens.get(self.pos).map_or("", |t| t.text)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// At an identifier with exactly this text (contextual keywords).
    fn at_contextual(&self, text: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.text() == text
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> Option<Token<'a>> {
        if self.at(kind) {
            return self.bump();
        }
        self.error_here(format!(
            "expected {}, found {}",
            kind.display_name(),
            self.found()
        ));
        None
    }

    fn ident(&mut self) -> Option<String> {
        self.expect(SyntaxKind::IDENT).map(|t| t.text.to_string())
    }

    /// `A.B.C`
    fn qualified_name(&mut self) -> Option<String> {
        let mut name = self.ident()?;
        while self.at(SyntaxKind::DOT) && self.nth(1) == SyntaxKind::IDENT {
            self.bump();
            name.push('.');
            name.push_str(self.text());
            self.bump();
        }
        Some(name)
    }

    fn found(&self) -> String {
        match self.current() {
            SyntaxKind::EOF => "end of file".to_string(),
            _ => format!("'{}'", self.text()),
        }
    }

    /// Start offset of the current token.
    fn offset(&self) -> TextSize {
        self.tokens
            .get(self.pos)
            .map_or(TextSize::of(self.source), |t| t.offset)
    }

    /// End offset of the last consumed token.
    fn prev_end(&self) -> TextSize {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(t) => t.offset + TextSize::of(t.text),
            None => TextSize::new(0),
        }
    }

    fn range_from(&self, start: TextSize) -> TextRange {
        let end = self.prev_end();
        TextRange::new(start, end.max(start))
    }

    fn slice(&self, range: TextRange) -> &'a str {
        &self.source[range]
    }

    fn error_here(&mut self, message: impl Into<String>) {
        let start = self.offset();
        let len = self
            .tokens
            .get(self.pos)
            .map_or(TextSize::new(0), |t| TextSize::of(t.text));
        self.errors
            .push(SyntaxError::new(message, TextRange::at(start, len)));
    }

    // ========================================================================
    // RECOVERY
    // ========================================================================

    /// At `open`: consume through the matching `close`.
    fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        let mut depth = 0usize;
        while let Some(token) = self.bump() {
            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
    }

    /// Skip the rest of a malformed member: through the next `;` or a
    /// balanced `{ ... }`, stopping before an unmatched `}`.
    fn recover_member(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current() {
                SyntaxKind::EOF => return,
                SyntaxKind::SEMICOLON if depth == 0 => {
                    self.bump();
                    return;
                }
                SyntaxKind::L_BRACE => {
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::R_BRACE => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        return;
                    }
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    // ========================================================================
    // FILE STRUCTURE
    // ========================================================================

    fn source_file(&mut self) -> SourceFile {
        let (usings, items) = self.container(false);
        SourceFile { usings, items }
    }

    /// Usings and items up to `}` (in a block) or end of file.
    fn container(&mut self, in_block: bool) -> (Vec<UsingDirective>, Vec<Item>) {
        let mut usings = Vec::new();
        let mut items = Vec::new();

        loop {
            match self.current() {
                SyntaxKind::EOF => {
                    if in_block {
                        self.error_here("expected '}', found end of file");
                    }
                    break;
                }
                SyntaxKind::R_BRACE if in_block => break,
                SyntaxKind::USING_KW => {
                    if let Some(using) = self.using_directive(false) {
                        usings.push(using);
                    }
                }
                SyntaxKind::IDENT
                    if self.text() == "global" && self.nth(1) == SyntaxKind::USING_KW =>
                {
                    if let Some(using) = self.using_directive(true) {
                        usings.push(using);
                    }
                }
                SyntaxKind::NAMESPACE_KW => {
                    if let Some(ns) = self.namespace() {
                        items.push(Item::Namespace(ns));
                    }
                }
                SyntaxKind::SEMICOLON => {
                    self.bump();
                }
                kind if kind == SyntaxKind::L_BRACKET
                    || kind.is_modifier()
                    || kind.is_type_decl_keyword() =>
                {
                    if let Some(item) = self.type_declaration() {
                        items.push(item);
                    }
                }
                _ => {
                    self.error_here(format!("expected a declaration, found {}", self.found()));
                    self.bump();
                }
            }
        }

        (usings, items)
    }

    fn using_directive(&mut self, is_global: bool) -> Option<UsingDirective> {
        let start = self.offset();
        if is_global {
            self.bump();
        }
        self.bump(); // 'using'

        let kind = if self.eat(SyntaxKind::STATIC_KW) {
            UsingKind::Static
        } else if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::EQ {
            UsingKind::Alias
        } else {
            UsingKind::Namespace
        };

        let text_start = self.offset();
        while !matches!(
            self.current(),
            SyntaxKind::SEMICOLON | SyntaxKind::EOF | SyntaxKind::R_BRACE
        ) {
            self.bump();
        }
        let text = self.slice(self.range_from(text_start)).trim().to_string();
        if text.is_empty() {
            self.error_here("expected a namespace after 'using'");
        }
        self.expect(SyntaxKind::SEMICOLON)?;

        (!text.is_empty()).then(|| UsingDirective {
            kind,
            text,
            is_global,
            range: self.range_from(start),
        })
    }

    fn namespace(&mut self) -> Option<NamespaceDecl> {
        let start = self.offset();
        self.bump(); // 'namespace'
        let name = self.qualified_name()?;

        if self.eat(SyntaxKind::SEMICOLON) {
            let (usings, items) = self.container(false);
            return Some(NamespaceDecl {
                name,
                usings,
                items,
                file_scoped: true,
                range: self.range_from(start),
            });
        }

        self.expect(SyntaxKind::L_BRACE)?;
        let (usings, items) = self.container(true);
        self.expect(SyntaxKind::R_BRACE);
        Some(NamespaceDecl {
            name,
            usings,
            items,
            file_scoped: false,
            range: self.range_from(start),
        })
    }

    // ========================================================================
    // TYPE DECLARATIONS
    // ========================================================================

    fn type_declaration(&mut self) -> Option<Item> {
        let start = self.offset();
        let attributes = self.attribute_lists();
        while self.current().is_modifier() {
            self.bump();
        }

        match self.current() {
            SyntaxKind::INTERFACE_KW => self.interface(start, attributes).map(Item::Interface),
            SyntaxKind::CLASS_KW
            | SyntaxKind::STRUCT_KW
            | SyntaxKind::RECORD_KW
            | SyntaxKind::ENUM_KW => self.other_type(start).map(Item::Type),
            _ => {
                self.error_here(format!("expected a type declaration, found {}", self.found()));
                self.recover_member();
                None
            }
        }
    }

    fn interface(&mut self, start: TextSize, attributes: Vec<AttributeAst>) -> Option<InterfaceAst> {
        self.bump(); // 'interface'
        let Some(name) = self.ident() else {
            self.recover_member();
            return None;
        };

        let generic = self.at(SyntaxKind::L_ANGLE);
        if generic {
            self.error_here(format!("generic interface '{name}' is not supported"));
            self.skip_balanced(SyntaxKind::L_ANGLE, SyntaxKind::R_ANGLE);
        }

        let mut bases = Vec::new();
        if self.eat(SyntaxKind::COLON) {
            loop {
                match self.type_syntax() {
                    Some(base) => bases.push(base),
                    None => break,
                }
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        }
        while !matches!(
            self.current(),
            SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON | SyntaxKind::EOF
        ) {
            // `where` constraints and anything else before the body
            self.bump();
        }

        if self.expect(SyntaxKind::L_BRACE).is_none() {
            self.recover_member();
            return None;
        }
        let members = self.interface_members();
        self.expect(SyntaxKind::R_BRACE);
        self.eat(SyntaxKind::SEMICOLON);

        if generic {
            return None;
        }
        Some(InterfaceAst {
            name,
            attributes,
            bases,
            members,
            range: self.range_from(start),
        })
    }

    fn other_type(&mut self, start: TextSize) -> Option<TypeDeclAst> {
        let kind = match self.bump().map(|t| t.kind) {
            Some(SyntaxKind::CLASS_KW) => TypeDeclKind::Class,
            Some(SyntaxKind::STRUCT_KW) => TypeDeclKind::Struct,
            Some(SyntaxKind::ENUM_KW) => TypeDeclKind::Enum,
            _ => {
                // `record`, `record class`, `record struct`
                if self.at(SyntaxKind::CLASS_KW) || self.at(SyntaxKind::STRUCT_KW) {
                    self.bump();
                }
                TypeDeclKind::Record
            }
        };
        let Some(name) = self.ident() else {
            self.recover_member();
            return None;
        };

        loop {
            match self.current() {
                SyntaxKind::L_BRACE => {
                    self.skip_balanced(SyntaxKind::L_BRACE, SyntaxKind::R_BRACE);
                    self.eat(SyntaxKind::SEMICOLON);
                    break;
                }
                SyntaxKind::SEMICOLON => {
                    self.bump();
                    break;
                }
                SyntaxKind::L_PAREN => self.skip_balanced(SyntaxKind::L_PAREN, SyntaxKind::R_PAREN),
                SyntaxKind::L_ANGLE => self.skip_balanced(SyntaxKind::L_ANGLE, SyntaxKind::R_ANGLE),
                SyntaxKind::EOF => {
                    self.error_here(format!("unterminated declaration of '{name}'"));
                    break;
                }
                _ => {
                    self.bump();
                }
            }
        }

        Some(TypeDeclAst {
            kind,
            name,
            range: self.range_from(start),
        })
    }

    fn attribute_lists(&mut self) -> Vec<AttributeAst> {
        let mut attributes = Vec::new();
        while self.at(SyntaxKind::L_BRACKET) {
            self.bump();
            // Optional target, e.g. `[type: ...]`
            if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::COLON {
                self.bump();
                self.bump();
            }
            loop {
                let start = self.offset();
                let Some(name) = self.qualified_name() else {
                    break;
                };
                let mut args = Vec::new();
                if self.eat(SyntaxKind::L_PAREN) {
                    args = self.attribute_args();
                    self.expect(SyntaxKind::R_PAREN);
                }
                attributes.push(AttributeAst {
                    name,
                    args,
                    range: self.range_from(start),
                });
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
            if self.expect(SyntaxKind::R_BRACKET).is_none() {
                while !matches!(self.current(), SyntaxKind::R_BRACKET | SyntaxKind::EOF) {
                    self.bump();
                }
                self.eat(SyntaxKind::R_BRACKET);
            }
        }
        attributes
    }

    fn attribute_args(&mut self) -> Vec<AttributeArg> {
        let mut args = Vec::new();
        if self.at(SyntaxKind::R_PAREN) {
            return args;
        }
        loop {
            let name = if self.at(SyntaxKind::IDENT)
                && matches!(self.nth(1), SyntaxKind::EQ | SyntaxKind::COLON)
            {
                let name = self.text().to_string();
                self.bump();
                self.bump();
                Some(name)
            } else {
                None
            };
            let Some(value) = self.literal() else {
                break;
            };
            args.push(AttributeArg { name, value });
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        args
    }

    // ========================================================================
    // MEMBERS
    // ========================================================================

    fn interface_members(&mut self) -> Vec<MemberAst> {
        let mut members = Vec::new();
        while !matches!(self.current(), SyntaxKind::R_BRACE | SyntaxKind::EOF) {
            let before = self.pos;
            match self.member() {
                Some(member) => members.push(member),
                None => {
                    self.recover_member();
                    if self.pos == before {
                        // Stray `}` handled by the caller; anything else must advance
                        break;
                    }
                }
            }
        }
        members
    }

    fn member(&mut self) -> Option<MemberAst> {
        let start = self.offset();
        self.attribute_lists();
        while self.current().is_modifier() {
            self.bump();
        }

        if self.eat(SyntaxKind::EVENT_KW) {
            let ty = self.type_syntax()?;
            let name = self.ident()?;
            self.expect(SyntaxKind::SEMICOLON)?;
            return Some(MemberAst::Event(EventAst {
                ty,
                name,
                range: self.range_from(start),
            }));
        }

        let ty = self.type_syntax()?;

        if self.eat(SyntaxKind::THIS_KW) {
            self.expect(SyntaxKind::L_BRACKET)?;
            let params = self.param_list(SyntaxKind::R_BRACKET)?;
            self.expect(SyntaxKind::R_BRACKET)?;
            let accessors = self.accessor_block()?;
            return Some(MemberAst::Indexer(IndexerAst {
                ty,
                params,
                accessors,
                range: self.range_from(start),
            }));
        }

        let name = self.ident()?;
        match self.current() {
            SyntaxKind::L_PAREN => {
                self.bump();
                let params = self.param_list(SyntaxKind::R_PAREN)?;
                self.expect(SyntaxKind::R_PAREN)?;
                if self.at(SyntaxKind::L_BRACE) || self.at(SyntaxKind::FAT_ARROW) {
                    self.error_here(format!("method '{name}' must not have a body"));
                    return None;
                }
                self.expect(SyntaxKind::SEMICOLON)?;
                Some(MemberAst::Method(MethodAst {
                    return_type: ty,
                    name,
                    params,
                    range: self.range_from(start),
                }))
            }
            SyntaxKind::L_BRACE => {
                let accessors = self.accessor_block()?;
                Some(MemberAst::Property(PropertyAst {
                    ty,
                    name,
                    accessors,
                    range: self.range_from(start),
                }))
            }
            SyntaxKind::L_ANGLE => {
                self.error_here(format!("generic method '{name}' is not supported"));
                None
            }
            _ => {
                self.error_here(format!("expected '(' or '{{', found {}", self.found()));
                None
            }
        }
    }

    /// `{ get; set; }`, `{ get; init; }`, `{ get; }`
    fn accessor_block(&mut self) -> Option<Accessors> {
        let start = self.offset();
        self.expect(SyntaxKind::L_BRACE)?;
        let mut accessors = Accessors::default();

        loop {
            match self.current() {
                SyntaxKind::R_BRACE => {
                    self.bump();
                    break;
                }
                SyntaxKind::EOF => {
                    self.error_here("unterminated accessor list");
                    return None;
                }
                SyntaxKind::IDENT => {
                    match self.text() {
                        "get" => accessors.get = true,
                        "set" => accessors.set = true,
                        "init" => accessors.init = true,
                        other => {
                            self.error_here(format!("unexpected '{other}' in accessor list"))
                        }
                    }
                    self.bump();
                }
                SyntaxKind::L_BRACE => {
                    self.error_here("accessor bodies are not supported");
                    self.skip_balanced(SyntaxKind::L_BRACE, SyntaxKind::R_BRACE);
                }
                kind if kind == SyntaxKind::SEMICOLON || kind.is_modifier() => {
                    self.bump();
                }
                _ => {
                    self.error_here(format!("unexpected {} in accessor list", self.found()));
                    self.bump();
                }
            }
        }

        if !accessors.get && !accessors.set && !accessors.init {
            self.errors.push(SyntaxError::new(
                "accessor list must declare 'get', 'set' or 'init'",
                self.range_from(start),
            ));
        }
        Some(accessors)
    }

    fn param_list(&mut self, close: SyntaxKind) -> Option<Vec<ParamAst>> {
        let mut params = Vec::new();
        if self.at(close) {
            return Some(params);
        }
        loop {
            self.attribute_lists();
            let modifier = match self.current() {
                SyntaxKind::REF_KW => ParamModifier::Ref,
                SyntaxKind::OUT_KW => ParamModifier::Out,
                SyntaxKind::IN_KW => ParamModifier::In,
                _ => ParamModifier::None,
            };
            if modifier != ParamModifier::None {
                self.bump();
            }
            let ty = self.type_syntax()?;
            let name = self.ident()?;
            let default = if self.eat(SyntaxKind::EQ) {
                Some(self.literal()?)
            } else {
                None
            };
            params.push(ParamAst {
                modifier,
                ty,
                name,
                default,
            });
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        Some(params)
    }

    // ========================================================================
    // TYPES AND LITERALS
    // ========================================================================

    fn type_syntax(&mut self) -> Option<TypeSyntax> {
        let start = self.offset();
        let global = self.at_contextual("global") && self.nth(1) == SyntaxKind::COLON_COLON;
        if global {
            self.bump();
            self.bump();
        }

        if !self.at(SyntaxKind::IDENT) {
            self.error_here(format!("expected a type, found {}", self.found()));
            return None;
        }
        let mut segments = vec![self.text().to_string()];
        self.bump();
        let mut args = Vec::new();

        loop {
            if self.at(SyntaxKind::L_ANGLE) {
                if !args.is_empty() {
                    self.error_here("unexpected second type argument list");
                    return None;
                }
                self.bump();
                loop {
                    args.push(self.type_syntax()?);
                    if !self.eat(SyntaxKind::COMMA) {
                        break;
                    }
                }
                self.expect(SyntaxKind::R_ANGLE)?;
            } else if self.at(SyntaxKind::DOT) && self.nth(1) == SyntaxKind::IDENT {
                if !args.is_empty() {
                    self.error_here("type arguments on an enclosing type are not supported");
                    return None;
                }
                self.bump();
                segments.push(self.text().to_string());
                self.bump();
            } else {
                break;
            }
        }

        let mut ty = TypeSyntax {
            kind: TypeSyntaxKind::Named {
                global,
                segments,
                args,
            },
            nullable: false,
            range: self.range_from(start),
        };

        loop {
            if self.at(SyntaxKind::QUESTION) {
                self.bump();
                ty.nullable = true;
                ty.range = self.range_from(start);
            } else if self.at(SyntaxKind::L_BRACKET) && self.nth(1) == SyntaxKind::R_BRACKET {
                self.bump();
                self.bump();
                ty = TypeSyntax {
                    kind: TypeSyntaxKind::Array(Box::new(ty)),
                    nullable: false,
                    range: self.range_from(start),
                };
            } else {
                break;
            }
        }

        Some(ty)
    }

    fn literal(&mut self) -> Option<LiteralAst> {
        let start = self.offset();
        let literal = match self.current() {
            SyntaxKind::STRING => {
                let text = self.text();
                LiteralAst::String(unescape(&text[1..text.len() - 1]))
            }
            SyntaxKind::CHAR => {
                let text = self.text();
                let unescaped = unescape(&text[1..text.len() - 1]);
                match unescaped.chars().next() {
                    Some(c) if unescaped.chars().count() == 1 => LiteralAst::Char(c),
                    _ => {
                        self.error_here(format!("invalid character literal {text}"));
                        return None;
                    }
                }
            }
            SyntaxKind::TRUE_KW => LiteralAst::Bool(true),
            SyntaxKind::FALSE_KW => LiteralAst::Bool(false),
            SyntaxKind::NULL_KW | SyntaxKind::NUMBER => LiteralAst::Other(self.text().to_string()),
            SyntaxKind::DEFAULT_KW => {
                self.bump();
                if self.at(SyntaxKind::L_PAREN) {
                    self.skip_balanced(SyntaxKind::L_PAREN, SyntaxKind::R_PAREN);
                }
                return Some(LiteralAst::Other(
                    self.slice(self.range_from(start)).to_string(),
                ));
            }
            SyntaxKind::MINUS if self.nth(1) == SyntaxKind::NUMBER => {
                self.bump();
                LiteralAst::Other(format!("-{}", self.text()))
            }
            SyntaxKind::IDENT => {
                // Constant or enum member, e.g. `Color.Red`
                self.qualified_name()?;
                return Some(LiteralAst::Other(
                    self.slice(self.range_from(start)).to_string(),
                ));
            }
            _ => {
                self.error_here(format!("expected a literal, found {}", self.found()));
                return None;
            }
        };
        self.bump();
        Some(literal)
    }
}

/// Resolve backslash escapes of a string or character literal body.
///
/// Unknown or malformed escapes are kept as written.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };
        let simple = match escape {
            '\'' => Some('\''),
            '"' => Some('"'),
            '\\' => Some('\\'),
            '0' => Some('\0'),
            'a' => Some('\u{7}'),
            'b' => Some('\u{8}'),
            'f' => Some('\u{c}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'v' => Some('\u{b}'),
            _ => None,
        };
        if let Some(decoded) = simple {
            out.push(decoded);
            continue;
        }

        // `\xH..HHHH` takes one to four digits; `\uHHHH` and `\UHHHHHHHH` are fixed
        let (min, max) = match escape {
            'x' => (1, 4),
            'u' => (4, 4),
            'U' => (8, 8),
            other => {
                out.push('\\');
                out.push(other);
                continue;
            }
        };
        let mut hex = String::new();
        while hex.len() < max
            && let Some(&digit) = chars.peek()
            && digit.is_ascii_hexdigit()
        {
            hex.push(digit);
            chars.next();
        }
        let decoded = (hex.len() >= min)
            .then(|| u32::from_str_radix(&hex, 16).ok())
            .flatten()
            .and_then(char::from_u32);
        match decoded {
            Some(decoded) => out.push(decoded),
            None => {
                out.push('\\');
                out.push(escape);
                out.push_str(&hex);
            }
        }
    }
    out
}
