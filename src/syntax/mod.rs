// Syntax tree for declaration files
pub mod ast;

pub use ast::{
    Accessors, AttributeArg, AttributeAst, EventAst, IndexerAst, InterfaceAst, Item, LiteralAst,
    MemberAst, MethodAst, NamespaceDecl, ParamAst, ParamModifier, PropertyAst, ScopedItem,
    SourceFile, TypeDeclAst, TypeDeclKind, TypeSyntax, TypeSyntaxKind, UsingDirective, UsingKind,
};
