//! AST for interface declaration files.
//!
//! Produced by [`crate::parser::parse`]; consumed by HIR lowering.

use text_size::TextRange;

/// A parsed declaration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFile {
    /// File-level `using` directives.
    pub usings: Vec<UsingDirective>,
    pub items: Vec<Item>,
}

impl SourceFile {
    /// Every interface in the file, with the namespace path and the
    /// `using` directives in scope where it is declared.
    pub fn interfaces(&self) -> Vec<ScopedItem<'_, InterfaceAst>> {
        self.scoped(|item| match item {
            Item::Interface(interface) => Some(interface),
            _ => None,
        })
    }

    /// Every class, struct, record and enum in the file.
    pub fn type_decls(&self) -> Vec<ScopedItem<'_, TypeDeclAst>> {
        self.scoped(|item| match item {
            Item::Type(decl) => Some(decl),
            _ => None,
        })
    }

    /// `using` directives marked `global`, anywhere in the file.
    pub fn global_usings(&self) -> Vec<&UsingDirective> {
        let mut out: Vec<&UsingDirective> = self.usings.iter().filter(|u| u.is_global).collect();
        let mut stack: Vec<&Item> = self.items.iter().collect();
        while let Some(item) = stack.pop() {
            if let Item::Namespace(ns) = item {
                out.extend(ns.usings.iter().filter(|u| u.is_global));
                stack.extend(&ns.items);
            }
        }
        out
    }

    fn scoped<'a, T>(&'a self, pick: impl Fn(&'a Item) -> Option<&'a T>) -> Vec<ScopedItem<'a, T>> {
        let mut out = Vec::new();
        let usings: Vec<&UsingDirective> = self.usings.iter().collect();
        collect_scoped(&self.items, &[], &usings, &pick, &mut out);
        out
    }
}

fn collect_scoped<'a, T>(
    items: &'a [Item],
    namespace: &[&'a str],
    usings: &[&'a UsingDirective],
    pick: &impl Fn(&'a Item) -> Option<&'a T>,
    out: &mut Vec<ScopedItem<'a, T>>,
) {
    for item in items {
        if let Item::Namespace(ns) = item {
            let mut inner_ns = namespace.to_vec();
            inner_ns.push(&ns.name);
            let mut inner_usings = usings.to_vec();
            inner_usings.extend(&ns.usings);
            collect_scoped(&ns.items, &inner_ns, &inner_usings, pick, out);
        } else if let Some(picked) = pick(item) {
            out.push(ScopedItem {
                namespace: namespace.to_vec(),
                usings: usings.to_vec(),
                item: picked,
            });
        }
    }
}

/// An item together with its enclosing namespace path and visible usings.
#[derive(Debug, Clone)]
pub struct ScopedItem<'a, T> {
    /// Namespace segments from outermost to innermost, each possibly dotted.
    pub namespace: Vec<&'a str>,
    pub usings: Vec<&'a UsingDirective>,
    pub item: &'a T,
}

impl<T> ScopedItem<'_, T> {
    /// `Outer.Inner`, or `None` at file scope.
    pub fn namespace_name(&self) -> Option<String> {
        (!self.namespace.is_empty()).then(|| self.namespace.join("."))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Namespace(NamespaceDecl),
    Interface(InterfaceAst),
    Type(TypeDeclAst),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    /// Dotted name as written.
    pub name: String,
    pub usings: Vec<UsingDirective>,
    pub items: Vec<Item>,
    /// `namespace A.B;` rather than `namespace A.B { ... }`
    pub file_scoped: bool,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsingKind {
    /// `using A.B;`
    Namespace,
    /// `using static A.B;`
    Static,
    /// `using X = A.B;`
    Alias,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    pub kind: UsingKind,
    /// Text after `using`/`using static` up to the `;`, trimmed.
    pub text: String,
    pub is_global: bool,
    pub range: TextRange,
}

impl UsingDirective {
    /// For alias directives: `(alias, target)`.
    pub fn alias(&self) -> Option<(&str, &str)> {
        if self.kind != UsingKind::Alias {
            return None;
        }
        let (alias, target) = self.text.split_once('=')?;
        Some((alias.trim(), target.trim()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeAst {
    /// Dotted name as written, e.g. `Gen.GenerateImplementation`.
    pub name: String,
    pub args: Vec<AttributeArg>,
    pub range: TextRange,
}

impl AttributeAst {
    /// Last segment of the attribute name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArg {
    /// `Name = value` or `name: value`.
    pub name: Option<String>,
    pub value: LiteralAst,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceAst {
    pub name: String,
    pub attributes: Vec<AttributeAst>,
    pub bases: Vec<TypeSyntax>,
    pub members: Vec<MemberAst>,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Record,
    Enum,
}

/// A non-interface type declaration; only its name matters.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclAst {
    pub kind: TypeDeclKind,
    pub name: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberAst {
    Property(PropertyAst),
    Indexer(IndexerAst),
    Method(MethodAst),
    Event(EventAst),
}

impl MemberAst {
    pub fn name(&self) -> &str {
        match self {
            MemberAst::Property(p) => &p.name,
            MemberAst::Indexer(_) => "this",
            MemberAst::Method(m) => &m.name,
            MemberAst::Event(e) => &e.name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accessors {
    pub get: bool,
    pub set: bool,
    pub init: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAst {
    pub ty: TypeSyntax,
    pub name: String,
    pub accessors: Accessors,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexerAst {
    pub ty: TypeSyntax,
    pub params: Vec<ParamAst>,
    pub accessors: Accessors,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodAst {
    pub return_type: TypeSyntax,
    pub name: String,
    pub params: Vec<ParamAst>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventAst {
    pub ty: TypeSyntax,
    pub name: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamModifier {
    #[default]
    None,
    Ref,
    Out,
    In,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamAst {
    pub modifier: ParamModifier,
    pub ty: TypeSyntax,
    pub name: String,
    pub default: Option<LiteralAst>,
}

/// A literal as written in a default value or attribute argument.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralAst {
    /// Unescaped contents.
    String(String),
    Char(char),
    Bool(bool),
    /// Numbers, `null`, `default`, enum members: text as written.
    Other(String),
}

/// A type as written.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSyntax {
    pub kind: TypeSyntaxKind,
    pub nullable: bool,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeSyntaxKind {
    /// `global::A.B.Name<Args>`
    Named {
        global: bool,
        segments: Vec<String>,
        args: Vec<TypeSyntax>,
    },
    Array(Box<TypeSyntax>),
}

impl TypeSyntax {
    /// The dotted path of a named type.
    pub fn path(&self) -> Option<String> {
        match &self.kind {
            TypeSyntaxKind::Named { segments, .. } => Some(segments.join(".")),
            TypeSyntaxKind::Array(_) => None,
        }
    }
}

impl std::fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TypeSyntaxKind::Named {
                global,
                segments,
                args,
            } => {
                if *global {
                    f.write_str("global::")?;
                }
                f.write_str(&segments.join("."))?;
                if !args.is_empty() {
                    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                    write!(f, "<{}>", args.join(", "))?;
                }
            }
            TypeSyntaxKind::Array(element) => write!(f, "{element}[]")?,
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
