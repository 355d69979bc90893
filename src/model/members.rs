use smol_str::SmolStr;

use super::types::TypeRef;

/// A member declared directly on an interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property(Property),
    Method(Method),
    Event(Event),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Property(p) => &p.name,
            Member::Method(m) => &m.name,
            Member::Event(e) => &e.name,
        }
    }

    pub fn category(&self) -> MemberCategory {
        match self {
            Member::Property(p) if p.is_indexer => MemberCategory::Indexer,
            Member::Property(_) => MemberCategory::Property,
            Member::Method(_) => MemberCategory::Method,
            Member::Event(_) => MemberCategory::Event,
        }
    }

    /// Every type mentioned by this member's signature, outermost only.
    pub fn mentioned_types(&self) -> Vec<&TypeRef> {
        match self {
            Member::Property(p) => std::iter::once(&p.ty)
                .chain(p.parameters.iter().map(|param| &param.ty))
                .collect(),
            Member::Method(m) => std::iter::once(&m.return_type)
                .chain(m.parameters.iter().map(|param| &param.ty))
                .collect(),
            Member::Event(e) => vec![&e.ty],
        }
    }
}

/// The buckets the flattener collects members into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberCategory {
    /// Data properties (not indexers).
    Property,
    /// Indexer-shaped properties (`this[...]`).
    Indexer,
    /// Ordinary methods.
    Method,
    Event,
}

impl MemberCategory {
    pub fn matches(self, member: &Member) -> bool {
        member.category() == self
    }
}

/// A property or indexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub is_indexer: bool,
    pub has_getter: bool,
    pub has_setter: bool,
    /// The setter is `init` rather than `set`.
    pub init_only: bool,
    /// Indexer parameters; empty for data properties.
    pub parameters: Vec<Parameter>,
}

impl Property {
    /// A `{ get; set; }` data property.
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_indexer: false,
            has_getter: true,
            has_setter: true,
            init_only: false,
            parameters: Vec::new(),
        }
    }

    /// An indexer `this[...]`.
    pub fn indexer(ty: TypeRef, parameters: Vec<Parameter>) -> Self {
        Self {
            name: SmolStr::new_static("this"),
            ty,
            is_indexer: true,
            has_getter: true,
            has_setter: true,
            init_only: false,
            parameters,
        }
    }

    pub fn with_accessors(mut self, has_getter: bool, has_setter: bool) -> Self {
        self.has_getter = has_getter;
        self.has_setter = has_setter;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: SmolStr,
    pub return_type: TypeRef,
    pub parameters: Vec<Parameter>,
}

impl Method {
    pub fn new(name: impl Into<SmolStr>, return_type: TypeRef, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: SmolStr,
    pub ty: TypeRef,
}

impl Event {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: TypeRef,
    pub name: SmolStr,
    pub ref_kind: RefKind,
    pub default: Option<LiteralValue>,
}

impl Parameter {
    pub fn new(ty: TypeRef, name: impl Into<SmolStr>) -> Self {
        Self {
            ty,
            name: name.into(),
            ref_kind: RefKind::None,
            default: None,
        }
    }

    pub fn with_ref_kind(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    pub fn with_default(mut self, default: LiteralValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// How a parameter is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
}

impl RefKind {
    /// The modifier keyword, if any.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            RefKind::None => None,
            RefKind::Ref => Some("ref"),
            RefKind::Out => Some("out"),
            RefKind::In => Some("in"),
        }
    }
}

/// A literal default value of an optional parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Char(char),
    Bool(bool),
    /// Numbers, `null`, `default`: kept as written.
    Other(SmolStr),
}
