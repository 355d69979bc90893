use indexmap::IndexMap;
use smol_str::SmolStr;

use super::members::Member;
use super::types::ImportStatement;
use crate::base::{FileId, Span};

/// Handle of an interface in an [`InterfaceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterfaceId(pub u32);

impl InterfaceId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of a declared member: the declaring interface plus the
/// member's position in that interface's member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId {
    pub interface: InterfaceId,
    pub index: u32,
}

impl MemberId {
    pub fn new(interface: InterfaceId, index: usize) -> Self {
        Self {
            interface,
            index: index as u32,
        }
    }
}

/// A `using` directive written next to an interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteImport {
    pub statement: ImportStatement,
    /// `using static ...`
    pub is_static: bool,
}

impl SiteImport {
    pub fn namespace(text: impl Into<SmolStr>) -> Self {
        Self {
            statement: ImportStatement::new(text),
            is_static: false,
        }
    }

    pub fn static_import(text: impl Into<SmolStr>) -> Self {
        Self {
            statement: ImportStatement::new(text),
            is_static: true,
        }
    }
}

/// Arguments of the marker attribute. Absent arguments take defaults
/// when the output is named and shaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Explicit output type name.
    pub name: Option<String>,
    /// `true` for a record, `false` for a class with a constructor.
    pub is_record: Option<bool>,
}

/// A declared interface-like type.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub id: InterfaceId,
    pub name: SmolStr,
    pub namespace: Option<SmolStr>,
    /// Members declared directly on this interface, in source order.
    pub members: Vec<Member>,
    /// Direct bases, in declaration order.
    pub bases: Vec<InterfaceId>,
    /// Base names that did not resolve to a known interface.
    pub unresolved_bases: Vec<SmolStr>,
    /// `using` directives of every file declaring this interface.
    pub site_imports: Vec<SiteImport>,
    pub annotation: Option<Annotation>,
    pub file: Option<FileId>,
    pub span: Option<Span>,
}

impl InterfaceDecl {
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.to_string(),
        }
    }

    pub fn member(&self, index: u32) -> Option<&Member> {
        self.members.get(index as usize)
    }
}

/// Arena of interfaces, indexed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct InterfaceTable {
    interfaces: Vec<InterfaceDecl>,
    /// Qualified name -> handle (IndexMap preserves insertion order).
    by_qualified_name: IndexMap<String, InterfaceId>,
}

impl InterfaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interface with no members or bases and return its handle.
    /// An interface with the same qualified name is returned unchanged.
    pub fn declare(&mut self, namespace: Option<&str>, name: &str) -> InterfaceId {
        let qualified = match namespace {
            Some(ns) => format!("{ns}.{name}"),
            None => name.to_string(),
        };
        if let Some(&id) = self.by_qualified_name.get(&qualified) {
            return id;
        }
        let id = InterfaceId::new(self.interfaces.len());
        self.interfaces.push(InterfaceDecl {
            id,
            name: SmolStr::new(name),
            namespace: namespace.map(SmolStr::new),
            members: Vec::new(),
            bases: Vec::new(),
            unresolved_bases: Vec::new(),
            site_imports: Vec::new(),
            annotation: None,
            file: None,
            span: None,
        });
        self.by_qualified_name.insert(qualified, id);
        id
    }

    pub fn get(&self, id: InterfaceId) -> Option<&InterfaceDecl> {
        self.interfaces.get(id.index())
    }

    pub fn get_mut(&mut self, id: InterfaceId) -> Option<&mut InterfaceDecl> {
        self.interfaces.get_mut(id.index())
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<InterfaceId> {
        self.by_qualified_name.get(qualified_name).copied()
    }

    pub fn add_member(&mut self, id: InterfaceId, member: Member) -> Option<MemberId> {
        let decl = self.get_mut(id)?;
        decl.members.push(member);
        Some(MemberId::new(id, decl.members.len() - 1))
    }

    pub fn add_base(&mut self, id: InterfaceId, base: InterfaceId) {
        if let Some(decl) = self.get_mut(id) {
            decl.bases.push(base);
        }
    }

    pub fn annotate(&mut self, id: InterfaceId, annotation: Annotation) {
        if let Some(decl) = self.get_mut(id) {
            decl.annotation = Some(annotation);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterfaceDecl> {
        self.interfaces.iter()
    }

    /// Interfaces carrying the marker attribute, in declaration order.
    pub fn annotated(&self) -> impl Iterator<Item = InterfaceId> + '_ {
        self.interfaces
            .iter()
            .filter(|decl| decl.annotation.is_some())
            .map(|decl| decl.id)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}
