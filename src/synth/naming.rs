//! Output naming and shape, derived from the marker annotation.

use crate::model::InterfaceDecl;

/// Declaration kind of the generated type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeShape {
    /// Value-semantics `record`.
    #[default]
    Record,
    /// Reference `class` with a generated constructor.
    Class,
}

impl TypeShape {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeShape::Record => "record",
            TypeShape::Class => "class",
        }
    }
}

/// The output shape requested by `decl`'s annotation.
pub fn type_shape(decl: &InterfaceDecl) -> TypeShape {
    match decl.annotation.as_ref().and_then(|a| a.is_record) {
        Some(false) => TypeShape::Class,
        _ => TypeShape::Record,
    }
}

/// The name of the type generated for `decl`, or `None` when no usable
/// name can be derived and the declaration must be skipped.
///
/// An explicit annotation name wins; otherwise a conventional leading `I`
/// is stripped when followed by an uppercase letter (`IProduct` → `Product`).
pub fn implementation_name(decl: &InterfaceDecl) -> Option<String> {
    let name = match decl.annotation.as_ref().and_then(|a| a.name.as_deref()) {
        Some(explicit) => explicit.trim().to_string(),
        None => default_name(&decl.name),
    };
    is_identifier(&name).then_some(name)
}

/// `IProduct` → `Product`; `Item` and `I` are returned unchanged.
pub fn default_name(interface_name: &str) -> String {
    let mut chars = interface_name.chars();
    match (chars.next(), chars.next()) {
        (Some('I'), Some(next)) if next.is_uppercase() => interface_name[1..].to_string(),
        _ => interface_name.to_string(),
    }
}

/// True for a non-empty identifier per Unicode Standard Annex #31.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
