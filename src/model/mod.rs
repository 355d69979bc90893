//! Symbol Model — the declared interfaces the generator works on.
//!
//! Pure data: interfaces, their members and the type references those
//! members mention. Declarations live in an [`InterfaceTable`] arena and are
//! referred to by [`InterfaceId`] / [`MemberId`] handles, so identity is
//! handle equality rather than name equality.
//!
//! ## Key Types
//!
//! - [`InterfaceDecl`] — one interface with its members and direct bases
//! - [`Member`] — property/indexer, method or event
//! - [`TypeRef`] — a resolved reference to a named, generic or array type
//! - [`InterfaceSource`] — read access plus the identity oracle

mod members;
mod table;
mod types;

pub use members::{
    Event, LiteralValue, Member, MemberCategory, Method, Parameter, Property, RefKind,
};
pub use table::{Annotation, InterfaceDecl, InterfaceId, InterfaceTable, MemberId, SiteImport};
pub use types::{ImportStatement, TypeRef};

/// Read access to declared interfaces, plus the type-identity oracle.
///
/// The engine never compares interfaces or members by name. Two handles
/// denote the same declaration when their canonical forms are equal; the
/// default canonical form is the handle itself.
pub trait InterfaceSource {
    /// Look up an interface by handle. `None` for dangling handles.
    fn interface(&self, id: InterfaceId) -> Option<&InterfaceDecl>;

    /// Canonical identity of an interface.
    fn canonical_interface(&self, id: InterfaceId) -> InterfaceId {
        id
    }

    /// Canonical identity of a member.
    fn canonical_member(&self, id: MemberId) -> MemberId {
        id
    }
}

impl InterfaceSource for InterfaceTable {
    fn interface(&self, id: InterfaceId) -> Option<&InterfaceDecl> {
        self.get(id)
    }
}
