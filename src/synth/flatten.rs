//! Graph flattening — the union of members visible through an interface
//! hierarchy.
//!
//! The walk is a depth-first pre-order over the base-type graph: the root
//! first, then each base's closure in declaration order. A visited-set of
//! canonical interface identities makes every interface contribute once,
//! which covers diamond shapes and terminates on malformed cycles.
//! Members are deduplicated by canonical member identity, first seen wins.
//! Same-named members from unrelated interfaces are distinct and both kept.

use rustc_hash::FxHashSet;

use crate::model::{InterfaceDecl, InterfaceId, InterfaceSource, Member, MemberCategory, MemberId};

/// A member reached through the hierarchy, with its declaring interface.
#[derive(Debug, Clone, Copy)]
pub struct FlatMember<'a> {
    pub id: MemberId,
    pub owner: &'a InterfaceDecl,
    pub member: &'a Member,
}

/// All members of a hierarchy, split by category.
#[derive(Debug, Clone, Default)]
pub struct FlattenedMembers<'a> {
    pub properties: Vec<FlatMember<'a>>,
    pub indexers: Vec<FlatMember<'a>>,
    pub methods: Vec<FlatMember<'a>>,
    pub events: Vec<FlatMember<'a>>,
}

impl<'a> FlattenedMembers<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &FlatMember<'a>> {
        self.properties
            .iter()
            .chain(&self.indexers)
            .chain(&self.methods)
            .chain(&self.events)
    }

    pub fn len(&self) -> usize {
        self.properties.len() + self.indexers.len() + self.methods.len() + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interfaces of the hierarchy rooted at `root`, each exactly once, in
/// visitation order. Dangling base handles are skipped.
pub fn hierarchy<S>(source: &S, root: InterfaceId) -> Vec<&InterfaceDecl>
where
    S: InterfaceSource + ?Sized,
{
    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        if !visited.insert(source.canonical_interface(id)) {
            continue;
        }
        let Some(decl) = source.interface(id) else {
            tracing::debug!(interface = id.0, "skipping dangling interface handle");
            continue;
        };
        tracing::trace!(interface = %decl.name, depth = stack.len(), "flatten visit");
        order.push(decl);
        // Reversed so the first declared base is popped first
        stack.extend(decl.bases.iter().rev().copied());
    }

    order
}

/// Members of one category across the hierarchy of `root`.
pub fn flatten<S>(source: &S, root: InterfaceId, category: MemberCategory) -> Vec<FlatMember<'_>>
where
    S: InterfaceSource + ?Sized,
{
    let mut seen = FxHashSet::default();
    let mut result = Vec::new();
    for decl in hierarchy(source, root) {
        collect_declared(source, decl, category, &mut seen, &mut result);
    }
    result
}

/// Members of every category across the hierarchy of `root`.
///
/// Equivalent to calling [`flatten`] once per category.
pub fn flatten_all<S>(source: &S, root: InterfaceId) -> FlattenedMembers<'_>
where
    S: InterfaceSource + ?Sized,
{
    let order = hierarchy(source, root);
    let mut seen = FxHashSet::default();
    let mut flattened = FlattenedMembers::default();

    for (category, bucket) in [
        (MemberCategory::Property, &mut flattened.properties),
        (MemberCategory::Indexer, &mut flattened.indexers),
        (MemberCategory::Method, &mut flattened.methods),
        (MemberCategory::Event, &mut flattened.events),
    ] {
        for &decl in &order {
            collect_declared(source, decl, category, &mut seen, bucket);
        }
    }

    flattened
}

fn collect_declared<'a, S>(
    source: &S,
    decl: &'a InterfaceDecl,
    category: MemberCategory,
    seen: &mut FxHashSet<MemberId>,
    out: &mut Vec<FlatMember<'a>>,
) where
    S: InterfaceSource + ?Sized,
{
    for (index, member) in decl.members.iter().enumerate() {
        if !category.matches(member) {
            continue;
        }
        let id = MemberId::new(decl.id, index);
        if seen.insert(source.canonical_member(id)) {
            out.push(FlatMember {
                id,
                owner: decl,
                member,
            });
        }
    }
}
