//! Name resolution — mapping type names as written to [`TypeRef`]s.
//!
//! A [`TypeIndex`] of every type declared in the workspace is built in a
//! first pass; each interface then resolves its member and base types
//! against a [`Scope`] describing where it was declared.
//!
//! Simple names are tried in this order:
//!
//! 1. Keyword aliases (`string`, `int`, ...)
//! 2. The enclosing namespaces, innermost first, then the global namespace
//! 3. `using X = ...` aliases
//! 4. `using X;` namespaces, in directive order
//! 5. The catalog of well-known runtime types
//!
//! A dotted name whose leading segments name a declared type is a nested
//! type of that declaration. Anything left over is unresolved and kept by
//! its written name.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::constants::CORE_NAMESPACE;
use crate::model::{InterfaceId, TypeRef};
use crate::syntax::ast::{TypeSyntax, TypeSyntaxKind, UsingDirective, UsingKind};

/// Keyword aliases of core runtime types.
const KEYWORD_ALIASES: &[(&str, &str)] = &[
    ("string", "String"),
    ("bool", "Boolean"),
    ("char", "Char"),
    ("byte", "Byte"),
    ("sbyte", "SByte"),
    ("short", "Int16"),
    ("ushort", "UInt16"),
    ("int", "Int32"),
    ("uint", "UInt32"),
    ("long", "Int64"),
    ("ulong", "UInt64"),
    ("float", "Single"),
    ("double", "Double"),
    ("decimal", "Decimal"),
    ("object", "Object"),
    ("void", "Void"),
    ("nint", "IntPtr"),
    ("nuint", "UIntPtr"),
];

/// Runtime types resolvable without a declaration in the workspace.
const WELL_KNOWN_TYPES: &[(&str, &str)] = &[
    ("System", "String"),
    ("System", "Boolean"),
    ("System", "Char"),
    ("System", "Byte"),
    ("System", "SByte"),
    ("System", "Int16"),
    ("System", "UInt16"),
    ("System", "Int32"),
    ("System", "UInt32"),
    ("System", "Int64"),
    ("System", "UInt64"),
    ("System", "Single"),
    ("System", "Double"),
    ("System", "Decimal"),
    ("System", "Object"),
    ("System", "Void"),
    ("System", "IntPtr"),
    ("System", "UIntPtr"),
    ("System", "DateTime"),
    ("System", "DateTimeOffset"),
    ("System", "DateOnly"),
    ("System", "TimeOnly"),
    ("System", "TimeSpan"),
    ("System", "Guid"),
    ("System", "Uri"),
    ("System", "Version"),
    ("System", "Nullable"),
    ("System", "Exception"),
    ("System", "EventHandler"),
    ("System", "EventArgs"),
    ("System", "Action"),
    ("System", "Func"),
    ("System", "Lazy"),
    ("System", "Type"),
    ("System.Collections.Generic", "List"),
    ("System.Collections.Generic", "Dictionary"),
    ("System.Collections.Generic", "HashSet"),
    ("System.Collections.Generic", "IEnumerable"),
    ("System.Collections.Generic", "ICollection"),
    ("System.Collections.Generic", "IList"),
    ("System.Collections.Generic", "IDictionary"),
    ("System.Collections.Generic", "IReadOnlyList"),
    ("System.Collections.Generic", "IReadOnlyCollection"),
    ("System.Collections.Generic", "IReadOnlyDictionary"),
    ("System.Collections.Generic", "KeyValuePair"),
    ("System.Threading", "CancellationToken"),
    ("System.Threading.Tasks", "Task"),
    ("System.Threading.Tasks", "ValueTask"),
    ("System.IO", "Stream"),
];

/// What a declared type name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTarget {
    Interface(InterfaceId),
    /// A class, struct, record or enum.
    Other,
}

/// Every type declared in the workspace, by qualified name.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    types: FxHashMap<String, TypeTarget>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type. The first registration of a name wins.
    pub fn insert(&mut self, qualified_name: String, target: TypeTarget) {
        self.types.entry(qualified_name).or_insert(target);
    }

    pub fn get(&self, qualified_name: &str) -> Option<TypeTarget> {
        self.types.get(qualified_name).copied()
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Where a declaration lives: its namespace and the directives in scope.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    /// `A.B.C`, or `None` at file scope.
    namespace: Option<String>,
    /// Namespaces of `using X;` directives, in order.
    usings: Vec<String>,
    /// `using Alias = Target;`
    aliases: FxHashMap<String, String>,
}

impl Scope {
    pub fn new<'u>(
        namespace: Option<String>,
        directives: impl IntoIterator<Item = &'u UsingDirective>,
    ) -> Self {
        let mut scope = Self {
            namespace,
            ..Self::default()
        };
        for directive in directives {
            match directive.kind {
                UsingKind::Namespace => {
                    if !scope.usings.contains(&directive.text) {
                        scope.usings.push(directive.text.clone());
                    }
                }
                UsingKind::Alias => {
                    if let Some((alias, target)) = directive.alias() {
                        scope
                            .aliases
                            .entry(alias.to_string())
                            .or_insert_with(|| target.trim_start_matches("global::").to_string());
                    }
                }
                UsingKind::Static => {}
            }
        }
        scope
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Enclosing namespaces, innermost first: `A.B.C`, `A.B`, `A`.
    fn namespace_chain(&self) -> impl Iterator<Item = &str> {
        let mut next = self.namespace.as_deref();
        std::iter::from_fn(move || {
            let current = next?;
            next = current.rsplit_once('.').map(|(parent, _)| parent);
            Some(current)
        })
    }
}

/// Resolves written type names in one scope.
pub struct Resolver<'a> {
    index: &'a TypeIndex,
    scope: &'a Scope,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a TypeIndex, scope: &'a Scope) -> Self {
        Self { index, scope }
    }

    /// Resolve a type as written to a [`TypeRef`]. Never fails: names
    /// that do not resolve are kept unqualified.
    pub fn resolve_type(&self, syntax: &TypeSyntax) -> TypeRef {
        let mut ty = match &syntax.kind {
            TypeSyntaxKind::Array(element) => TypeRef::array(self.resolve_type(element)),
            TypeSyntaxKind::Named {
                global,
                segments,
                args,
            } => {
                let path = segments
                    .iter()
                    .map(|s| s.trim_start_matches('@'))
                    .collect::<Vec<_>>()
                    .join(".");
                let (namespace, name) = self.resolve_path(&path, *global);
                TypeRef::named(namespace.as_deref(), name)
                    .with_args(args.iter().map(|arg| self.resolve_type(arg)))
            }
        };
        ty.nullable = syntax.nullable;
        ty
    }

    /// Resolve a base type to a declared interface. Returns the written
    /// name on failure.
    pub fn resolve_interface(&self, syntax: &TypeSyntax) -> Result<InterfaceId, SmolStr> {
        let unresolved = || SmolStr::new(syntax.to_string());
        let TypeSyntaxKind::Named {
            global, segments, ..
        } = &syntax.kind
        else {
            return Err(unresolved());
        };
        let path = segments
            .iter()
            .map(|s| s.trim_start_matches('@'))
            .collect::<Vec<_>>()
            .join(".");
        match self.lookup_declared(&path, *global) {
            Some((_, TypeTarget::Interface(id))) => Ok(id),
            _ => Err(unresolved()),
        }
    }

    /// `(namespace, name)` for a dotted path.
    fn resolve_path(&self, path: &str, global: bool) -> (Option<SmolStr>, SmolStr) {
        if !global
            && !path.contains('.')
            && let Some((_, core)) = KEYWORD_ALIASES.iter().find(|(kw, _)| *kw == path)
        {
            return (Some(SmolStr::new(CORE_NAMESPACE)), SmolStr::new(core));
        }

        if let Some((qualified, _)) = self.lookup_declared(path, global) {
            return split_qualified(&qualified);
        }

        if !global
            && let Some(target) = self.expand_alias(path)
        {
            return split_qualified(&target);
        }

        if !global
            && !path.contains('.')
            && let Some((ns, name)) = WELL_KNOWN_TYPES.iter().find(|(_, name)| *name == path)
        {
            return (Some(SmolStr::new(ns)), SmolStr::new(name));
        }

        if let Some(nested) = self.resolve_nested(path, global) {
            return nested;
        }

        if path.contains('.') {
            // Assume an external type written with its namespace
            return split_qualified(path);
        }

        tracing::trace!(name = %path, "unresolved type name");
        (None, SmolStr::new(path))
    }

    /// `Outer.Inner` where the longest proper prefix names a declared type:
    /// the namespace stays that of the declaring type and the rest of the
    /// path joins its name.
    fn resolve_nested(&self, path: &str, global: bool) -> Option<(Option<SmolStr>, SmolStr)> {
        let mut split = path.len();
        while let Some(dot) = path[..split].rfind('.') {
            split = dot;
            let (prefix, rest) = (&path[..dot], &path[dot + 1..]);
            if let Some((qualified, _)) = self.lookup_declared(prefix, global) {
                let (namespace, outer) = split_qualified(&qualified);
                return Some((namespace, SmolStr::new(format!("{outer}.{rest}"))));
            }
        }
        None
    }

    /// Find a workspace declaration for `path`, returning its qualified name.
    fn lookup_declared(&self, path: &str, global: bool) -> Option<(String, TypeTarget)> {
        let found = |qualified: String| {
            self.index
                .get(&qualified)
                .map(|target| (qualified, target))
        };

        if global {
            return found(path.to_string());
        }

        for namespace in self.scope.namespace_chain() {
            if let Some(hit) = found(format!("{namespace}.{path}")) {
                return Some(hit);
            }
        }
        if let Some(hit) = found(path.to_string()) {
            return Some(hit);
        }
        if let Some(target) = self.expand_alias(path)
            && let Some(hit) = found(target)
        {
            return Some(hit);
        }
        self.scope
            .usings
            .iter()
            .find_map(|using| found(format!("{using}.{path}")))
    }

    /// Replace a leading alias segment with its target.
    fn expand_alias(&self, path: &str) -> Option<String> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let target = self.scope.aliases.get(head)?;
        Some(match rest {
            Some(rest) => format!("{target}.{rest}"),
            None => target.clone(),
        })
    }
}

fn split_qualified(qualified: &str) -> (Option<SmolStr>, SmolStr) {
    match qualified.rsplit_once('.') {
        Some((namespace, name)) => (Some(SmolStr::new(namespace)), SmolStr::new(name)),
        None => (None, SmolStr::new(qualified)),
    }
}
