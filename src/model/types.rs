use std::fmt;

use smol_str::SmolStr;

use crate::base::constants::CORE_NAMESPACE;

/// A reference to a named type as seen by a member signature.
///
/// Arrays carry their element in `element` and have an empty `name`;
/// generic instantiations carry their arguments in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: SmolStr,
    pub namespace: Option<SmolStr>,
    pub nullable: bool,
    pub type_args: Vec<TypeRef>,
    pub element: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// A non-generic named type.
    pub fn named(namespace: Option<&str>, name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.map(SmolStr::new),
            nullable: false,
            type_args: Vec::new(),
            element: None,
        }
    }

    /// A type from the core runtime namespace (`System.String`, ...).
    pub fn core(name: &str) -> Self {
        Self::named(Some(CORE_NAMESPACE), name)
    }

    /// A single-dimension array of `element`.
    pub fn array(element: TypeRef) -> Self {
        Self {
            name: SmolStr::default(),
            namespace: None,
            nullable: false,
            type_args: Vec::new(),
            element: Some(Box::new(element)),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = TypeRef>) -> Self {
        self.type_args = args.into_iter().collect();
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn is_array(&self) -> bool {
        self.element.is_some()
    }

    pub fn is_generic(&self) -> bool {
        !self.type_args.is_empty()
    }

    /// True for `T?` and for the `System.Nullable<T>` wrapper.
    pub fn is_nullable(&self) -> bool {
        self.nullable
            || (self.namespace.as_deref() == Some(CORE_NAMESPACE)
                && self.name == "Nullable"
                && self.type_args.len() == 1)
    }

    /// `Namespace.Name`, or just `Name` when there is no namespace.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.to_string(),
        }
    }
}

/// Short, unqualified display used in diagnostics and logs.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            write!(f, "{element}[]")?;
        } else {
            f.write_str(&self.name)?;
            if let Some((first, rest)) = self.type_args.split_first() {
                write!(f, "<{first}")?;
                for arg in rest {
                    write!(f, ", {arg}")?;
                }
                f.write_str(">")?;
            }
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// The body of a `using` directive: a namespace (`System.Linq`) or an alias
/// (`Json = Newtonsoft.Json`). Ordered lexicographically by text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportStatement(SmolStr);

impl ImportStatement {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "using {};", self.0)
    }
}
