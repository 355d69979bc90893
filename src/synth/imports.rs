//! Reference resolution — the `using` directives a generated type needs.

use std::collections::BTreeSet;

use super::flatten::flatten_all;
use super::options::SynthesisOptions;
use crate::model::{ImportStatement, InterfaceId, InterfaceSource, TypeRef};

/// Deduplicated, lexicographically sorted import statements.
pub type ImportSet = BTreeSet<ImportStatement>;

/// Compute the imports for the implementation of `root`.
///
/// 1. Non-static `using` directives written next to the root declaration,
///    carried over verbatim.
/// 2. The namespace of every type mentioned by any member anywhere in the
///    hierarchy, descending into generic arguments and array elements.
///
/// Core namespaces and types without a namespace contribute nothing.
pub fn resolve_imports<S>(source: &S, root: InterfaceId, options: &SynthesisOptions) -> ImportSet
where
    S: InterfaceSource + ?Sized,
{
    let mut imports = ImportSet::new();
    let Some(decl) = source.interface(root) else {
        return imports;
    };

    imports.extend(
        decl.site_imports
            .iter()
            .filter(|site| !site.is_static)
            .map(|site| site.statement.clone()),
    );

    for flat in flatten_all(source, root).iter() {
        for ty in flat.member.mentioned_types() {
            collect_type_imports(ty, options, &mut imports);
        }
    }

    imports
}

/// Imports needed to name `ty`, including its nested arguments.
pub fn type_imports(ty: &TypeRef, options: &SynthesisOptions) -> ImportSet {
    let mut imports = ImportSet::new();
    collect_type_imports(ty, options, &mut imports);
    imports
}

fn collect_type_imports(ty: &TypeRef, options: &SynthesisOptions, imports: &mut ImportSet) {
    if let Some(element) = &ty.element {
        collect_type_imports(element, options, imports);
    }
    if let Some(namespace) = &ty.namespace
        && !options.is_core_namespace(namespace)
    {
        imports.insert(ImportStatement::new(namespace.clone()));
    }
    for arg in &ty.type_args {
        collect_type_imports(arg, options, imports);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Event, InterfaceTable, Member, Method, Parameter, Property, SiteImport,
    };

    const GENERIC: &str = "System.Collections.Generic";

    fn texts(imports: &ImportSet) -> Vec<&str> {
        imports.iter().map(ImportStatement::as_str).collect()
    }

    #[test]
    fn test_generic_argument_namespaces_are_closed_over() {
        let ty = TypeRef::named(Some(GENERIC), "List").with_args([TypeRef::named(Some("Shop.Tags"), "Tag")]);
        let imports = type_imports(&ty, &SynthesisOptions::default());
        assert_eq!(texts(&imports), vec!["Shop.Tags", GENERIC]);
    }

    #[test]
    fn test_builtin_element_contributes_nothing() {
        let ty = TypeRef::named(Some(GENERIC), "List").with_args([TypeRef::core("Int32")]);
        let imports = type_imports(&ty, &SynthesisOptions::default());
        assert_eq!(texts(&imports), vec![GENERIC]);
    }

    #[test]
    fn test_array_element_and_nested_args() {
        let inner = TypeRef::named(Some("Shop.Money"), "Price");
        let ty = TypeRef::array(
            TypeRef::named(Some(GENERIC), "KeyValuePair")
                .with_args([TypeRef::named(None, "Unresolved"), inner]),
        );
        let imports = type_imports(&ty, &SynthesisOptions::default());
        assert_eq!(texts(&imports), vec!["Shop.Money", GENERIC]);
    }

    #[test]
    fn test_resolve_covers_whole_hierarchy_and_site_imports() {
        let mut table = InterfaceTable::new();
        let base = table.declare(Some("Shop.Core"), "IEntity");
        let root = table.declare(Some("Shop"), "IProduct");
        table.add_base(root, base);
        table.add_member(
            base,
            Member::Property(Property::new("Id", TypeRef::core("Guid"))),
        );
        table.add_member(
            base,
            Member::Event(Event::new(
                "Changed",
                TypeRef::named(Some("Shop.Events"), "ChangedHandler"),
            )),
        );
        table.add_member(
            root,
            Member::Method(Method::new(
                "SaveAsync",
                TypeRef::named(Some("System.Threading.Tasks"), "Task"),
                vec![Parameter::new(
                    TypeRef::named(Some("System.Threading"), "CancellationToken"),
                    "token",
                )],
            )),
        );
        table.add_member(
            root,
            Member::Property(Property::indexer(
                TypeRef::core("String"),
                vec![Parameter::new(TypeRef::named(Some("Shop.Keys"), "Sku"), "sku")],
            )),
        );
        if let Some(decl) = table.get_mut(root) {
            decl.site_imports.push(SiteImport::namespace("System.Linq"));
            decl.site_imports.push(SiteImport::namespace("Json = Newtonsoft.Json"));
            decl.site_imports.push(SiteImport::static_import("System.Math"));
        }

        let imports = resolve_imports(&table, root, &SynthesisOptions::default());
        assert_eq!(
            texts(&imports),
            vec![
                "Json = Newtonsoft.Json",
                "Shop.Events",
                "Shop.Keys",
                "System.Linq",
                "System.Threading",
                "System.Threading.Tasks",
            ]
        );
    }

    #[test]
    fn test_custom_core_namespaces() {
        let options = SynthesisOptions {
            core_namespaces: vec!["System".into(), GENERIC.into()],
            ..SynthesisOptions::default()
        };
        let ty = TypeRef::named(Some(GENERIC), "List").with_args([TypeRef::named(Some("Shop"), "Tag")]);
        assert_eq!(texts(&type_imports(&ty, &options)), vec!["Shop"]);
    }

    #[test]
    fn test_unknown_root_yields_empty_set() {
        let table = InterfaceTable::new();
        assert!(resolve_imports(&table, InterfaceId(3), &SynthesisOptions::default()).is_empty());
    }
}
