//! Lowering — parsed files to the [`InterfaceTable`].
//!
//! Runs in two passes so that declaration order across files does not
//! matter: the first pass registers every type name, the second resolves
//! bases and member signatures. Partial interfaces declared in several
//! places merge into one entry.

use smol_str::SmolStr;

use super::resolve::{Resolver, Scope, TypeIndex, TypeTarget};
use crate::base::constants::{
    MARKER_ATTRIBUTE, MARKER_ATTRIBUTE_FULL, MARKER_NAME_ARGUMENT, MARKER_RECORD_ARGUMENT,
};
use crate::base::{FileId, LineIndex};
use crate::model::{
    Annotation, Event, InterfaceTable, LiteralValue, Member, Method, Parameter, Property,
    RefKind, SiteImport,
};
use crate::syntax::ast::{
    AttributeAst, LiteralAst, MemberAst, ParamAst, ParamModifier, SourceFile, UsingDirective,
    UsingKind,
};

/// One parsed file handed to [`lower`].
#[derive(Debug, Clone, Copy)]
pub struct LowerInput<'a> {
    pub file: FileId,
    pub source: &'a SourceFile,
    /// Used to attach line/column spans; spans are omitted without it.
    pub line_index: Option<&'a LineIndex>,
}

/// Build the interface table for a set of parsed files.
pub fn lower(inputs: &[LowerInput<'_>]) -> InterfaceTable {
    let mut table = InterfaceTable::new();
    let mut index = TypeIndex::new();

    // Pass 1: declare every type.
    for input in inputs {
        for scoped in input.source.interfaces() {
            let namespace = scoped.namespace_name();
            let id = table.declare(namespace.as_deref(), &scoped.item.name);
            index.insert(qualify(namespace.as_deref(), &scoped.item.name), TypeTarget::Interface(id));
        }
        for scoped in input.source.type_decls() {
            let namespace = scoped.namespace_name();
            index.insert(qualify(namespace.as_deref(), &scoped.item.name), TypeTarget::Other);
        }
    }

    let global_usings: Vec<&UsingDirective> = inputs
        .iter()
        .flat_map(|input| input.source.global_usings())
        .collect();

    // Pass 2: bases, members, annotations.
    for input in inputs {
        for scoped in input.source.interfaces() {
            let interface = scoped.item;
            let namespace = scoped.namespace_name();
            let qualified = qualify(namespace.as_deref(), &interface.name);
            let Some(id) = table.lookup(&qualified) else {
                continue;
            };

            let scope = Scope::new(
                namespace,
                scoped.usings.iter().copied().chain(global_usings.iter().copied()),
            );
            let resolver = Resolver::new(&index, &scope);

            let mut bases = Vec::new();
            let mut unresolved = Vec::new();
            for base in &interface.bases {
                match resolver.resolve_interface(base) {
                    Ok(base_id) => bases.push(base_id),
                    Err(name) => {
                        tracing::debug!(
                            interface = %qualified,
                            base = %name,
                            "base type does not resolve to a known interface"
                        );
                        unresolved.push(name);
                    }
                }
            }

            let members: Vec<Member> = interface
                .members
                .iter()
                .map(|member| lower_member(&resolver, member))
                .collect();

            let site_imports: Vec<SiteImport> = scoped
                .usings
                .iter()
                .filter(|using| !using.is_global)
                .map(|using| site_import(using))
                .collect();

            let annotation = marker_annotation(&interface.attributes);
            let span = input.line_index.map(|index| index.span(interface.range));

            let Some(decl) = table.get_mut(id) else {
                continue;
            };
            for base in bases {
                if !decl.bases.contains(&base) {
                    decl.bases.push(base);
                }
            }
            for name in unresolved {
                if !decl.unresolved_bases.contains(&name) {
                    decl.unresolved_bases.push(name);
                }
            }
            decl.members.extend(members);
            for import in site_imports {
                if !decl.site_imports.contains(&import) {
                    decl.site_imports.push(import);
                }
            }
            if decl.annotation.is_none() {
                decl.annotation = annotation;
            }
            if decl.file.is_none() {
                decl.file = Some(input.file);
                decl.span = span;
            }
        }
    }

    tracing::debug!(
        files = inputs.len(),
        interfaces = table.len(),
        annotated = table.annotated().count(),
        "lowered declarations"
    );
    table
}

fn qualify(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) => format!("{ns}.{name}"),
        None => name.to_string(),
    }
}

fn site_import(using: &UsingDirective) -> SiteImport {
    match using.kind {
        UsingKind::Static => SiteImport::static_import(using.text.as_str()),
        UsingKind::Namespace | UsingKind::Alias => SiteImport::namespace(using.text.as_str()),
    }
}

/// Read the marker attribute, if present.
///
/// A leading positional string is the output name; a positional boolean is
/// the record flag. Named `Name`/`IsRecord` arguments set the same fields.
fn marker_annotation(attributes: &[AttributeAst]) -> Option<Annotation> {
    let marker = attributes
        .iter()
        .find(|attr| matches!(attr.simple_name(), MARKER_ATTRIBUTE | MARKER_ATTRIBUTE_FULL))?;

    let mut annotation = Annotation::default();
    for (position, arg) in marker.args.iter().enumerate() {
        match (arg.name.as_deref(), &arg.value) {
            (Some(MARKER_NAME_ARGUMENT), LiteralAst::String(name)) => {
                annotation.name = Some(name.clone());
            }
            (None, LiteralAst::String(name)) if position == 0 => {
                annotation.name = Some(name.clone());
            }
            (Some(MARKER_RECORD_ARGUMENT) | None, LiteralAst::Bool(is_record)) => {
                annotation.is_record = Some(*is_record);
            }
            (name, value) => {
                tracing::debug!(argument = ?name, ?value, "ignoring marker argument");
            }
        }
    }
    Some(annotation)
}

fn lower_member(resolver: &Resolver<'_>, member: &MemberAst) -> Member {
    match member {
        MemberAst::Property(property) => {
            let accessors = property.accessors;
            let mut lowered = Property::new(property.name.as_str(), resolver.resolve_type(&property.ty))
                .with_accessors(accessors.get, accessors.set || accessors.init);
            lowered.init_only = accessors.init && !accessors.set;
            Member::Property(lowered)
        }
        MemberAst::Indexer(indexer) => {
            let accessors = indexer.accessors;
            let params = lower_params(resolver, &indexer.params);
            let mut lowered = Property::indexer(resolver.resolve_type(&indexer.ty), params)
                .with_accessors(accessors.get, accessors.set || accessors.init);
            lowered.init_only = accessors.init && !accessors.set;
            Member::Property(lowered)
        }
        MemberAst::Method(method) => Member::Method(Method::new(
            method.name.as_str(),
            resolver.resolve_type(&method.return_type),
            lower_params(resolver, &method.params),
        )),
        MemberAst::Event(event) => {
            Member::Event(Event::new(event.name.as_str(), resolver.resolve_type(&event.ty)))
        }
    }
}

fn lower_params(resolver: &Resolver<'_>, params: &[ParamAst]) -> Vec<Parameter> {
    params
        .iter()
        .map(|param| {
            let ref_kind = match param.modifier {
                ParamModifier::None => RefKind::None,
                ParamModifier::Ref => RefKind::Ref,
                ParamModifier::Out => RefKind::Out,
                ParamModifier::In => RefKind::In,
            };
            let mut lowered = Parameter::new(resolver.resolve_type(&param.ty), param.name.as_str())
                .with_ref_kind(ref_kind);
            if let Some(default) = &param.default {
                lowered = lowered.with_default(literal_value(default));
            }
            lowered
        })
        .collect()
}

fn literal_value(literal: &LiteralAst) -> LiteralValue {
    match literal {
        LiteralAst::String(s) => LiteralValue::String(s.clone()),
        LiteralAst::Char(c) => LiteralValue::Char(*c),
        LiteralAst::Bool(b) => LiteralValue::Bool(*b),
        LiteralAst::Other(text) => LiteralValue::Other(SmolStr::new(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InterfaceDecl, TypeRef};
    use crate::parser::parse;

    fn lower_sources(sources: &[&str]) -> InterfaceTable {
        let files: Vec<(SourceFile, LineIndex)> = sources
            .iter()
            .map(|text| {
                let parse = parse(text);
                assert!(parse.ok(), "{:?}", parse.errors);
                (parse.file, LineIndex::new(text))
            })
            .collect();
        let inputs: Vec<LowerInput<'_>> = files
            .iter()
            .enumerate()
            .map(|(i, (source, line_index))| LowerInput {
                file: FileId::new(i),
                source,
                line_index: Some(line_index),
            })
            .collect();
        lower(&inputs)
    }

    fn decl<'t>(table: &'t InterfaceTable, qualified: &str) -> &'t InterfaceDecl {
        table
            .lookup(qualified)
            .and_then(|id| table.get(id))
            .unwrap_or_else(|| panic!("{qualified} not declared"))
    }

    #[test]
    fn test_bases_resolve_across_files_regardless_of_order() {
        let table = lower_sources(&[
            "namespace Shop; interface IProduct : IEntity, Audit.IAuditable { }",
            "namespace Shop; interface IEntity { int Id { get; } }",
            "namespace Shop.Audit { interface IAuditable { } }",
        ]);
        let product = decl(&table, "Shop.IProduct");
        let bases: Vec<_> = product
            .bases
            .iter()
            .filter_map(|id| table.get(*id))
            .map(InterfaceDecl::qualified_name)
            .collect();
        assert_eq!(bases, vec!["Shop.IEntity", "Shop.Audit.IAuditable"]);
        assert!(product.unresolved_bases.is_empty());
    }

    #[test]
    fn test_unresolved_base_is_recorded() {
        let table = lower_sources(&["interface IThing : IDisposable, IMissing { }"]);
        let thing = decl(&table, "IThing");
        assert!(thing.bases.is_empty());
        assert_eq!(thing.unresolved_bases, vec![SmolStr::new("IDisposable"), SmolStr::new("IMissing")]);
    }

    #[test]
    fn test_partial_interfaces_merge() {
        let table = lower_sources(&[
            "using Alpha;\nnamespace N { [GenerateImplementation] partial interface IPart { int A { get; } } }",
            "using Beta;\nusing Alpha;\nnamespace N { [GenerateImplementation(\"Other\")] partial interface IPart { int B { get; } } }",
        ]);
        assert_eq!(table.len(), 1);
        let part = decl(&table, "N.IPart");
        let names: Vec<_> = part.members.iter().map(Member::name).collect();
        assert_eq!(names, vec!["A", "B"]);
        let imports: Vec<_> = part.site_imports.iter().map(|s| s.statement.as_str()).collect();
        assert_eq!(imports, vec!["Alpha", "Beta"]);
        assert_eq!(part.annotation, Some(Annotation::default()));
        assert_eq!(part.file, Some(FileId::new(0)));
    }

    #[test]
    fn test_marker_arguments() {
        let table = lower_sources(&[
            r#"
            [GenerateImplementation("Widget", false)] interface IA { }
            [Gen.GenerateImplementationAttribute(Name = "Gadget", IsRecord = true)] interface IB { }
            [Obsolete] interface IC { }
            "#,
        ]);
        assert_eq!(
            decl(&table, "IA").annotation,
            Some(Annotation { name: Some("Widget".into()), is_record: Some(false) })
        );
        assert_eq!(
            decl(&table, "IB").annotation,
            Some(Annotation { name: Some("Gadget".into()), is_record: Some(true) })
        );
        assert_eq!(decl(&table, "IC").annotation, None);
    }

    #[test]
    fn test_members_are_lowered_with_resolved_types() {
        let table = lower_sources(&[
            r#"
            using static System.Math;
            namespace Shop;
            public class Tag { }
            public interface IProduct
            {
                string Name { get; init; }
                Tag? Primary { get; }
                decimal this[string key, int index = 0] { get; }
                bool TryGet(out Tag tag, char sep = ',');
                event EventHandler Changed;
            }
            "#,
        ]);
        let product = decl(&table, "Shop.IProduct");
        assert_eq!(product.site_imports, vec![SiteImport::static_import("System.Math")]);

        let Member::Property(name) = &product.members[0] else {
            panic!("expected property");
        };
        assert!(name.init_only && name.has_setter && name.has_getter);
        assert_eq!(name.ty, TypeRef::core("String"));

        let Member::Property(primary) = &product.members[1] else {
            panic!("expected property");
        };
        assert!(!primary.has_setter);
        assert_eq!(primary.ty, TypeRef::named(Some("Shop"), "Tag").nullable());

        let Member::Property(indexer) = &product.members[2] else {
            panic!("expected indexer");
        };
        assert!(indexer.is_indexer);
        assert_eq!(indexer.parameters[1].default, Some(LiteralValue::Other("0".into())));

        let Member::Method(try_get) = &product.members[3] else {
            panic!("expected method");
        };
        assert_eq!(try_get.parameters[0].ref_kind, RefKind::Out);
        assert_eq!(try_get.parameters[1].default, Some(LiteralValue::Char(',')));
        assert_eq!(try_get.return_type, TypeRef::core("Boolean"));

        assert!(matches!(&product.members[4], Member::Event(e) if e.ty == TypeRef::core("EventHandler")));
        assert!(product.span.is_some());
    }

    #[test]
    fn test_global_usings_apply_to_every_file() {
        let table = lower_sources(&[
            "global using Shop.Common;",
            "namespace Shop.Common { class Money { } }",
            "namespace Shop.Sales { interface IOrder { Money Total { get; } } }",
        ]);
        let order = decl(&table, "Shop.Sales.IOrder");
        let Member::Property(total) = &order.members[0] else {
            panic!("expected property");
        };
        assert_eq!(total.ty.qualified_name(), "Shop.Common.Money");
        assert!(order.site_imports.is_empty());
    }
}
