#![allow(clippy::unwrap_used)]

use stubgen::synth::{Severity, codes};

use crate::helpers::source_fixtures::*;
use crate::helpers::synth_helpers::*;

#[test]
fn test_simple_inheritance() {
    let (unit, diagnostics) = generate(&[ENTITY, PRODUCT_SIMPLE]);

    assert_eq!(unit.type_name, "Product");
    assert_eq!(unit.hint_name, "Product.g.cs");
    assert_eq!(unit.interface, "Shop.Domain.IProduct");
    assert!(diagnostics.is_empty());
    assert_eq!(
        unit.source,
        "\
namespace Shop.Domain
{
    // <auto-generated/>
    // Generated by stubgen from Shop.Domain.IProduct. Do not edit.
    public partial record Product : global::Shop.Domain.IProduct
    {
        public required string Name { get; set; }
        public required int Id { get; set; }
    }
}
"
    );
}

#[test]
fn test_multiple_inheritance_has_exactly_three_data_members() {
    let (unit, _) = generate(&[ENTITY, AUDITABLE, PRODUCT_MULTIPLE]);

    let names = data_member_names(&unit.source);
    assert_eq!(names, vec!["Name", "Id", "CreatedAt"]);
    assert!(unit.source.contains("public required DateTime CreatedAt { get; set; }"));
    assert!(unit.source.contains(": global::Shop.Domain.IProduct"));
}

#[test]
fn test_indexer_is_stubbed_with_one_advisory() {
    let (unit, diagnostics) = generate(&[LOOKUP_WITH_INDEXER]);

    assert_eq!(
        unit.source,
        "\
// <auto-generated/>
// Generated by stubgen from ILookup. Do not edit.
public partial record Lookup : ILookup
{
    public string this[int index]
    {
        get => throw new global::System.NotImplementedException();
        set => throw new global::System.NotImplementedException();
    }
}
"
    );

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Info);
    assert_eq!(diagnostic.code, codes::INDEXER_STUB);
    assert_eq!(diagnostic.interface, "ILookup");
    assert_eq!(diagnostic.member, "this[Int32]");
    assert!(diagnostic.span.is_some());
}

#[test]
fn test_get_only_indexer_has_no_setter_stub() {
    let (unit, diagnostics) = generate(&[r#"
[GenerateImplementation]
public interface IReadOnlyLookup
{
    decimal this[string key] { get; }
}
"#]);
    assert_eq!(diagnostics.len(), 1);
    assert!(unit.source.contains("get => throw new global::System.NotImplementedException();"));
    assert!(!unit.source.contains("set =>"));
}

#[test]
fn test_diamond_yields_shared_base_members_once() {
    let (unit, _) = generate(&[DIAMOND]);
    assert_eq!(data_member_names(&unit.source), vec!["D1", "B1", "A1", "C1"]);
}

#[test]
fn test_cycle_terminates_with_each_member_once() {
    let (unit, _) = generate(&[CYCLE]);
    assert_eq!(data_member_names(&unit.source), vec!["X1", "Y1"]);
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate(&[ENTITY, AUDITABLE, PRODUCT_MULTIPLE]).0;
    let second = generate(&[PRODUCT_MULTIPLE, AUDITABLE, ENTITY]).0;
    assert_eq!(first.source, second.source);
}

#[test]
fn test_indexers_from_bases_report_their_owner() {
    let (_, diagnostics) = generate(&[r#"
namespace Store;

public interface IKeyed { object this[string key] { get; set; } }

[GenerateImplementation]
public interface IBag : IKeyed
{
    int this[int index] { get; }
}
"#]);
    let owners: Vec<_> = diagnostics.iter().map(|d| d.interface.as_str()).collect();
    assert_eq!(owners, vec!["IBag", "IKeyed"]);
}
