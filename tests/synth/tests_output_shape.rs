#![allow(clippy::unwrap_used)]

use rstest::rstest;
use stubgen::SynthesisOptions;
use stubgen::synth::Qualification;

use crate::helpers::source_fixtures::*;
use crate::helpers::synth_helpers::*;

const PROFILE: &str = r#"
namespace People;

[GenerateImplementation]
public interface IProfile
{
    string Name { get; set; }
    string? Nickname { get; set; }
    int? Age { get; set; }
    Nullable<int> Score { get; set; }
    DateTime Joined { get; init; }
}
"#;

#[rstest]
#[case("Name", "public required string Name { get; set; }")]
#[case("Nickname", "public string? Nickname { get; set; }")]
#[case("Age", "public int? Age { get; set; }")]
#[case("Score", "public global::System.Nullable<int> Score { get; set; }")]
#[case("Joined", "public required DateTime Joined { get; init; }")]
fn test_required_only_for_non_nullable(#[case] name: &str, #[case] expected: &str) {
    let (unit, _) = generate(&[PROFILE]);
    let line = unit
        .source
        .lines()
        .map(str::trim)
        .find(|line| line.contains(&format!(" {name} {{")))
        .unwrap();
    assert_eq!(line, expected);
}

const ORDER: &str = r#"
using Shop.Catalog;
using static System.Math;

namespace Shop.Sales;

[GenerateImplementation]
public interface IOrder
{
    List<Tag> Tags { get; set; }
    Dictionary<string, Color[]> Palette { get; set; }
    IReadOnlyList<int> Quantities { get; set; }
}
"#;

#[test]
fn test_imports_close_over_generic_arguments_and_arrays() {
    let (unit, _) = generate(&[CATALOG_TYPES, ORDER]);
    let usings: Vec<_> = unit
        .source
        .lines()
        .take_while(|line| line.starts_with("using "))
        .collect();
    assert_eq!(
        usings,
        vec!["using Shop.Catalog;", "using System.Collections.Generic;"]
    );
    assert!(unit.source.contains(
        "public required global::System.Collections.Generic.List<global::Shop.Catalog.Tag> Tags { get; set; }"
    ));
    assert!(unit.source.contains(
        "global::System.Collections.Generic.Dictionary<string, global::Shop.Catalog.Color[]> Palette"
    ));
}

#[test]
fn test_prefer_imported_renders_short_names() {
    let options = SynthesisOptions::default().with_qualification(Qualification::PreferImported);
    let (unit, _) = generate_with(&[CATALOG_TYPES, ORDER], &options);
    assert!(unit.source.contains("public required List<Tag> Tags { get; set; }"));
    assert!(unit.source.contains("public required Dictionary<string, Color[]> Palette { get; set; }"));
    assert!(unit.source.contains("public partial record Order : global::Shop.Sales.IOrder"));
}

#[test]
fn test_explicit_name_wins() {
    let (unit, _) = generate(&[r#"
[GenerateImplementation("  Widget ")]
public interface IGadget { int Size { get; set; } }
"#]);
    assert_eq!(unit.type_name, "Widget");
    assert_eq!(unit.hint_name, "Widget.g.cs");
    assert!(unit.source.contains("public partial record Widget : IGadget"));
}

#[rstest]
#[case(r#"[GenerateImplementation("   ")] public interface IBlank { }"#)]
#[case(r#"[GenerateImplementation(Name = "Not Valid")] public interface IInvalid { }"#)]
fn test_unusable_names_are_skipped(#[case] source: &str) {
    let output = batch_with(&[source], &SynthesisOptions::default());
    assert!(output.units.is_empty());
    assert_eq!(output.skipped.len(), 1);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_name_without_interface_prefix_is_kept() {
    let (unit, _) = generate(&["[GenerateImplementation] public interface Item { }"]);
    assert_eq!(unit.type_name, "Item");
}

#[test]
fn test_class_shape_gets_constructor() {
    let (unit, _) = generate(&[r#"
namespace Shop.Domain;

[GenerateImplementation(IsRecord = false)]
public interface IProduct
{
    string Name { get; set; }
    int Class { get; set; }
}
"#]);
    assert_eq!(
        unit.source,
        "\
namespace Shop.Domain
{
    // <auto-generated/>
    // Generated by stubgen from Shop.Domain.IProduct. Do not edit.
    public partial class Product : global::Shop.Domain.IProduct
    {
        [global::System.Diagnostics.CodeAnalysis.SetsRequiredMembers]
        public Product(string name, int @class)
        {
            this.Name = name;
            this.Class = @class;
        }

        public required string Name { get; set; }
        public required int Class { get; set; }
    }
}
"
    );
}

#[test]
fn test_positional_record_mode() {
    let options = SynthesisOptions::default().with_positional_records(true);
    let (unit, _) = generate_with(&[ENTITY, PRODUCT_SIMPLE], &options);
    assert_eq!(
        unit.source,
        "\
namespace Shop.Domain
{
    // <auto-generated/>
    // Generated by stubgen from Shop.Domain.IProduct. Do not edit.
    public partial record Product(string Name, int Id) : global::Shop.Domain.IProduct
    {
        public string Name { get; set; } = Name;
        public int Id { get; set; } = Id;
    }
}
"
    );
    assert!(data_member_names(&unit.source).is_empty());
}

#[test]
fn test_positional_init_and_get_only_members_stay_positional() {
    let options = SynthesisOptions::default().with_positional_records(true);
    let (unit, _) = generate_with(
        &[r#"
[GenerateImplementation]
public interface IStamp
{
    long Ticks { get; init; }
    string Zone { get; }
}
"#],
        &options,
    );
    assert!(unit.source.contains("public partial record Stamp(long Ticks, string Zone) : IStamp\n{\n}\n"));
}

#[test]
fn test_default_values_keep_their_escapes() {
    let (unit, _) = generate(&[r#"
[GenerateImplementation]
public interface IRunner
{
    void Run(string a = "x\vy", string b = "\x41", char c = '\a', string d = "\U0001F600", string e = "\u2028");
}
"#]);
    assert!(unit.source.contains(
        "public void Run(string a = \"x\\u000By\", string b = \"A\", char c = '\\u0007', string d = \"\u{1F600}\", string e = \"\\u2028\")"
    ));
}

#[test]
fn test_methods_and_events() {
    let (unit, diagnostics) = generate(&[r#"
[GenerateImplementation]
public interface IRepository
{
    Task<bool> SaveAsync(ref int count, out string label, string note = "a\"b", char sep = '\n', bool force = true, int retries = 3, CancellationToken token = default);
    void Reset();
    event EventHandler Changed;
}
"#]);
    assert!(diagnostics.is_empty());
    assert_eq!(
        unit.source,
        r#"using System.Threading;
using System.Threading.Tasks;

// <auto-generated/>
// Generated by stubgen from IRepository. Do not edit.
public partial record Repository : IRepository
{
    public global::System.Threading.Tasks.Task<bool> SaveAsync(ref int count, out string label, string note = "a\"b", char sep = '\n', bool force = true, int retries = 3, global::System.Threading.CancellationToken token = default)
    {
        throw new global::System.NotImplementedException();
    }

    public void Reset()
    {
        throw new global::System.NotImplementedException();
    }

    public event global::System.EventHandler Changed;
}
"#
    );
}

#[test]
fn test_namespace_wrapper_can_be_disabled() {
    let options = SynthesisOptions::default().with_namespace(false);
    let (unit, _) = generate_with(&[ENTITY, PRODUCT_SIMPLE], &options);
    assert!(unit.source.starts_with("// <auto-generated/>\n"));
    assert!(unit.source.contains("\npublic partial record Product : global::Shop.Domain.IProduct\n"));
}

#[test]
fn test_nested_type_of_declared_class_imports_its_namespace() {
    let (unit, _) = generate(&[
        "namespace Shop; public class Order { }",
        r#"
namespace Shop.Sales;

[GenerateImplementation]
public interface IShipment
{
    Order.Status State { get; set; }
}
"#,
    ]);
    let usings: Vec<_> = unit
        .source
        .lines()
        .take_while(|line| line.starts_with("using "))
        .collect();
    assert_eq!(usings, vec!["using Shop;"]);
    assert!(
        unit.source
            .contains("public required global::Shop.Order.Status State { get; set; }")
    );
}

#[test]
fn test_clr_names_of_keyword_types_render_as_keywords() {
    let (unit, _) = generate(&[r#"
[GenerateImplementation]
public interface ISeparator
{
    Char Sep { get; set; }
    UInt32 Count { get; set; }
}
"#]);
    assert!(unit.source.contains("public required char Sep { get; set; }"));
    assert!(unit.source.contains("public required uint Count { get; set; }"));
}
