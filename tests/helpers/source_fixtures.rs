//! Declaration sources shared across tests.

/// `Entity` with an integer id.
pub const ENTITY: &str = r#"
namespace Shop.Domain;

public interface IEntity
{
    int Id { get; set; }
}
"#;

/// `Auditable` with a creation timestamp.
pub const AUDITABLE: &str = r#"
namespace Shop.Domain;

public interface IAuditable
{
    DateTime CreatedAt { get; set; }
}
"#;

/// Annotated `Product` extending `Entity` only.
pub const PRODUCT_SIMPLE: &str = r#"
namespace Shop.Domain;

[GenerateImplementation]
public interface IProduct : IEntity
{
    string Name { get; set; }
}
"#;

/// Annotated `Product` extending `Entity` and `Auditable`.
pub const PRODUCT_MULTIPLE: &str = r#"
namespace Shop.Domain;

[GenerateImplementation]
public interface IProduct : IEntity, IAuditable
{
    string Name { get; set; }
}
"#;

/// Annotated interface declaring a read/write indexer.
pub const LOOKUP_WITH_INDEXER: &str = r#"
[GenerateImplementation]
public interface ILookup
{
    string this[int index] { get; set; }
}
"#;

/// Diamond: `D → B, C; B → A; C → A`.
pub const DIAMOND: &str = r#"
namespace Graph;

public interface IA { int A1 { get; set; } }
public interface IB : IA { int B1 { get; set; } }
public interface IC : IA { int C1 { get; set; } }

[GenerateImplementation]
public interface ID : IB, IC { int D1 { get; set; } }
"#;

/// Malformed cycle: `X → Y → X`.
pub const CYCLE: &str = r#"
namespace Graph;

[GenerateImplementation]
public interface IX : IY { int X1 { get; set; } }
public interface IY : IX { int Y1 { get; set; } }
"#;

/// Types in a user namespace referenced from another namespace.
pub const CATALOG_TYPES: &str = r#"
namespace Shop.Catalog
{
    public class Tag { }
    public enum Color { Red, Green }
}
"#;
