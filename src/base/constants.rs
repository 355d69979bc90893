//! Domain constants shared across the generator.

/// File extension of declaration sources picked up by the project loader.
pub const DECLARATION_EXTENSION: &str = "cs";

/// Extension appended to a generated type name to form its hint name.
pub const GENERATED_EXTENSION: &str = ".g.cs";

/// Short name of the marker attribute that opts an interface into synthesis.
pub const MARKER_ATTRIBUTE: &str = "GenerateImplementation";

/// Full metadata name of the marker attribute.
pub const MARKER_ATTRIBUTE_FULL: &str = "GenerateImplementationAttribute";

/// Named argument carrying an explicit output type name.
pub const MARKER_NAME_ARGUMENT: &str = "Name";

/// Named argument selecting record vs. class output.
pub const MARKER_RECORD_ARGUMENT: &str = "IsRecord";

/// Namespace of the core runtime types.
pub const CORE_NAMESPACE: &str = "System";

/// Fully-qualified exception thrown by every generated stub body.
pub const NOT_IMPLEMENTED_EXCEPTION: &str = "global::System.NotImplementedException";

/// First line of the generation banner.
pub const BANNER_AUTO_GENERATED: &str = "// <auto-generated/>";
