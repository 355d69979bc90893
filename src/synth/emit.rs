//! Synthesis engine — writes the implementation of one root interface.
//!
//! One pass over a single declaration, in fixed order:
//! collect members → compute imports → header → data members →
//! indexer stubs → method stubs → events → footer.

use smol_str::SmolStr;

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::flatten::{FlatMember, FlattenedMembers, flatten_all};
use super::imports::{ImportSet, resolve_imports};
use super::naming::{TypeShape, implementation_name, type_shape};
use super::options::SynthesisOptions;
use super::render::TypeRenderer;
use crate::base::constants::{BANNER_AUTO_GENERATED, GENERATED_EXTENSION, NOT_IMPLEMENTED_EXCEPTION};
use crate::model::{InterfaceDecl, InterfaceId, InterfaceSource, Member, Property, TypeRef};

const SETS_REQUIRED_MEMBERS: &str =
    "global::System.Diagnostics.CodeAnalysis.SetsRequiredMembers";

/// C# keywords that need an `@` prefix when used as parameter names.
const RESERVED: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// File name the host should register the source under.
    pub hint_name: String,
    /// Name of the generated type.
    pub type_name: String,
    /// Qualified name of the implemented interface.
    pub interface: SmolStr,
    pub source: String,
}

/// Synthesize the implementation of `root`.
///
/// Returns `None`, without reporting anything, when the interface is
/// unknown, lacks the marker annotation, or yields no usable name.
/// Every indexer in the hierarchy reports an advisory to `sink`.
pub fn synthesize<S>(
    source: &S,
    root: InterfaceId,
    options: &SynthesisOptions,
    sink: &mut dyn DiagnosticSink,
) -> Option<OutputUnit>
where
    S: InterfaceSource + ?Sized,
{
    let decl = source.interface(root)?;
    if decl.annotation.is_none() {
        tracing::debug!(interface = %decl.name, "skipping interface without marker annotation");
        return None;
    }
    let Some(type_name) = implementation_name(decl) else {
        tracing::debug!(interface = %decl.name, "skipping interface without a usable output name");
        return None;
    };

    let members = flatten_all(source, root);
    let imports = resolve_imports(source, root, options);
    let renderer = TypeRenderer::new(&imports, options);

    let mut emitter = Emitter {
        out: CodeWriter::new(options),
        renderer,
        options,
        decl,
        type_name: &type_name,
        shape: type_shape(decl),
        wrote_group: false,
    };
    emitter.header(&imports, &members);
    emitter.data_members(&members.properties);
    emitter.indexers(&members.indexers, sink);
    emitter.methods(&members.methods);
    emitter.events(&members.events);
    emitter.footer();

    tracing::debug!(
        interface = %decl.name,
        generated = %type_name,
        members = members.len(),
        imports = imports.len(),
        "synthesized implementation"
    );

    Some(OutputUnit {
        hint_name: format!("{type_name}{GENERATED_EXTENSION}"),
        interface: decl.qualified_name().into(),
        source: emitter.out.finish(),
        type_name,
    })
}

/// Line-oriented text buffer with brace-driven indentation.
struct CodeWriter<'a> {
    buf: String,
    level: usize,
    options: &'a SynthesisOptions,
}

impl<'a> CodeWriter<'a> {
    fn new(options: &'a SynthesisOptions) -> Self {
        Self {
            buf: String::new(),
            level: 0,
            options,
        }
    }

    fn line(&mut self, text: &str) {
        self.buf.push_str(&self.options.indent(self.level));
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn open(&mut self) {
        self.line("{");
        self.level += 1;
    }

    fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    fn finish(self) -> String {
        self.buf
    }
}

struct Emitter<'a> {
    out: CodeWriter<'a>,
    renderer: TypeRenderer<'a>,
    options: &'a SynthesisOptions,
    decl: &'a InterfaceDecl,
    type_name: &'a str,
    shape: TypeShape,
    /// Set once any member group has been written.
    wrote_group: bool,
}

impl Emitter<'_> {
    fn positional(&self) -> bool {
        self.options.positional_records && self.shape == TypeShape::Record
    }

    fn header(&mut self, imports: &ImportSet, members: &FlattenedMembers<'_>) {
        for import in imports {
            self.out.line(&import.to_string());
        }
        if !imports.is_empty() {
            self.out.blank();
        }

        let namespace = self.decl.namespace.as_deref().filter(|_| self.options.emit_namespace);
        if let Some(ns) = namespace {
            self.out.line(&format!("namespace {ns}"));
            self.out.open();
        }

        self.out.line(BANNER_AUTO_GENERATED);
        self.out.line(&format!(
            "// Generated by {} from {}. Do not edit.",
            self.options.tool_name,
            self.decl.qualified_name()
        ));

        let interface = self.renderer.render(&TypeRef::named(
            self.decl.namespace.as_deref(),
            self.decl.name.clone(),
        ));
        let mut declaration = format!("public partial {} {}", self.shape.keyword(), self.type_name);
        if self.positional() {
            let components = members
                .properties
                .iter()
                .filter_map(|flat| as_property(flat.member))
                .map(|p| format!("{} {}", self.renderer.render(&p.ty), p.name))
                .collect::<Vec<_>>()
                .join(", ");
            declaration.push_str(&format!("({components})"));
        }
        declaration.push_str(&format!(" : {interface}"));
        self.out.line(&declaration);
        self.out.open();
    }

    fn data_members(&mut self, properties: &[FlatMember<'_>]) {
        let properties: Vec<&Property> = properties.iter().filter_map(|f| as_property(f.member)).collect();
        if self.positional() {
            self.settable_components(&properties);
            return;
        }
        if properties.is_empty() {
            return;
        }
        self.begin_group();

        if self.shape == TypeShape::Class {
            self.constructor(&properties);
            self.out.blank();
        }

        for property in properties {
            let required = if property.ty.is_nullable() { "" } else { "required " };
            let setter = if property.init_only { "init" } else { "set" };
            self.out.line(&format!(
                "public {required}{} {} {{ get; {setter}; }}",
                self.renderer.render(&property.ty),
                property.name
            ));
        }
    }

    /// Positional components are `{ get; init; }`; a `set` accessor needs
    /// an explicit property initialized from the component.
    fn settable_components(&mut self, properties: &[&Property]) {
        let settable: Vec<&&Property> = properties
            .iter()
            .filter(|p| p.has_setter && !p.init_only)
            .collect();
        if settable.is_empty() {
            return;
        }
        self.begin_group();
        for property in settable {
            self.out.line(&format!(
                "public {} {} {{ get; set; }} = {};",
                self.renderer.render(&property.ty),
                property.name,
                property.name
            ));
        }
    }

    fn constructor(&mut self, properties: &[&Property]) {
        let params = properties
            .iter()
            .map(|p| format!("{} {}", self.renderer.render(&p.ty), parameter_name(&p.name)))
            .collect::<Vec<_>>()
            .join(", ");
        self.out.line(&format!("[{SETS_REQUIRED_MEMBERS}]"));
        self.out.line(&format!("public {}({params})", self.type_name));
        self.out.open();
        for property in properties {
            self.out.line(&format!(
                "this.{} = {};",
                property.name,
                parameter_name(&property.name)
            ));
        }
        self.out.close();
    }

    fn indexers(&mut self, indexers: &[FlatMember<'_>], sink: &mut dyn DiagnosticSink) {
        for flat in indexers {
            let Some(indexer) = as_property(flat.member) else {
                continue;
            };
            sink.report(Diagnostic::indexer_stub(flat.owner, indexer));
            self.begin_group();

            self.out.line(&format!(
                "public {} this[{}]",
                self.renderer.render(&indexer.ty),
                self.renderer.render_parameters(&indexer.parameters)
            ));
            self.out.open();
            if indexer.has_getter {
                self.out.line(&format!("get => throw new {NOT_IMPLEMENTED_EXCEPTION}();"));
            }
            if indexer.has_setter {
                let setter = if indexer.init_only { "init" } else { "set" };
                self.out.line(&format!("{setter} => throw new {NOT_IMPLEMENTED_EXCEPTION}();"));
            }
            self.out.close();
        }
    }

    fn methods(&mut self, methods: &[FlatMember<'_>]) {
        for flat in methods {
            let Member::Method(method) = flat.member else {
                continue;
            };
            self.begin_group();
            self.out.line(&format!(
                "public {} {}({})",
                self.renderer.render(&method.return_type),
                method.name,
                self.renderer.render_parameters(&method.parameters)
            ));
            self.out.open();
            self.out.line(&format!("throw new {NOT_IMPLEMENTED_EXCEPTION}();"));
            self.out.close();
        }
    }

    fn events(&mut self, events: &[FlatMember<'_>]) {
        if events.is_empty() {
            return;
        }
        self.begin_group();
        for flat in events {
            if let Member::Event(event) = flat.member {
                self.out.line(&format!(
                    "public event {} {};",
                    self.renderer.render(&event.ty),
                    event.name
                ));
            }
        }
    }

    fn footer(&mut self) {
        self.out.close();
        if self.decl.namespace.is_some() && self.options.emit_namespace {
            self.out.close();
        }
    }

    fn begin_group(&mut self) {
        if self.wrote_group {
            self.out.blank();
        }
        self.wrote_group = true;
    }
}

fn as_property(member: &Member) -> Option<&Property> {
    match member {
        Member::Property(p) => Some(p),
        _ => None,
    }
}

/// `CreatedAt` → `createdAt`; keywords get an `@` prefix.
fn parameter_name(property: &str) -> String {
    let mut chars = property.chars();
    let name = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };
    if RESERVED.contains(&name.as_str()) {
        format!("@{name}")
    } else {
        name
    }
}
