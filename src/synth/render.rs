//! Type rendering — how a [`TypeRef`] is written in generated source.
//!
//! Types are fully qualified with `global::` so the output resolves no
//! matter what else is in scope. Well-known core runtime types are the
//! exception and use their keyword or short name.

use std::borrow::Cow;

use super::imports::ImportSet;
use super::options::{Qualification, SynthesisOptions};
use crate::model::{ImportStatement, LiteralValue, Parameter, TypeRef};

/// Core type names rendered short, with the keyword alias where one exists.
const WELL_KNOWN: &[(&str, &str)] = &[
    ("String", "string"),
    ("Boolean", "bool"),
    ("Char", "char"),
    ("Byte", "byte"),
    ("SByte", "sbyte"),
    ("Int16", "short"),
    ("UInt16", "ushort"),
    ("Int32", "int"),
    ("UInt32", "uint"),
    ("Int64", "long"),
    ("UInt64", "ulong"),
    ("Single", "float"),
    ("Double", "double"),
    ("Decimal", "decimal"),
    ("Object", "object"),
    ("Void", "void"),
    ("DateTime", "DateTime"),
    ("DateTimeOffset", "DateTimeOffset"),
    ("Guid", "Guid"),
    ("TimeSpan", "TimeSpan"),
];

/// Renders type references against one resolved import context.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    imports: &'a ImportSet,
    options: &'a SynthesisOptions,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(imports: &'a ImportSet, options: &'a SynthesisOptions) -> Self {
        Self { imports, options }
    }

    pub fn render(&self, ty: &TypeRef) -> String {
        let mut out = String::new();
        self.write(ty, &mut out);
        out
    }

    /// The short form of `ty` if it is a well-known core type.
    pub fn well_known_name(&self, ty: &TypeRef) -> Option<&'static str> {
        let namespace = ty.namespace.as_deref()?;
        if !self.options.is_core_namespace(namespace) || ty.is_generic() {
            return None;
        }
        WELL_KNOWN
            .iter()
            .find(|(name, _)| *name == ty.name)
            .map(|(_, short)| *short)
    }

    pub fn render_parameter(&self, param: &Parameter) -> String {
        let mut out = String::new();
        if let Some(keyword) = param.ref_kind.keyword() {
            out.push_str(keyword);
            out.push(' ');
        }
        self.write(&param.ty, &mut out);
        out.push(' ');
        out.push_str(&param.name);
        if let Some(default) = &param.default {
            out.push_str(" = ");
            out.push_str(&format_literal(default));
        }
        out
    }

    pub fn render_parameters(&self, params: &[Parameter]) -> String {
        params
            .iter()
            .map(|p| self.render_parameter(p))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write(&self, ty: &TypeRef, out: &mut String) {
        if let Some(element) = &ty.element {
            self.write(element, out);
            out.push_str("[]");
        } else {
            out.push_str(&self.head(ty));
            if let Some((first, rest)) = ty.type_args.split_first() {
                out.push('<');
                self.write(first, out);
                for arg in rest {
                    out.push_str(", ");
                    self.write(arg, out);
                }
                out.push('>');
            }
        }
        if ty.nullable {
            out.push('?');
        }
    }

    fn head<'t>(&self, ty: &'t TypeRef) -> Cow<'t, str> {
        if let Some(short) = self.well_known_name(ty) {
            return Cow::Borrowed(short);
        }
        match &ty.namespace {
            None => Cow::Borrowed(ty.name.as_str()),
            Some(ns)
                if self.options.qualification == Qualification::PreferImported
                    && self.imports.contains(&ImportStatement::new(ns.clone())) =>
            {
                Cow::Borrowed(ty.name.as_str())
            }
            Some(ns) => Cow::Owned(format!("global::{ns}.{}", ty.name)),
        }
    }
}

/// Write a literal default value the way it appears in source.
pub fn format_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for c in s.chars() {
                push_escaped(c, '"', &mut out);
            }
            out.push('"');
            out
        }
        LiteralValue::Char(c) => {
            let mut out = String::from('\'');
            push_escaped(*c, '\'', &mut out);
            out.push('\'');
            out
        }
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Other(text) => text.to_string(),
    }
}

fn push_escaped(c: char, quote: char, out: &mut String) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        // Controls and the characters C# treats as line breaks
        c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
            out.push_str(&format!("\\u{:04X}", u32::from(c)));
        }
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RefKind;
    use rstest::rstest;

    fn render(ty: &TypeRef) -> String {
        let imports = ImportSet::new();
        let options = SynthesisOptions::default();
        TypeRenderer::new(&imports, &options).render(ty)
    }

    #[rstest]
    #[case("String", "string")]
    #[case("Int32", "int")]
    #[case("Boolean", "bool")]
    #[case("Double", "double")]
    #[case("Char", "char")]
    #[case("Object", "object")]
    #[case("Void", "void")]
    #[case("DateTime", "DateTime")]
    #[case("Guid", "Guid")]
    #[case("TimeSpan", "TimeSpan")]
    fn test_well_known_core_types_render_short(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(render(&TypeRef::core(name)), expected);
    }

    #[test]
    fn test_other_core_types_are_qualified() {
        assert_eq!(render(&TypeRef::core("Uri")), "global::System.Uri");
        assert_eq!(
            render(&TypeRef::core("Nullable").with_args([TypeRef::core("Int32")])),
            "global::System.Nullable<int>"
        );
    }

    #[test]
    fn test_well_known_name_outside_core_is_qualified() {
        assert_eq!(render(&TypeRef::named(Some("Shop"), "String")), "global::Shop.String");
    }

    #[test]
    fn test_generic_array_and_nullable() {
        let ty = TypeRef::named(Some("System.Collections.Generic"), "Dictionary").with_args([
            TypeRef::core("String"),
            TypeRef::array(TypeRef::named(Some("Shop"), "Tag").nullable()),
        ]);
        assert_eq!(
            render(&ty),
            "global::System.Collections.Generic.Dictionary<string, global::Shop.Tag?[]>"
        );
        assert_eq!(render(&TypeRef::core("Int32").nullable()), "int?");
        assert_eq!(render(&TypeRef::named(None, "Mystery")), "Mystery");
    }

    #[test]
    fn test_prefer_imported_uses_short_names() {
        let mut imports = ImportSet::new();
        imports.insert(ImportStatement::new("Shop"));
        let options = SynthesisOptions::default().with_qualification(Qualification::PreferImported);
        let renderer = TypeRenderer::new(&imports, &options);
        assert_eq!(renderer.render(&TypeRef::named(Some("Shop"), "Tag")), "Tag");
        assert_eq!(
            renderer.render(&TypeRef::named(Some("Billing"), "Invoice")),
            "global::Billing.Invoice"
        );
    }

    #[rstest]
    #[case(LiteralValue::String("a \"b\"\n".into()), r#""a \"b\"\n""#)]
    #[case(LiteralValue::Char('\''), r"'\''")]
    #[case(LiteralValue::Char('x'), "'x'")]
    #[case(LiteralValue::Bool(true), "true")]
    #[case(LiteralValue::Other("3.5m".into()), "3.5m")]
    #[case(LiteralValue::Other("null".into()), "null")]
    fn test_format_literal(#[case] value: LiteralValue, #[case] expected: &str) {
        assert_eq!(format_literal(&value), expected);
    }

    #[rstest]
    #[case(LiteralValue::String("x\u{b}y".into()), r#""x\u000By""#)]
    #[case(LiteralValue::String("\u{7}\u{8}\u{c}".into()), r#""\u0007\u0008\u000C""#)]
    #[case(LiteralValue::String("a\u{85}b".into()), r#""a\u0085b""#)]
    #[case(LiteralValue::String("\u{2028}\u{2029}".into()), r#""\u2028\u2029""#)]
    #[case(LiteralValue::String("\u{1F600}".into()), "\"\u{1F600}\"")]
    #[case(LiteralValue::String("A".into()), r#""A""#)]
    #[case(LiteralValue::Char('\u{7}'), r"'\u0007'")]
    #[case(LiteralValue::Char('"'), r#"'"'"#)]
    fn test_format_literal_escapes_line_breaks_and_controls(
        #[case] value: LiteralValue,
        #[case] expected: &str,
    ) {
        assert_eq!(format_literal(&value), expected);
    }

    #[test]
    fn test_render_parameter_modifiers_and_defaults() {
        let imports = ImportSet::new();
        let options = SynthesisOptions::default();
        let renderer = TypeRenderer::new(&imports, &options);
        let params = vec![
            Parameter::new(TypeRef::core("Int32"), "count").with_ref_kind(RefKind::Ref),
            Parameter::new(TypeRef::core("String"), "label")
                .with_default(LiteralValue::String("x".into())),
            Parameter::new(TypeRef::core("Boolean"), "ok").with_ref_kind(RefKind::Out),
        ];
        assert_eq!(
            renderer.render_parameters(&params),
            r#"ref int count, string label = "x", out bool ok"#
        );
    }
}
