//! Synthesis options

use crate::base::constants::CORE_NAMESPACE;

/// How type names are written in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Qualification {
    /// Always `global::Namespace.Name`, except well-known core types.
    #[default]
    AlwaysQualified,
    /// Short name when the type's namespace is in the computed import set.
    PreferImported,
}

/// Options controlling generated source
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    /// Number of spaces per indentation level (or tab width if using tabs)
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs)
    pub insert_spaces: bool,
    /// Namespaces whose types never need an import
    pub core_namespaces: Vec<String>,
    pub qualification: Qualification,
    /// Render records as positional `record Name(T A, ...)` declarations
    pub positional_records: bool,
    /// Wrap output in the root interface's namespace
    pub emit_namespace: bool,
    /// Tool name written into the generation banner
    pub tool_name: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            core_namespaces: vec![CORE_NAMESPACE.to_string()],
            qualification: Qualification::default(),
            positional_records: false,
            emit_namespace: true,
            tool_name: "stubgen".to_string(),
        }
    }
}

impl SynthesisOptions {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }

    pub fn is_core_namespace(&self, namespace: &str) -> bool {
        self.core_namespaces.iter().any(|ns| ns == namespace)
    }

    pub fn with_qualification(mut self, qualification: Qualification) -> Self {
        self.qualification = qualification;
        self
    }

    pub fn with_positional_records(mut self, positional: bool) -> Self {
        self.positional_records = positional;
        self
    }

    pub fn with_namespace(mut self, emit_namespace: bool) -> Self {
        self.emit_namespace = emit_namespace;
        self
    }
}
