//! Proto code emission via the Emit trait.
//!
//! Each IR node renders itself; emission is purely mechanical string
//! building in a single pass, so the same [`ProtoFile`] always produces the
//! same bytes.

use super::types::{
    Definition, EnumDecl, FieldDecl, HttpRule, MessageDecl, ProtoFile, RpcDecl, ServiceDecl,
};

/// Trait for emitting proto source from IR nodes.
pub trait Emit {
    /// Convert the IR node to its proto string representation.
    fn emit(&self) -> String;
}

const INDENT: &str = "  ";

// =============================================================================
// Definitions
// =============================================================================

impl EnumDecl {
    /// Render at the given nesting depth (0 = top level).
    fn emit_at(&self, depth: usize) -> String {
        let pad = INDENT.repeat(depth);
        let mut output = format!("{pad}enum {} {{\n", self.name);
        for member in &self.members {
            output.push_str(&format!(
                "{pad}{INDENT}{} = {};\n",
                member.name, member.ordinal
            ));
        }
        output.push_str(&format!("{pad}}}\n"));
        output
    }
}

impl Emit for EnumDecl {
    fn emit(&self) -> String {
        self.emit_at(0)
    }
}

impl Emit for FieldDecl {
    fn emit(&self) -> String {
        let opt = if self.optional { "optional " } else { "" };
        format!("{opt}{} {} = {};", self.ty, self.name, self.number)
    }
}

impl Emit for MessageDecl {
    fn emit(&self) -> String {
        let mut output = format!("message {} {{\n", self.name);
        for nested in &self.enums {
            output.push_str(&nested.emit_at(1));
        }
        for field in &self.fields {
            output.push_str(&format!("{INDENT}{}\n", field.emit()));
        }
        output.push_str("}\n");
        output
    }
}

impl Emit for Definition {
    fn emit(&self) -> String {
        match self {
            Definition::Enum(e) => e.emit(),
            Definition::Message(m) => m.emit(),
        }
    }
}

// =============================================================================
// Service
// =============================================================================

impl Emit for HttpRule {
    fn emit(&self) -> String {
        let mut output = String::from("    option (google.api.http) = {\n");
        output.push_str(&format!(
            "      {}: \"{}\"\n",
            self.method.as_lower(),
            self.path
        ));
        if self.body {
            output.push_str("      body: \"*\"\n");
        }
        output.push_str("    };\n");
        output
    }
}

impl Emit for RpcDecl {
    fn emit(&self) -> String {
        format!(
            "{INDENT}rpc {} ({}) returns ({}) {{\n{}{INDENT}}}\n",
            self.name,
            self.request,
            self.response,
            self.http.emit()
        )
    }
}

impl Emit for ServiceDecl {
    fn emit(&self) -> String {
        let mut output = format!("service {} {{\n", self.name);
        for rpc in &self.rpcs {
            output.push_str(&rpc.emit());
        }
        output.push_str("}\n");
        output
    }
}

// =============================================================================
// File
// =============================================================================

impl Emit for ProtoFile {
    fn emit(&self) -> String {
        let mut output = String::from("syntax = \"proto3\";\n\n");
        output.push_str(&format!("package {};\n", self.package));
        for import in &self.imports {
            output.push_str(&format!("import \"{import}\";\n"));
        }
        output.push('\n');

        for definition in &self.definitions {
            output.push_str(&definition.emit());
            output.push('\n');
        }

        output.push_str(&self.service.emit());
        output
    }
}
