//! Unit assembly.
//!
//! Orchestrates the generation pipeline for one class:
//! 1. Validate the metadata (name and include path present)
//! 2. Enum pre-pass — populate the [`EnumRegistry`] before anything
//!    classifies a type, so member order never affects classification
//! 3. Walk the member list once, partitioning it into method candidates,
//!    constructor candidates, and public enumerations
//! 4. Emit each section into its own buffer
//! 5. Concatenate the buffers in the fixed section order
//!
//! Nothing is written anywhere — the caller owns the sink. The section
//! order is part of the output contract:
//!
//! 1. include directives
//! 2. binding-constructor boilerplate (ClassInfo record + publish calls)
//! 3. method wrappers, inside the `{Class}NS` namespace
//! 4. enum table
//! 5. static-property placeholder (always present)
//! 6. constructor dispatch + descriptor record
//! 7. method dispatch table

use quickbind_types::{ClassMetadata, Diagnostic, EnumMetadata, FunctionMetadata, MemberMetadata};

use crate::classify::EnumRegistry;
use crate::ctor::emit_constructor_dispatch;
use crate::error::{GenError, GenResult};
use crate::method::emit_method_wrapper;
use crate::tables::{emit_enum_table, emit_method_table};

/// Per-run generation context: the class identity plus its enum registry,
/// passed explicitly to every emitter.
#[derive(Debug, Clone)]
pub struct GenContext {
    pub class_name: String,
    /// Name of the generated data record type (`{Class}Data`).
    pub data_name: String,
    /// Name of the generated binding class (`{Class}Binding`).
    pub binding_name: String,
    pub enums: EnumRegistry,
}

impl GenContext {
    /// Build a context for `class`, running the enum pre-pass.
    pub fn new(class: &ClassMetadata) -> Self {
        Self::with_enums(class.name.clone(), EnumRegistry::collect(class))
    }

    /// Build a context from parts. Useful when the registry is prepared
    /// separately (tests mostly).
    pub fn with_enums(class_name: String, enums: EnumRegistry) -> Self {
        let data_name = format!("{class_name}Data");
        let binding_name = format!("{class_name}Binding");
        Self {
            class_name,
            data_name,
            binding_name,
            enums,
        }
    }
}

/// One generated binding unit, buffered in full.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub class_name: String,
    /// Conventional output file name (`{Class}_bind.cpp`).
    pub file_name: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generate the binding unit for one class.
pub fn generate(class: &ClassMetadata) -> GenResult<GeneratedUnit> {
    Generator::new(class)?.generate()
}

/// The per-class generation state.
struct Generator<'a> {
    class: &'a ClassMetadata,
    ctx: GenContext,
}

impl<'a> Generator<'a> {
    fn new(class: &'a ClassMetadata) -> GenResult<Self> {
        if class.name.is_empty() {
            return Err(GenError::EmptyClassName);
        }
        if class.include.is_empty() {
            return Err(GenError::EmptyIncludePath(class.name.clone()));
        }
        Ok(Self {
            class,
            ctx: GenContext::new(class),
        })
    }

    fn generate(&self) -> GenResult<GeneratedUnit> {
        let (methods, ctors, enums) = self.partition_members();

        let mut sections = Vec::with_capacity(7);
        sections.push(self.emit_includes());
        sections.push(self.emit_binding_ctor());
        sections.push(self.emit_methods(&methods));
        sections.push(emit_enum_table(&enums, &self.ctx));
        sections.push(format!("NO_STATICS( {} )\n", self.ctx.data_name));

        let dispatch = emit_constructor_dispatch(&ctors, &self.ctx);
        sections.push(dispatch.source);
        sections.push(emit_method_table(&methods, &self.ctx));

        Ok(GeneratedUnit {
            class_name: self.class.name.clone(),
            file_name: format!("{}_bind.cpp", self.class.name),
            source: sections.join("\n"),
            diagnostics: dispatch.diagnostics,
        })
    }

    /// Single forward walk splitting the member list by role.
    fn partition_members(
        &self,
    ) -> (
        Vec<&'a FunctionMetadata>,
        Vec<&'a FunctionMetadata>,
        Vec<&'a EnumMetadata>,
    ) {
        let class_name = &self.class.name;
        let mut methods = Vec::new();
        let mut ctors = Vec::new();
        let mut enums = Vec::new();
        for member in &self.class.members {
            match member {
                MemberMetadata::Function(f) => {
                    if f.is_constructor_of(class_name) {
                        ctors.push(f);
                    } else if f.is_method_of(class_name) {
                        methods.push(f);
                    }
                }
                MemberMetadata::Enumeration(e) => {
                    if e.visibility == quickbind_types::Visibility::Public {
                        enums.push(e);
                    }
                }
            }
        }
        (methods, ctors, enums)
    }

    fn emit_includes(&self) -> String {
        format!(
            "#include \"{class}_bind.h\"\n#include <{include}>\n#include <value_binding.h>\n",
            class = self.class.name,
            include = self.class.include,
        )
    }

    fn emit_binding_ctor(&self) -> String {
        let class = &self.ctx.class_name;
        let data = &self.ctx.data_name;
        let binding = &self.ctx.binding_name;
        format!(
            "using namespace QuickBind;\n\n\
             const Script::ClassInfo {binding}::info = {{ \"{class}\", &ValueBinding::info, 0, 0 }};\n\n\
             {binding}::{binding}( Script::CallState *state, const {class} &value )\n    \
                 : ValueBinding(state, value)\n\
             {{\n    \
                 StaticBinding::publish(state, this, {data}::methods() );\n    \
                 StaticBinding::publish(state, this, ValueFactory::methods() );\n\
             }}\n"
        )
    }

    fn emit_methods(&self, methods: &[&FunctionMetadata]) -> String {
        let mut out = format!("namespace {}NS\n{{\n\n", self.ctx.class_name);
        for method in methods {
            out.push_str(&emit_method_wrapper(method, &self.ctx));
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }
}
