//! Method wrapper synthesis.
//!
//! One wrapper per eligible member, emitted inside the class's method
//! namespace. The wrapper unwraps the receiver, copies out the native
//! value, marshals arguments or the return value, and writes the possibly
//! mutated value back. Method calls are dispatched by name and arity only —
//! there is no overload cascade here, so extraction runs unguarded and a
//! wrong argument type surfaces as a native extraction failure.

use quickbind_types::FunctionMetadata;

use crate::assembler::GenContext;
use crate::classify::{classify, strip_const_ref, TypeClassification};
use crate::extract::extract;

/// Emit the wrapper function for one method candidate.
pub fn emit_method_wrapper(func: &FunctionMetadata, ctx: &GenContext) -> String {
    let class = &ctx.class_name;
    let name = &func.name;
    let mut out = String::new();

    out.push_str(&format!("// {}\n", signature_comment(func)));
    out.push_str(&format!(
        "Script::Value *{name}( Script::CallState *state, Script::Object *self, const Script::List &args )\n\
         {{\n    \
             Script::Value *result = Script::nullValue();\n    \
             QuickBind::ValueBinding *imp = QuickBind::extractBindingImp<QuickBind::ValueBinding>(state, self);\n    \
             if( imp )\n    \
             {{\n        \
                 {class} value = imp->value<{class}>();\n"
    ));

    if func.params.is_empty() {
        out.push_str(&return_marshalling(func, ctx));
    } else {
        for (idx, param) in func.params.iter().enumerate() {
            let extracted = extract(param, idx, ctx);
            out.push_str(&format!("        {}\n", extracted.stmt));
        }
        if func.is_setter() {
            let first = func.params[0].var_name(0);
            out.push_str(&format!("        value.{name}({first});\n"));
        }
    }

    out.push_str(&format!(
        "        imp->setValue(qVariantFromValue(value));\n    \
         }}\n    \
         else\n    \
         {{\n        \
             Script::throwError(state, Script::GeneralError, \"{class}::{name} called on incompatible object\");\n    \
         }}\n    \
         return result;\n\
         }}\n"
    ));
    out
}

/// Return-value marshalling for zero-parameter members, chosen by the
/// return type's classification.
fn return_marshalling(func: &FunctionMetadata, ctx: &GenContext) -> String {
    let name = &func.name;
    let ret = strip_const_ref(&func.return_type);
    if ret == "void" {
        return format!("        value.{name}();\n");
    }
    match classify(&func.return_type, &ctx.enums) {
        TypeClassification::EnumTyped { owner: Some(owner) } => format!(
            "        {owner}::{ret} tmp = value.{name}();\n        \
             result = Script::number(tmp);\n"
        ),
        TypeClassification::EnumTyped { owner: None } | TypeClassification::Numeric => format!(
            "        {ret} tmp = value.{name}();\n        \
             result = Script::number(tmp);\n"
        ),
        _ => format!(
            "        {ret} tmp = value.{name}();\n        \
             result = QuickBind::createValue(state, \"{ret}\", tmp);\n"
        ),
    }
}

fn signature_comment(func: &FunctionMetadata) -> String {
    let params = func
        .params
        .iter()
        .map(|p| p.ty.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} {}({})", func.return_type, func.name, params)
}
