//! Parameter extraction — turning one positional argument into a typed
//! native variable.
//!
//! Every parameter yields an [`ExtractedParam`]: a guard expression the
//! constructor dispatcher can test, and an extraction statement that reads
//! the argument (falling back to the declared default, or a zero value,
//! when the call site omits it). Guards are written against an
//! object-or-null handle and never dereference a missing value.

use quickbind_types::ParameterMetadata;

use crate::assembler::GenContext;
use crate::classify::{classify, strip_const_ref, TypeClassification};

/// The generated artifacts for one parameter at position `idx`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedParam {
    /// Runtime type-check over the `obj{idx}` handle, e.g.
    /// `obj0 && obj0->isNumber()`.
    pub guard: String,
    /// Unindented extraction statement declaring the native variable.
    pub stmt: String,
    /// The variable name the statement declares (declared name or `argN`).
    pub var: String,
}

/// Classify `param` and emit its guard/extraction pair.
pub fn extract(param: &ParameterMetadata, idx: usize, ctx: &GenContext) -> ExtractedParam {
    let core = strip_const_ref(&param.ty);
    let classification = classify(&param.ty, &ctx.enums);
    let var = param.var_name(idx);
    let guard = guard_expr(&classification, core, idx);
    let stmt = extraction_stmt(&classification, core, param, idx, &var);
    ExtractedParam { guard, stmt, var }
}

fn guard_expr(classification: &TypeClassification, core: &str, idx: usize) -> String {
    let check = match classification {
        TypeClassification::Boolean => format!("obj{idx}->isBoolean()"),
        TypeClassification::Numeric | TypeClassification::EnumTyped { .. } => {
            format!("obj{idx}->isNumber()")
        }
        TypeClassification::TransparentValue if core == "QString" => {
            format!("obj{idx}->isString()")
        }
        TypeClassification::TransparentValue | TypeClassification::ObjectReference => {
            format!("obj{idx}->inherits(&{core}Binding::info)")
        }
    };
    format!("obj{idx} && {check}")
}

fn extraction_stmt(
    classification: &TypeClassification,
    core: &str,
    param: &ParameterMetadata,
    idx: usize,
    var: &str,
) -> String {
    match classification {
        TypeClassification::Boolean => {
            let default = param.default.as_deref().unwrap_or("false");
            format!("bool {var} = QuickBind::extractBool(state, args, {idx}, {default});")
        }
        TypeClassification::Numeric => {
            let default = param.default.as_deref().unwrap_or("0");
            format!("{core} {var} = QuickBind::extractInt(state, args, {idx}, {default});")
        }
        // Reserved-namespace enums are spelled fully qualified already, so
        // the default literal is used as written.
        TypeClassification::EnumTyped { owner: None } => {
            let default = param.default.as_deref().unwrap_or("0");
            format!(
                "{core} {var} = static_cast<{core}>(QuickBind::extractInt(state, args, {idx}, {default}));"
            )
        }
        // Class-owned enums qualify both the type and the default with the
        // owner's namespace.
        TypeClassification::EnumTyped { owner: Some(owner) } => {
            let default = match &param.default {
                Some(literal) => format!("{owner}::{literal}"),
                None => "0".to_string(),
            };
            format!(
                "{owner}::{core} {var} = static_cast<{owner}::{core}>(QuickBind::extractInt(state, args, {idx}, {default}));"
            )
        }
        TypeClassification::TransparentValue => {
            format!("{core} {var} = QuickBind::extractValue<{core}>(state, args, {idx});")
        }
        TypeClassification::ObjectReference => {
            let default = param.default.as_deref().unwrap_or("0");
            format!("{core} {var} = QuickBind::extractObject<{core}>(state, args, {idx}, {default});")
        }
    }
}
