//! Constructor overload resolution and dispatch emission.
//!
//! Candidates are partitioned by arity; each populated arity gets one
//! `args.size()` block. Within a block, candidates keep declaration order
//! and the first branch whose guard chain passes wins — later candidates
//! with compatible-but-narrower signatures are unreachable. When two
//! same-arity candidates produce identical guard chains the second can
//! never fire, which is reported as a warning diagnostic; the emitted text
//! is unchanged.

use std::collections::BTreeMap;

use quickbind_types::{Diagnostic, FunctionMetadata};

use crate::assembler::GenContext;
use crate::extract::{extract, ExtractedParam};

/// The constructor-dispatch section plus any overload diagnostics.
#[derive(Debug)]
pub struct ConstructorDispatch {
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Group constructor candidates by declared parameter count, preserving
/// declaration order within each group. No deduplication.
pub fn group_by_arity<'a>(
    ctors: &[&'a FunctionMetadata],
) -> BTreeMap<usize, Vec<&'a FunctionMetadata>> {
    let mut groups: BTreeMap<usize, Vec<&FunctionMetadata>> = BTreeMap::new();
    for ctor in ctors {
        groups.entry(ctor.arity()).or_default().push(ctor);
    }
    groups
}

/// Emit the constructor descriptor record and the dispatch function.
pub fn emit_constructor_dispatch(
    ctors: &[&FunctionMetadata],
    ctx: &GenContext,
) -> ConstructorDispatch {
    let class = &ctx.class_name;
    let data = &ctx.data_name;
    let binding = &ctx.binding_name;
    let mut out = String::new();
    let mut diagnostics = Vec::new();

    out.push_str(&format!(
        "const Constructor {data}::p_constructor =\n    \
         {{ \"{class}\", 0, Script::DontDelete|Script::ReadOnly, &{data}::ctorMethod, \
         p_statics, p_enums, p_methods }};\n\n\
         Script::Object *{data}::ctorMethod( Script::CallState *state, const Script::List &args )\n\
         {{\n"
    ));

    for (arity, candidates) in group_by_arity(ctors) {
        out.push_str(&format!("    if( args.size() == {arity} )\n    {{\n"));
        if arity == 0 {
            out.push_str(&format!(
                "        return new QuickBind::{binding}(state, {class}());\n"
            ));
        } else {
            for idx in 0..arity {
                out.push_str(&format!("        Script::Value *value{idx} = args[{idx}];\n"));
                out.push_str(&format!(
                    "        Script::Object *obj{idx} = value{idx}->toObject(state);\n"
                ));
            }
            for candidate in &candidates {
                let extracted: Vec<ExtractedParam> = candidate
                    .params
                    .iter()
                    .enumerate()
                    .map(|(idx, param)| extract(param, idx, ctx))
                    .collect();
                let guard = extracted
                    .iter()
                    .map(|e| e.guard.as_str())
                    .collect::<Vec<_>>()
                    .join(" && ");
                out.push_str(&format!("        if( {guard} )\n        {{\n"));
                for e in &extracted {
                    out.push_str(&format!("            {}\n", e.stmt));
                }
                let arg_list = extracted
                    .iter()
                    .map(|e| e.var.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "            return new QuickBind::{binding}(state, {class}({arg_list}));\n        }}\n"
                ));
            }
        }
        out.push_str("    }\n");
        diagnostics.extend(shadow_warnings(&candidates, arity, ctx));
    }

    out.push_str(&format!(
        "    return Script::throwError(state, Script::TypeError, \
         \"{class}: no matching constructor\");\n}}\n"
    ));

    ConstructorDispatch {
        source: out,
        diagnostics,
    }
}

/// Flag same-arity candidates whose ordered guard chains are identical —
/// the later one can never be selected.
fn shadow_warnings(
    candidates: &[&FunctionMetadata],
    arity: usize,
    ctx: &GenContext,
) -> Vec<Diagnostic> {
    let chains: Vec<Vec<String>> = candidates
        .iter()
        .map(|c| {
            c.params
                .iter()
                .enumerate()
                .map(|(idx, param)| extract(param, idx, ctx).guard)
                .collect()
        })
        .collect();

    let mut warnings = Vec::new();
    for (later, chain) in chains.iter().enumerate() {
        if chains[..later].contains(chain) {
            warnings.push(Diagnostic::warning(
                &ctx.class_name,
                format!(
                    "constructor {} is unreachable: same runtime guards as an earlier {arity}-argument overload",
                    signature(candidates[later], &ctx.class_name)
                ),
            ));
        }
    }
    warnings
}

fn signature(ctor: &FunctionMetadata, class: &str) -> String {
    let params = ctor
        .params
        .iter()
        .map(|p| p.ty.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{class}({params})")
}
