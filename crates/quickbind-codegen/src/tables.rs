//! Static table emission — the enum table and the method dispatch table.
//!
//! Both tables are sentinel-terminated so the runtime loader can walk them
//! without a length field. A class with no public enumerations still gets
//! a terminator-only enum table; the loader always finds the symbol.

use quickbind_types::{EnumMetadata, FunctionMetadata};

use crate::assembler::GenContext;

/// Emit the name→value table for the class's public enumerations.
pub fn emit_enum_table(enums: &[&EnumMetadata], ctx: &GenContext) -> String {
    let class = &ctx.class_name;
    let data = &ctx.data_name;
    if enums.is_empty() {
        return format!("const Enumerator {data}::p_enums[] = {{{{0, 0 }}}};\n");
    }
    let mut out = format!("const Enumerator {data}::p_enums[] =\n{{\n");
    for e in enums {
        for value in &e.values {
            out.push_str(&format!("    {{\"{value}\", {class}::{value} }},\n"));
        }
    }
    out.push_str("    {0, 0}\n};\n");
    out
}

/// Emit the name→wrapper dispatch table for the synthesized methods.
/// Constructors are excluded — they publish through `p_constructor`.
pub fn emit_method_table(methods: &[&FunctionMetadata], ctx: &GenContext) -> String {
    let class = &ctx.class_name;
    let data = &ctx.data_name;
    let mut out = format!("const Method {data}::p_methods[] =\n{{\n");
    for method in methods {
        out.push_str(&format!(
            "    {{ \"{name}\", {arity}, Script::DontDelete|Script::ReadOnly, &{class}NS::{name} }},\n",
            name = method.name,
            arity = method.arity(),
        ));
    }
    out.push_str("    {0, 0, 0, 0 }\n};\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::EnumRegistry;
    use quickbind_types::{ParameterMetadata, Visibility};

    fn ctx() -> GenContext {
        GenContext::with_enums("Widget".to_string(), EnumRegistry::default())
    }

    #[test]
    fn test_empty_enum_table_is_terminator_only() {
        let table = emit_enum_table(&[], &ctx());
        assert_eq!(table, "const Enumerator WidgetData::p_enums[] = {{0, 0 }};\n");
    }

    #[test]
    fn test_enum_rows_are_class_qualified_and_ordered() {
        let mode = EnumMetadata {
            visibility: Visibility::Public,
            name: "Mode".to_string(),
            values: vec!["On".to_string(), "Off".to_string()],
        };
        let table = emit_enum_table(&[&mode], &ctx());
        let on = table.find("{\"On\", Widget::On },").unwrap();
        let off = table.find("{\"Off\", Widget::Off },").unwrap();
        let terminator = table.find("{0, 0}").unwrap();
        assert!(on < off && off < terminator);
    }

    #[test]
    fn test_method_table_rows_and_sentinel() {
        let set_width = FunctionMetadata {
            visibility: Visibility::Public,
            name: "setWidth".to_string(),
            return_type: "void".to_string(),
            params: vec![ParameterMetadata::named("int", "width")],
        };
        let table = emit_method_table(&[&set_width], &ctx());
        assert!(table.contains(
            "{ \"setWidth\", 1, Script::DontDelete|Script::ReadOnly, &WidgetNS::setWidth },"
        ));
        assert!(table.ends_with("    {0, 0, 0, 0 }\n};\n"));
    }

    #[test]
    fn test_empty_method_table_is_sentinel_only() {
        let table = emit_method_table(&[], &ctx());
        assert_eq!(
            table,
            "const Method WidgetData::p_methods[] =\n{\n    {0, 0, 0, 0 }\n};\n"
        );
    }
}
