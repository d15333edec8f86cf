//! Class-description data model.
//!
//! One [`ClassMetadata`] describes one native class to bind: its include
//! path and an ordered member list. Member order is preserved — generated
//! wrappers, table rows, and overload branches all follow declaration
//! order. [`Vec`] everywhere, no maps: the tree is source-ordered input.

use serde::{Deserialize, Serialize};

/// The destructor marker prefix on member names (`~QBrush`).
pub const DESTRUCTOR_MARKER: char = '~';

/// A complete description of one class to bind.
///
/// Immutable input, owned by the caller, alive for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetadata {
    /// Class name, unique per generation unit (e.g. `QBrush`).
    pub name: String,
    /// Header the generated unit includes (e.g. `qbrush.h`).
    pub include: String,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<MemberMetadata>,
}

/// Member visibility as declared on the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// A single class member: a function or an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberMetadata {
    Function(FunctionMetadata),
    Enumeration(EnumMetadata),
}

impl MemberMetadata {
    /// The member's declared name.
    pub fn name(&self) -> &str {
        match self {
            Self::Function(f) => &f.name,
            Self::Enumeration(e) => &e.name,
        }
    }

    /// The member's declared visibility.
    pub fn visibility(&self) -> Visibility {
        match self {
            Self::Function(f) => f.visibility,
            Self::Enumeration(e) => e.visibility,
        }
    }
}

/// A function member: constructor, destructor, operator, or plain method.
/// Which role it plays is derived from the name, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    pub visibility: Visibility,
    pub name: String,
    /// Raw return-type string as declared (`void`, `QColor`, `Qt::PenStyle`).
    /// Constructors carry no return type; documents may omit the field.
    #[serde(default)]
    pub return_type: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<ParameterMetadata>,
}

impl FunctionMetadata {
    /// Declared parameter count.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Operator overloads are never bound.
    pub fn is_operator(&self) -> bool {
        self.name.contains("operator")
    }

    /// `~Class` — never bound, and not a constructor candidate.
    pub fn is_destructor(&self) -> bool {
        self.name.starts_with(DESTRUCTOR_MARKER)
    }

    /// A public function whose name contains the class name, minus
    /// destructors and operators, is dispatched as a constructor.
    pub fn is_constructor_of(&self, class_name: &str) -> bool {
        self.visibility == Visibility::Public
            && self.name.contains(class_name)
            && !self.is_destructor()
            && !self.is_operator()
    }

    /// A public function whose name does NOT contain the class name, minus
    /// operators, gets a wrapper and a dispatch-table row.
    pub fn is_method_of(&self, class_name: &str) -> bool {
        self.visibility == Visibility::Public
            && !self.name.contains(class_name)
            && !self.is_operator()
    }

    /// Setter naming convention — the wrapper forwards the first argument.
    pub fn is_setter(&self) -> bool {
        self.name.contains("set")
    }
}

/// An enumeration member with its value names in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMetadata {
    pub visibility: Visibility,
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    /// Raw type string, possibly wrapped as `const T &`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Declared name; absent means the generator synthesizes `argN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Default-value literal, substituted when the call site omits the
    /// argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ParameterMetadata {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: None,
            default: None,
        }
    }

    pub fn named(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: Some(name.into()),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The variable name used in generated code: the declared name, or the
    /// positional `argN` placeholder.
    pub fn var_name(&self, idx: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("arg{idx}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str, visibility: Visibility) -> FunctionMetadata {
        FunctionMetadata {
            visibility,
            name: name.to_string(),
            return_type: "void".to_string(),
            params: Vec::new(),
        }
    }

    #[test]
    fn test_constructor_detection() {
        assert!(func("QBrush", Visibility::Public).is_constructor_of("QBrush"));
        assert!(!func("~QBrush", Visibility::Public).is_constructor_of("QBrush"));
        assert!(!func("setColor", Visibility::Public).is_constructor_of("QBrush"));
        assert!(!func("QBrush", Visibility::Protected).is_constructor_of("QBrush"));
        assert!(!func("operatorQBrush", Visibility::Public).is_constructor_of("QBrush"));
    }

    #[test]
    fn test_method_detection() {
        assert!(func("setColor", Visibility::Public).is_method_of("QBrush"));
        assert!(!func("QBrush", Visibility::Public).is_method_of("QBrush"));
        assert!(!func("~QBrush", Visibility::Public).is_method_of("QBrush"));
        assert!(!func("operator==", Visibility::Public).is_method_of("QBrush"));
        assert!(!func("color", Visibility::Private).is_method_of("QBrush"));
    }

    #[test]
    fn test_var_name_placeholder() {
        assert_eq!(ParameterMetadata::new("int").var_name(2), "arg2");
        assert_eq!(ParameterMetadata::named("int", "width").var_name(2), "width");
    }

    #[test]
    fn test_member_json_round_trip() {
        let member = MemberMetadata::Function(FunctionMetadata {
            visibility: Visibility::Public,
            name: "setStyle".to_string(),
            return_type: "void".to_string(),
            params: vec![
                ParameterMetadata::named("PenStyle", "style").with_default("SolidLine")
            ],
        });
        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("\"kind\":\"function\""));
        let back: MemberMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, member);
    }

    #[test]
    fn test_enumeration_json_tag() {
        let json = r#"{
            "kind": "enumeration",
            "visibility": "public",
            "name": "Mode",
            "values": ["On", "Off"]
        }"#;
        let member: MemberMetadata = serde_json::from_str(json).unwrap();
        match member {
            MemberMetadata::Enumeration(e) => {
                assert_eq!(e.name, "Mode");
                assert_eq!(e.values, vec!["On", "Off"]);
            }
            other => panic!("expected enumeration, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_parameter_fields_default() {
        let json = r#"{ "type": "const QColor &" }"#;
        let param: ParameterMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(param.ty, "const QColor &");
        assert!(param.name.is_none());
        assert!(param.default.is_none());
    }
}
