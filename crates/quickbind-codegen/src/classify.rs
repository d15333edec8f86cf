//! Type classification — raw type strings to marshalling strategies.
//!
//! Every parameter and return type is mapped to exactly one
//! [`TypeClassification`]; unknown names fall back to
//! [`TypeClassification::ObjectReference`], so classification is total and
//! never rejects an input. Enum types override the static table: a type
//! spelled with the reserved `Qt::` namespace, or one registered as an
//! enumeration of the class being generated, marshals as an integer.

use std::collections::HashMap;

use quickbind_types::{ClassMetadata, MemberMetadata, Visibility};

/// Namespace marker that classifies a type as a toolkit-global enum.
pub const RESERVED_ENUM_NAMESPACE: &str = "Qt::";

/// Core type names that marshal as native numbers.
pub const NUMERIC_TYPES: &[&str] = &[
    "int", "uint", "double", "qreal", "qlonglong", "qulonglong", "qint8", "quint8", "qint16",
    "quint16", "qint32", "quint32", "qint64", "quint64", "uchar", "ushort", "ulong",
];

/// Core type names extracted through the generic typed value path.
pub const TRANSPARENT_TYPES: &[&str] = &[
    "QBitArray",
    "QBitmap",
    "QBrush",
    "QByteArray",
    "QChar",
    "QColor",
    "QCursor",
    "QDate",
    "QDateTime",
    "QFont",
    "QIcon",
    "QImage",
    "QKeySequence",
    "QLine",
    "QLineF",
    "QLocale",
    "QPalette",
    "QPen",
    "QPixmap",
    "QPoint",
    "QPointArray",
    "QPointF",
    "QPolygon",
    "QRect",
    "QRectF",
    "QRegExp",
    "QRegion",
    "QSize",
    "QSizeF",
    "QSizePolicy",
    "QString",
    "QStringList",
    "QTextFormat",
    "QTextLength",
    "QTime",
    "QUrl",
    "QVariantList",
    "QVariantMap",
];

/// How a parameter or return value moves between the script runtime and
/// native code. Derived on demand, never stored on the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeClassification {
    /// `bool` — boolean guard, boolean extraction.
    Boolean,
    /// Integer and floating primitives — numeric guard, integer extraction.
    Numeric,
    /// An enumeration. `owner` is the declaring class for class-owned
    /// enums, `None` for reserved-namespace enums whose spelling is
    /// already qualified.
    EnumTyped { owner: Option<String> },
    /// A value type copied through the generic extraction path.
    TransparentValue,
    /// Fallback — unwrapped from a bound script object.
    ObjectReference,
}

/// Which enumerations the class being generated owns.
///
/// Populated by a dedicated pre-pass over the member list, so an enum
/// referenced before its declaration still classifies as [`TypeClassification::EnumTyped`].
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    owners: HashMap<String, String>,
}

impl EnumRegistry {
    /// Collect every public enumeration of `class` into a fresh registry.
    pub fn collect(class: &ClassMetadata) -> Self {
        let mut owners = HashMap::new();
        for member in &class.members {
            if let MemberMetadata::Enumeration(e) = member {
                if e.visibility == Visibility::Public {
                    owners.insert(e.name.clone(), class.name.clone());
                }
            }
        }
        Self { owners }
    }

    /// The class owning `enum_name`, if registered.
    pub fn owner_of(&self, enum_name: &str) -> Option<&str> {
        self.owners.get(enum_name).map(String::as_str)
    }
}

/// Strip the single recognized qualifier wrapper `const T &`, yielding `T`.
///
/// Only a one-word core type is recognized; every other qualifier form
/// passes through unstripped (so `const Qt::PenStyle &` stays intact and
/// is caught by the namespace marker instead).
pub fn strip_const_ref(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("const ") else {
        return trimmed;
    };
    let Some(body) = rest.trim().strip_suffix('&') else {
        return trimmed;
    };
    let core = body.trim();
    if !core.is_empty() && core.chars().all(|c| c.is_alphanumeric() || c == '_') {
        core
    } else {
        trimmed
    }
}

/// Classify a raw type string. Total: every input yields exactly one
/// category, with [`TypeClassification::ObjectReference`] as the fallback.
pub fn classify(raw: &str, enums: &EnumRegistry) -> TypeClassification {
    let core = strip_const_ref(raw);
    if core.contains(RESERVED_ENUM_NAMESPACE) {
        return TypeClassification::EnumTyped { owner: None };
    }
    if let Some(owner) = enums.owner_of(core) {
        return TypeClassification::EnumTyped {
            owner: Some(owner.to_string()),
        };
    }
    if core == "bool" {
        TypeClassification::Boolean
    } else if NUMERIC_TYPES.contains(&core) {
        TypeClassification::Numeric
    } else if TRANSPARENT_TYPES.contains(&core) {
        TypeClassification::TransparentValue
    } else {
        TypeClassification::ObjectReference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbind_types::{EnumMetadata, MemberMetadata};

    fn registry_with(enum_name: &str, class: &str) -> EnumRegistry {
        let class = ClassMetadata {
            name: class.to_string(),
            include: "x.h".to_string(),
            members: vec![MemberMetadata::Enumeration(EnumMetadata {
                visibility: Visibility::Public,
                name: enum_name.to_string(),
                values: vec![],
            })],
        };
        EnumRegistry::collect(&class)
    }

    #[test]
    fn test_strip_const_ref() {
        assert_eq!(strip_const_ref("const QString &"), "QString");
        assert_eq!(strip_const_ref("const QColor&"), "QColor");
        assert_eq!(strip_const_ref("QString"), "QString");
        // Only the one-word pattern strips.
        assert_eq!(strip_const_ref("const Qt::PenStyle &"), "const Qt::PenStyle &");
        assert_eq!(strip_const_ref("const QString *"), "const QString *");
    }

    #[test]
    fn test_const_ref_is_classification_invariant() {
        let enums = EnumRegistry::default();
        for &ty in ["bool"]
            .iter()
            .chain(NUMERIC_TYPES.iter())
            .chain(TRANSPARENT_TYPES.iter())
        {
            let wrapped = format!("const {ty} &");
            assert_eq!(
                classify(&wrapped, &enums),
                classify(ty, &enums),
                "classification changed for {ty}"
            );
        }
    }

    #[test]
    fn test_tier_table() {
        let enums = EnumRegistry::default();
        assert_eq!(classify("bool", &enums), TypeClassification::Boolean);
        assert_eq!(classify("int", &enums), TypeClassification::Numeric);
        assert_eq!(classify("qreal", &enums), TypeClassification::Numeric);
        assert_eq!(classify("QString", &enums), TypeClassification::TransparentValue);
        assert_eq!(classify("QRectF", &enums), TypeClassification::TransparentValue);
        assert_eq!(classify("QWidget", &enums), TypeClassification::ObjectReference);
    }

    #[test]
    fn test_reserved_namespace_overrides_table() {
        let enums = EnumRegistry::default();
        assert_eq!(
            classify("Qt::PenStyle", &enums),
            TypeClassification::EnumTyped { owner: None }
        );
    }

    #[test]
    fn test_registry_overrides_table() {
        let enums = registry_with("Mode", "Widget");
        assert_eq!(
            classify("Mode", &enums),
            TypeClassification::EnumTyped {
                owner: Some("Widget".to_string())
            }
        );
        // Unregistered names still fall through.
        assert_eq!(classify("Style", &enums), TypeClassification::ObjectReference);
    }

    #[test]
    fn test_registry_skips_private_enums() {
        let class = ClassMetadata {
            name: "Widget".to_string(),
            include: "widget.h".to_string(),
            members: vec![MemberMetadata::Enumeration(EnumMetadata {
                visibility: Visibility::Private,
                name: "Internal".to_string(),
                values: vec!["A".to_string()],
            })],
        };
        let enums = EnumRegistry::collect(&class);
        assert!(enums.owner_of("Internal").is_none());
    }
}
