//! Type descriptors and resolution.
//!
//! A [`TypeDescriptor`] is the shape of a type as the description states
//! it. The [`TypeResolver`] turns a descriptor into a [`TypeInfo`]: the
//! canonical target type, whether it counts as primitive, and the element
//! type of containers.
//!
//! Resolution only recurses into a descriptor's own nesting. A reference to
//! a model stops there, so recursive and mutually recursive models resolve
//! in finite time.

use discogen_core::{TypeMappingTable, source_type_token};
use discogen_description::{Schema, SerializableParameter};
use discogen_ir::TypeInfo;

/// Mapping-table key of the array container type.
const ARRAY_TOKEN: &str = "array";
/// Mapping-table key of the map container type.
const MAP_TOKEN: &str = "map";

/// The declared shape of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A named model.
    Reference(String),
    /// An array of the inner type.
    Array(Box<TypeDescriptor>),
    /// A map with values of the inner type.
    Map(Box<TypeDescriptor>),
    /// A primitive type token with its optional format.
    Primitive { ty: String, format: Option<String> },
}

impl TypeDescriptor {
    pub fn primitive(ty: impl Into<String>, format: Option<&str>) -> Self {
        TypeDescriptor::Primitive {
            ty: ty.into(),
            format: format.map(str::to_string),
        }
    }

    /// Read the descriptor of a schema.
    ///
    /// An array without `items` is the primitive token "array"; a schema
    /// with neither `$ref` nor `type` is an object unless it declares map
    /// values.
    pub fn from_schema(schema: &Schema) -> Self {
        if let Some(model) = schema.referenced_model() {
            return TypeDescriptor::Reference(model.to_string());
        }

        let format = schema.format.as_deref();
        match schema.ty.as_deref() {
            Some("array") => match schema.items.as_deref() {
                Some(items) => TypeDescriptor::Array(Box::new(Self::from_schema(items))),
                None => Self::primitive(ARRAY_TOKEN, format),
            },
            Some("object") | None => match schema.map_values() {
                Some(values) => TypeDescriptor::Map(Box::new(Self::from_schema(values))),
                None => Self::primitive("object", format),
            },
            Some(ty) => Self::primitive(ty, format),
        }
    }

    /// Read the descriptor of a path, query, header or form parameter.
    ///
    /// Returns `None` when the parameter has no type, or is an "array" or
    /// "object" without an items descriptor. Such parameters stay
    /// unresolved.
    pub fn from_parameter(param: &SerializableParameter) -> Option<Self> {
        let items = param.items.as_deref();
        match param.ty.as_deref()? {
            "array" => items.map(|i| TypeDescriptor::Array(Box::new(Self::from_schema(i)))),
            "object" => items.map(|i| TypeDescriptor::Map(Box::new(Self::from_schema(i)))),
            ty => Some(Self::primitive(ty, param.format.as_deref())),
        }
    }

    /// The type name as declared: the model name for references, the raw
    /// source token otherwise.
    pub fn declared_type(&self) -> &str {
        match self {
            TypeDescriptor::Reference(model) => model,
            TypeDescriptor::Array(_) => "array",
            TypeDescriptor::Map(_) => "object",
            TypeDescriptor::Primitive { ty, .. } => ty,
        }
    }

    /// Returns true for arrays.
    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_))
    }
}

/// Resolves descriptors against a type mapping table.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    table: &'a TypeMappingTable,
}

impl<'a> TypeResolver<'a> {
    pub fn new(table: &'a TypeMappingTable) -> Self {
        Self { table }
    }

    /// Resolve a descriptor.
    ///
    /// - references are non-primitive and keep the model name
    /// - arrays and maps are primitive exactly when their element is
    /// - any other token is mapped through the table (or passed through)
    ///   and is primitive
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> TypeInfo {
        match descriptor {
            TypeDescriptor::Reference(model) => TypeInfo::reference(model.as_str()),
            TypeDescriptor::Array(inner) => {
                TypeInfo::container(self.table.map(ARRAY_TOKEN), self.resolve(inner))
            }
            TypeDescriptor::Map(inner) => {
                TypeInfo::container(self.table.map(MAP_TOKEN), self.resolve(inner))
            }
            TypeDescriptor::Primitive { ty, format } => {
                let token = source_type_token(ty, format.as_deref());
                TypeInfo::primitive(self.table.map(token))
            }
        }
    }

    /// Resolve the type of a schema.
    pub fn resolve_schema(&self, schema: &Schema) -> TypeInfo {
        self.resolve(&TypeDescriptor::from_schema(schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_schema(json: &str) -> Schema {
        serde_json::from_str(json).expect("Failed to parse test schema")
    }

    fn parse_param(json: &str) -> SerializableParameter {
        serde_json::from_str(json).expect("Failed to parse test parameter")
    }

    #[test]
    fn test_table_tokens_resolve_to_their_mapping() {
        let table = TypeMappingTable::discovery();
        let resolver = TypeResolver::new(&table);

        for (token, target) in table.iter() {
            let info = resolver.resolve(&TypeDescriptor::primitive(token, None));
            assert_eq!(info.canonical, target);
            assert!(info.is_primitive);
        }
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let table = TypeMappingTable::discovery();
        let resolver = TypeResolver::new(&table);

        for token in ["integer", "string", "boolean", "file", "uuid"] {
            let info = resolver.resolve(&TypeDescriptor::primitive(token, None));
            assert_eq!(info.canonical, token);
            assert!(info.is_primitive);
        }
    }

    #[test]
    fn test_format_selects_source_token() {
        let table = TypeMappingTable::discovery();
        let resolver = TypeResolver::new(&table);

        let resolve = |json: &str| resolver.resolve_schema(&parse_schema(json)).canonical;

        assert_eq!(resolve(r#"{"type": "integer", "format": "int64"}"#), "string");
        assert_eq!(resolve(r#"{"type": "integer", "format": "int32"}"#), "integer");
        assert_eq!(resolve(r#"{"type": "number", "format": "double"}"#), "number");
    }

    #[test]
    fn test_reference_is_not_primitive() {
        let table = TypeMappingTable::discovery();
        let resolver = TypeResolver::new(&table);

        let info = resolver.resolve_schema(&parse_schema(r##"{"$ref": "#/definitions/Pet"}"##));
        assert_eq!(info.canonical, "Pet");
        assert!(!info.is_primitive);
        assert_eq!(info.complex_type.as_deref(), Some("Pet"));
    }

    #[test]
    fn test_containers_follow_their_items() {
        let table = TypeMappingTable::discovery();
        let resolver = TypeResolver::new(&table);

        let models = resolver.resolve_schema(&parse_schema(
            r##"{"type": "array", "items": {"$ref": "#/definitions/Product"}}"##,
        ));
        assert_eq!(models.canonical, "array");
        assert!(!models.is_primitive);
        assert_eq!(models.complex_type.as_deref(), Some("Product"));

        let dates = resolver.resolve_schema(&parse_schema(
            r#"{"type": "array", "items": {"type": "string", "format": "date"}}"#,
        ));
        assert!(dates.is_primitive);
        assert_eq!(dates.items.as_ref().map(|i| i.canonical.as_str()), Some("string"));

        let map = resolver.resolve_schema(&parse_schema(
            r#"{"type": "object", "additionalProperties": {"type": "integer"}}"#,
        ));
        assert_eq!(map.canonical, "object");
        assert!(map.is_primitive);
        assert!(map.is_container());
    }

    #[test]
    fn test_nested_containers() {
        let table = TypeMappingTable::discovery();
        let resolver = TypeResolver::new(&table);

        let info = resolver.resolve_schema(&parse_schema(
            r##"{"type": "array", "items": {"type": "array", "items": {"$ref": "#/definitions/Tag"}}}"##,
        ));
        assert!(!info.is_primitive);
        assert_eq!(info.complex_type.as_deref(), Some("Tag"));
    }

    #[test]
    fn test_untyped_schemas() {
        assert_eq!(
            TypeDescriptor::from_schema(&Schema::default()),
            TypeDescriptor::primitive("object", None)
        );
        assert_eq!(
            TypeDescriptor::from_schema(&parse_schema(r#"{"type": "array"}"#)),
            TypeDescriptor::primitive("array", None)
        );
    }

    #[test]
    fn test_parameter_descriptors() {
        let with_items =
            parse_param(r#"{"name": "ids", "type": "array", "items": {"type": "integer"}}"#);
        assert_eq!(
            TypeDescriptor::from_parameter(&with_items),
            Some(TypeDescriptor::Array(Box::new(TypeDescriptor::primitive("integer", None))))
        );

        let without_items = parse_param(r#"{"name": "ids", "type": "array"}"#);
        assert_eq!(TypeDescriptor::from_parameter(&without_items), None);

        let object = parse_param(r#"{"name": "filter", "type": "object"}"#);
        assert_eq!(TypeDescriptor::from_parameter(&object), None);

        let untyped = parse_param(r#"{"name": "q"}"#);
        assert_eq!(TypeDescriptor::from_parameter(&untyped), None);

        let scalar = parse_param(r#"{"name": "id", "type": "integer", "format": "int64"}"#);
        assert_eq!(
            TypeDescriptor::from_parameter(&scalar),
            Some(TypeDescriptor::primitive("integer", Some("int64")))
        );
    }

    #[test]
    fn test_declared_type() {
        assert_eq!(TypeDescriptor::Reference("Pet".into()).declared_type(), "Pet");
        assert_eq!(TypeDescriptor::primitive("integer", Some("int64")).declared_type(), "integer");
        let map = TypeDescriptor::Map(Box::new(TypeDescriptor::primitive("string", None)));
        assert_eq!(map.declared_type(), "object");
    }
}
