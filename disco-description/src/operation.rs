use indexmap::IndexMap;
use serde::Deserialize;

use crate::{ApiDescription, MaybeRef, Schema};

/// HTTP methods an operation can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// Get the uppercase method name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All operations declared under one path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
    pub head: Option<Operation>,
    pub options: Option<Operation>,

    /// Parameters shared by every operation of this path
    #[serde(default)]
    pub parameters: Vec<MaybeRef<Parameter>>,
}

impl PathItem {
    /// Iterate declared operations in method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Patch, &self.patch),
            (HttpMethod::Head, &self.head),
            (HttpMethod::Options, &self.options),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

/// One API endpoint bound to a path and method.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<MaybeRef<Parameter>>,

    /// Responses keyed by status code (or "default"), in declared order
    #[serde(default)]
    pub responses: IndexMap<String, MaybeRef<Response>>,
}

impl Operation {
    /// Parameters of this operation merged with those shared by its path.
    ///
    /// References are resolved against `description` first. Shared
    /// parameters come first; an operation parameter with the same name and
    /// location replaces the shared one in place. References that do not
    /// resolve take no part in the merge and are listed in `unresolved`.
    pub fn merged_parameters<'a>(
        &'a self,
        shared: &'a [MaybeRef<Parameter>],
        description: &'a ApiDescription,
    ) -> MergedParameters<'a> {
        let mut merged = MergedParameters::default();
        for entry in shared.iter().chain(&self.parameters) {
            let Some(param) = description.resolve_parameter(entry) else {
                merged.unresolved.extend(entry.reference());
                continue;
            };
            match merged.parameters.iter().position(|p| p.same_slot(param)) {
                Some(i) => merged.parameters[i] = param,
                None => merged.parameters.push(param),
            }
        }
        merged
    }
}

/// Parameters of one operation after references were resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedParameters<'a> {
    pub parameters: Vec<&'a Parameter>,
    /// References naming a parameter the description does not define.
    pub unresolved: Vec<&'a str>,
}

/// A response of an operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
    pub description: Option<String>,
    pub schema: Option<Schema>,
}

/// An operation input, discriminated by its `in` location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "in", rename_all = "camelCase")]
pub enum Parameter {
    Path(SerializableParameter),
    Query(SerializableParameter),
    Header(SerializableParameter),
    FormData(SerializableParameter),
    Body(BodyParameter),
}

impl Parameter {
    pub fn name(&self) -> &str {
        match self {
            Parameter::Path(p)
            | Parameter::Query(p)
            | Parameter::Header(p)
            | Parameter::FormData(p) => &p.name,
            Parameter::Body(p) => &p.name,
        }
    }

    /// The location keyword (e.g., "query", "body")
    pub fn location(&self) -> &'static str {
        match self {
            Parameter::Path(_) => "path",
            Parameter::Query(_) => "query",
            Parameter::Header(_) => "header",
            Parameter::FormData(_) => "formData",
            Parameter::Body(_) => "body",
        }
    }

    /// The serializable form, unless this is a body parameter.
    pub fn as_serializable(&self) -> Option<&SerializableParameter> {
        match self {
            Parameter::Path(p)
            | Parameter::Query(p)
            | Parameter::Header(p)
            | Parameter::FormData(p) => Some(p),
            Parameter::Body(_) => None,
        }
    }

    fn same_slot(&self, other: &Parameter) -> bool {
        self.name() == other.name() && self.location() == other.location()
    }
}

/// A path, query, header or form parameter with an explicit type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializableParameter {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    pub description: Option<String>,

    #[serde(rename = "type")]
    pub ty: Option<String>,

    pub format: Option<String>,

    /// Element descriptor for "array" (and value descriptor for "object")
    pub items: Option<Box<Schema>>,

    pub collection_format: Option<String>,
}

/// A body parameter carrying a full schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BodyParameter {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    pub description: Option<String>,

    #[serde(default)]
    pub schema: Schema,
}
