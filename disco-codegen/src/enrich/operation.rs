use discogen_core::{capitalize, sanitize_name};
use discogen_description::{
    HttpMethod, MaybeRef, Operation as OperationDef, Parameter as ParameterDef, Response,
};
use discogen_ir::{Operation, Parameter};
use indexmap::IndexMap;

use super::Enricher;

/// Resource name of operations without tags.
const DEFAULT_RESOURCE: &str = "default";

impl Enricher<'_> {
    /// Enrich one operation.
    ///
    /// `shared` holds the parameters declared on the operation's path.
    /// The return type and `return_format` come from the success response
    /// (see [`success_response`]). Parameter and response references that
    /// do not resolve are reported and skipped.
    pub fn operation(
        &mut self,
        path: &str,
        method: HttpMethod,
        op: &OperationDef,
        shared: &[MaybeRef<ParameterDef>],
    ) -> Operation {
        let description = self.description;
        let operation_id = op
            .operation_id
            .clone()
            .unwrap_or_else(|| generate_operation_id(path, method));
        let location = format!("paths.{}.{}", path, method.as_str().to_lowercase());
        tracing::trace!(operation = %operation_id, "enriching operation");

        let merged = op.merged_parameters(shared, description);
        for reference in merged.unresolved {
            self.warn_unresolved_reference(reference, &format!("{}.parameters", location));
        }
        let parameters: Vec<Parameter> = merged
            .parameters
            .into_iter()
            .map(|param| self.parameter(param, &location))
            .collect();

        let response = success_response(&op.responses).and_then(|(code, response)| {
            let resolved = description.resolve_response(response);
            if resolved.is_none()
                && let Some(reference) = response.reference()
            {
                let response_location = format!("{}.responses.{}", location, code);
                self.warn_unresolved_reference(reference, &response_location);
            }
            resolved
        });
        let schema = response.and_then(|r| r.schema.as_ref());
        if schema.is_none() {
            tracing::debug!(operation = %operation_id, "no success response schema");
        }

        let return_type = schema.map(|s| self.resolver.resolve_schema(s));
        if let Some(info) = &return_type {
            self.check_reference(info, &format!("{}.responses", location));
        }

        let tag = op.tags.first().map(String::as_str).unwrap_or(DEFAULT_RESOURCE);

        Operation {
            operation_id,
            http_method: method.as_str().to_string(),
            path: path.to_string(),
            resource: self.naming.resource_name(tag),
            summary: op.summary.clone(),
            description: op.description.clone(),
            parameters,
            return_type,
            return_format: schema.and_then(|s| s.format.clone()),
        }
    }
}

/// Pick the response that describes a successful call, with its status.
///
/// The first response in declared order whose status is in 200..=299; when
/// there is none, the `default` response.
pub fn success_response(
    responses: &IndexMap<String, MaybeRef<Response>>,
) -> Option<(&str, &MaybeRef<Response>)> {
    responses
        .iter()
        .find(|(code, _)| {
            code.parse::<u16>()
                .is_ok_and(|status| (200..=299).contains(&status))
        })
        .or_else(|| responses.get_key_value("default"))
        .map(|(code, response)| (code.as_str(), response))
}

/// Build an operation id from a path and method (e.g., "GET /users/{id}" -> "usersIdGet").
///
/// The root path yields "root" as its only segment.
pub fn generate_operation_id(path: &str, method: HttpMethod) -> String {
    let unbraced = path.replace(['{', '}'], "");
    let mut segments: Vec<&str> = unbraced.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        segments.push("root");
    }

    let method = method.as_str().to_lowercase();
    let id: String = segments
        .into_iter()
        .chain(std::iter::once(method.as_str()))
        .flat_map(|segment| {
            sanitize_name(segment)
                .split('_')
                .map(capitalize)
                .collect::<Vec<_>>()
        })
        .collect();

    let mut chars = id.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
