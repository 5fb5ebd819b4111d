//! Parsing tests over a complete description document.

use std::str::FromStr;

use discogen_description::{AdditionalProperties, ApiDescription, Error, HttpMethod, MaybeRef};

const PETSTORE: &str = r##"{
    "swagger": "2.0",
    "info": {"title": "Petstore", "version": "1.0.0"},
    "basePath": "/v2",
    "definitions": {
        "Pet": {
            "required": ["name"],
            "properties": {
                "id": {"type": "integer", "format": "int64", "readOnly": true},
                "name": {"type": "string", "example": "doggie"},
                "tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}},
                "attributes": {"type": "object", "additionalProperties": {"type": "string"}},
                "extra": {"type": "object", "additionalProperties": true}
            }
        },
        "Tag": {"properties": {"label": {"type": "string"}}}
    },
    "paths": {
        "/pets/{petId}": {
            "parameters": [{"in": "path", "name": "petId", "required": true, "type": "integer", "format": "int64"}],
            "get": {"tags": ["pets"], "responses": {"200": {"description": "ok", "schema": {"$ref": "#/definitions/Pet"}}}},
            "delete": {
                "parameters": [
                    {"in": "header", "name": "api_key", "type": "string"},
                    {"in": "path", "name": "petId", "required": true, "type": "string"}
                ]
            }
        },
        "/pets": {
            "get": {
                "parameters": [{"$ref": "#/parameters/limit"}],
                "responses": {"200": {"$ref": "#/responses/PetList"}}
            },
            "post": {
                "consumes": ["application/json"],
                "parameters": [
                    {"in": "body", "name": "pet", "required": true, "schema": {"$ref": "#/definitions/Pet"}},
                    {"in": "query", "name": "status", "type": "array", "items": {"type": "string"}, "collectionFormat": "multi"},
                    {"in": "formData", "name": "file", "type": "file"}
                ]
            }
        }
    },
    "parameters": {
        "limit": {"in": "query", "name": "limit", "type": "integer", "format": "int32"}
    },
    "responses": {
        "PetList": {"description": "pets", "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}}}
    }
}"##;

fn petstore() -> ApiDescription {
    ApiDescription::from_str(PETSTORE).expect("Failed to parse petstore")
}

#[test]
fn test_definitions_keep_declared_order() {
    let description = petstore();

    let pet = description.model("Pet").expect("Pet definition");
    let properties: Vec<_> = pet.properties.keys().map(String::as_str).collect();
    assert_eq!(properties, ["id", "name", "tags", "attributes", "extra"]);
    assert!(pet.is_required("name"));
    assert!(!pet.is_required("id"));

    assert_eq!(pet.properties["id"].read_only, Some(true));
    assert_eq!(
        pet.properties["tags"].items.as_ref().and_then(|i| i.referenced_model()),
        Some("Tag")
    );
    assert!(pet.properties["attributes"].map_values().is_some());
    assert_eq!(
        pet.properties["extra"].additional_properties,
        Some(AdditionalProperties::Allowed(true))
    );
}

#[test]
fn test_operations_and_parameters() {
    let description = petstore();
    assert_eq!(description.base_path.as_deref(), Some("/v2"));
    assert_eq!(description.operation_count(), 4);

    let item = &description.paths["/pets/{petId}"];
    let methods: Vec<_> = item.operations().map(|(method, _)| method).collect();
    assert_eq!(methods, [HttpMethod::Get, HttpMethod::Delete]);

    let delete = item.delete.as_ref().expect("delete operation");
    let merged = delete.merged_parameters(&item.parameters, &description).parameters;
    let names: Vec<_> = merged.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["petId", "api_key"]);
    let pet_id = merged[0].as_serializable().expect("path parameter");
    assert_eq!(pet_id.ty.as_deref(), Some("string"));

    let post = description.paths["/pets"].post.as_ref().expect("post operation");
    let params: Vec<_> = post.parameters.iter().filter_map(MaybeRef::inline).collect();
    let locations: Vec<_> = params.iter().map(|p| p.location()).collect();
    assert_eq!(locations, ["body", "query", "formData"]);
    let status = params[1].as_serializable().expect("query parameter");
    assert_eq!(status.collection_format.as_deref(), Some("multi"));
}

#[test]
fn test_shared_parameters_and_responses() {
    let description = petstore();
    let list = description.paths["/pets"].get.as_ref().expect("get operation");

    let merged = list.merged_parameters(&[], &description);
    assert!(merged.unresolved.is_empty());
    let limit = merged.parameters[0].as_serializable().expect("query parameter");
    assert_eq!(merged.parameters[0].location(), "query");
    assert_eq!(limit.format.as_deref(), Some("int32"));

    let response = description
        .resolve_response(&list.responses["200"])
        .expect("shared response");
    assert_eq!(
        response.schema.as_ref().and_then(|s| s.ty.as_deref()),
        Some("array")
    );
}

#[test]
fn test_invalid_document() {
    let err =
        ApiDescription::from_str_with_filename(r#"{"definitions": {"Pet": 7}}"#, "pets.json")
            .expect_err("a definition must be an object");

    let Error::Parse { src, span, .. } = *err;
    assert_eq!(src.name(), "pets.json");
    assert!(span.is_some());
}
