//! Service generation: one RPC per (path, method) operation.

use tracing::trace;

use super::api::{ApiGraph, Content, OperationDescriptor, SchemaNode};
use super::types::{HttpRule, RpcDecl, ServiceDecl};
use super::utils::synthesize_rpc_name;

/// Message used when an operation has no request or response payload.
pub const EMPTY_MESSAGE: &str = "google.protobuf.Empty";

/// Build the service block, paths in order and methods in visiting order.
pub fn codegen_service(graph: &ApiGraph, service_name: &str) -> ServiceDecl {
    ServiceDecl {
        name: service_name.to_string(),
        rpcs: graph.operations().map(codegen_rpc).collect(),
    }
}

/// Build the RPC declaration for one operation.
pub fn codegen_rpc(op: &OperationDescriptor) -> RpcDecl {
    let name = rpc_name(op);
    let request = resolve_request_type(op, &name);
    let response = resolve_response_type(op, &name);

    trace!(
        rpc = %name,
        method = op.method.as_str(),
        path = %op.path,
        request = %request,
        response = %response,
        "rpc"
    );

    let http = HttpRule {
        method: op.method,
        path: op.path.clone(),
        body: op.method.carries_body(),
    };
    RpcDecl {
        name,
        request,
        response,
        http,
    }
}

/// The operation id, or a name synthesized from method and path.
///
/// A blank operation id counts as absent.
pub fn rpc_name(op: &OperationDescriptor) -> String {
    match op.operation_id.as_deref() {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => synthesize_rpc_name(op.method.as_lower(), &op.path),
    }
}

/// Request message: the first content entry of the request body.
pub fn resolve_request_type(op: &OperationDescriptor, rpc_name: &str) -> String {
    op.request_body
        .as_ref()
        .and_then(|content| payload_type(content, &format!("{rpc_name}Request")))
        .unwrap_or_else(|| EMPTY_MESSAGE.to_string())
}

/// Response message: the first `2xx` or `default` response in table order.
pub fn resolve_response_type(op: &OperationDescriptor, rpc_name: &str) -> String {
    op.responses
        .iter()
        .find(|(status, _)| status.starts_with('2') || status.as_str() == "default")
        .and_then(|(_, content)| payload_type(content, &format!("{rpc_name}Response")))
        .unwrap_or_else(|| EMPTY_MESSAGE.to_string())
}

/// Type of the first content entry: a referenced schema name as written,
/// anything else the synthesized `fallback`. `None` when there is no content.
fn payload_type(content: &Content, fallback: &str) -> Option<String> {
    let (_, schema) = content.first()?;
    match schema {
        Some(SchemaNode::Reference { target }) => Some(target.clone()),
        _ => Some(fallback.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::openapi::ir::api::{HttpMethod, ScalarType};
    use indexmap::IndexMap;

    fn op(method: HttpMethod, path: &str, operation_id: Option<&str>) -> OperationDescriptor {
        OperationDescriptor {
            path: path.to_string(),
            method,
            operation_id: operation_id.map(str::to_string),
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    fn content_of(schema: Option<SchemaNode>) -> Content {
        let mut content = Content::new();
        content.insert("application/json".to_string(), schema);
        content
    }

    fn reference(name: &str) -> SchemaNode {
        SchemaNode::Reference {
            target: name.to_string(),
        }
    }

    #[test]
    fn test_get_user_signature() {
        let mut get = op(HttpMethod::Get, "/users/{id}", Some("GetUser"));
        get.request_body = Some(content_of(Some(reference("UserRequest"))));
        get.responses
            .insert("200".into(), content_of(Some(reference("UserResponse"))));

        let rpc = codegen_rpc(&get);
        assert_eq!(rpc.name, "GetUser");
        assert_eq!(rpc.request, "UserRequest");
        assert_eq!(rpc.response, "UserResponse");
        assert_eq!(rpc.http.method, HttpMethod::Get);
        assert_eq!(rpc.http.path, "/users/{id}");
        assert!(!rpc.http.body);
    }

    #[test]
    fn test_synthesized_name_and_body_rule() {
        let rpc = codegen_rpc(&op(HttpMethod::Post, "/users/{id}/orders", None));
        assert_eq!(rpc.name, "PostUsers_id_orders");
        assert!(rpc.http.body);
        assert_eq!(rpc.request, EMPTY_MESSAGE);
        assert_eq!(rpc.response, EMPTY_MESSAGE);

        let blank = codegen_rpc(&op(HttpMethod::Delete, "/items/{itemId}", Some("  ")));
        assert_eq!(blank.name, "DeleteItems_itemId");
        assert!(!blank.http.body);
    }

    #[test]
    fn test_body_rule_only_for_post_put_patch() {
        for method in HttpMethod::ALL {
            let rpc = codegen_rpc(&op(method, "/x", Some("X")));
            let expected = matches!(method, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch);
            assert_eq!(rpc.http.body, expected, "{method:?}");
        }
    }

    #[test]
    fn test_inline_payloads_get_synthesized_names() {
        let mut create = op(HttpMethod::Post, "/orders", Some("CreateOrder"));
        create.request_body = Some(content_of(Some(SchemaNode::Scalar(ScalarType::String))));
        create.responses.insert("201".into(), content_of(None));

        let rpc = codegen_rpc(&create);
        assert_eq!(rpc.request, "CreateOrderRequest");
        assert_eq!(rpc.response, "CreateOrderResponse");
    }

    #[test]
    fn test_reference_names_are_not_capitalized() {
        let mut get = op(HttpMethod::Get, "/pets", Some("listPets"));
        get.responses
            .insert("200".into(), content_of(Some(reference("petList"))));
        assert_eq!(codegen_rpc(&get).response, "petList");
    }

    #[test]
    fn test_empty_request_content_is_empty_message() {
        let mut post = op(HttpMethod::Post, "/ping", Some("Ping"));
        post.request_body = Some(Content::new());
        assert_eq!(codegen_rpc(&post).request, EMPTY_MESSAGE);
    }

    #[test]
    fn test_first_matching_response_wins_in_table_order() {
        let mut get = op(HttpMethod::Get, "/a", Some("A"));
        get.responses
            .insert("404".into(), content_of(Some(reference("NotFound"))));
        get.responses
            .insert("default".into(), content_of(Some(reference("Fallback"))));
        get.responses
            .insert("200".into(), content_of(Some(reference("Ok"))));
        assert_eq!(codegen_rpc(&get).response, "Fallback");

        // A matching response without content stops the search.
        let mut get = op(HttpMethod::Get, "/b", Some("B"));
        get.responses.insert("204".into(), Content::new());
        get.responses
            .insert("200".into(), content_of(Some(reference("Ok"))));
        assert_eq!(codegen_rpc(&get).response, EMPTY_MESSAGE);

        let mut get = op(HttpMethod::Get, "/c", Some("C"));
        get.responses
            .insert("500".into(), content_of(Some(reference("Oops"))));
        assert_eq!(codegen_rpc(&get).response, EMPTY_MESSAGE);
    }

    #[test]
    fn test_service_keeps_operation_order() {
        let mut paths = IndexMap::new();
        paths.insert(
            "/b".to_string(),
            vec![op(HttpMethod::Get, "/b", Some("GetB")), op(HttpMethod::Post, "/b", Some("PostB"))],
        );
        paths.insert("/a".to_string(), vec![op(HttpMethod::Get, "/a", Some("GetA"))]);
        let graph = ApiGraph {
            schemas: IndexMap::new(),
            paths,
        };

        let service = codegen_service(&graph, "ApiService");
        let names: Vec<_> = service.rpcs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["GetB", "PostB", "GetA"]);
    }
}
