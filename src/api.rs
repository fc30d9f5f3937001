//! GraphQL-shaped operation surface.
//!
//! There is no query parser here: a request names an operation and supplies
//! variables, and the response is the standard `{data, errors}` envelope.
//! Service failures become `errors` entries; only a successful operation
//! populates `data`. Transport (HTTP, websockets) is a caller concern.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::service::ShopService;

/// Parameters accepted by the operation surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    /// Name of the operation to execute (e.g. `"addProductToCart"`).
    pub operation_name: String,
    /// Operation arguments as a JSON object.
    #[serde(default)]
    pub variables: Value,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse {
    /// Operation result on success.
    pub data: Option<Value>,
    /// Errors raised while executing; empty on success.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlErrorEntry>,
}

/// A single entry in the response `errors` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlErrorEntry {
    /// Human-readable description of the failure.
    pub message: String,
}

impl GraphQlResponse {
    fn data(value: Value) -> Self {
        Self { data: Some(value), errors: Vec::new() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { data: None, errors: vec![GraphQlErrorEntry { message: message.into() }] }
    }
}

/// Executes one operation against the service.
///
/// Unknown operation names and missing arguments are reported as entries in
/// the response `errors` list, never as Rust-level failures.
pub async fn execute(service: &ShopService, request: &GraphQlRequest) -> GraphQlResponse {
    let vars = &request.variables;
    match request.operation_name.as_str() {
        "getProduct" => match string_arg(vars, "productId") {
            Ok(product_id) => respond(service.get_product(&product_id).await),
            Err(response) => response,
        },
        "getAllProducts" => respond(service.get_all_products().await),
        "getCart" => match string_arg(vars, "cartId") {
            Ok(cart_id) => respond(service.get_cart(&cart_id).await),
            Err(response) => response,
        },
        "createCart" => respond(service.create_cart().await),
        "addProductToCart" => {
            match (string_arg(vars, "cartId"), string_arg(vars, "productId")) {
                (Ok(cart_id), Ok(product_id)) => {
                    respond(service.add_product_to_cart(&cart_id, &product_id).await)
                }
                (Err(response), _) | (_, Err(response)) => response,
            }
        }
        "deleteProductFromCart" => {
            match (string_arg(vars, "cartId"), string_arg(vars, "cartItemId")) {
                (Ok(cart_id), Ok(cart_item_id)) => {
                    respond(service.delete_product_from_cart(&cart_id, &cart_item_id).await)
                }
                (Err(response), _) | (_, Err(response)) => response,
            }
        }
        "deletedCart" => match string_arg(vars, "cartId") {
            Ok(cart_id) => respond(service.delete_cart(&cart_id).await),
            Err(response) => response,
        },
        "deleteProduct" => match string_arg(vars, "productId") {
            Ok(product_id) => respond(service.delete_product(&product_id).await),
            Err(response) => response,
        },
        other => GraphQlResponse::error(format!("unknown operation `{other}`")),
    }
}

fn string_arg(variables: &Value, name: &str) -> Result<String, GraphQlResponse> {
    variables
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| GraphQlResponse::error(format!("missing required argument `{name}`")))
}

fn respond<T: Serialize>(result: Result<T, ApiError>) -> GraphQlResponse {
    match result {
        Ok(value) => match serde_json::to_value(value) {
            Ok(json) => GraphQlResponse::data(json),
            Err(err) => GraphQlResponse::error(err.to_string()),
        },
        Err(err) => GraphQlResponse::error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use super::*;
    use crate::config::ServiceConfig;
    use crate::context::ServiceContext;
    use crate::model::Product;
    use crate::store::RecordStore;

    const ROOT: &str = "/data";

    async fn service_with_product() -> ShopService {
        let ctx = ServiceContext::in_memory();
        let store = RecordStore::new(&ctx, Path::new(ROOT));
        let product =
            Product { id: "p1".to_string(), name: "Bananas".to_string(), price: 10.0 };
        store.save_product(&product).await.unwrap();
        ShopService::new(ctx, ServiceConfig::new(ROOT))
    }

    fn request(operation: &str, variables: Value) -> GraphQlRequest {
        GraphQlRequest { operation_name: operation.to_string(), variables }
    }

    #[tokio::test]
    async fn get_product_populates_data() {
        let service = service_with_product().await;

        let response =
            execute(&service, &request("getProduct", json!({"productId": "p1"}))).await;

        assert!(response.errors.is_empty());
        let data = response.data.unwrap();
        assert_eq!(data["id"], "p1");
        assert_eq!(data["name"], "Bananas");
        assert_eq!(data["price"], 10.0);
    }

    #[tokio::test]
    async fn not_found_surfaces_in_errors() {
        let service = service_with_product().await;

        let response =
            execute(&service, &request("getProduct", json!({"productId": "ghost"}))).await;

        assert!(response.data.is_none());
        assert_eq!(response.errors[0].message, "cannot find that product");
    }

    #[tokio::test]
    async fn cart_lifecycle_through_the_envelope() {
        let service = service_with_product().await;

        let created = execute(&service, &request("createCart", json!({}))).await;
        let cart_id = created.data.unwrap()["id"].as_str().unwrap().to_string();

        let added = execute(
            &service,
            &request("addProductToCart", json!({"cartId": &cart_id, "productId": "p1"})),
        )
        .await;
        assert_eq!(added.data.unwrap()["totalSum"], 10.0);

        let deleted =
            execute(&service, &request("deletedCart", json!({"cartId": &cart_id}))).await;
        let data = deleted.data.unwrap();
        assert_eq!(data["deletedId"], cart_id);
        assert_eq!(data["success"], true);
    }

    #[tokio::test]
    async fn unknown_operation_is_a_request_error() {
        let service = service_with_product().await;

        let response = execute(&service, &request("dropAllTables", json!({}))).await;

        assert!(response.data.is_none());
        assert!(response.errors[0].message.contains("unknown operation"));
    }

    #[tokio::test]
    async fn missing_argument_is_a_request_error() {
        let service = service_with_product().await;

        let response = execute(&service, &request("getCart", json!({}))).await;

        assert!(response.data.is_none());
        assert!(response.errors[0].message.contains("cartId"));
    }

    #[test]
    fn request_envelope_uses_camel_case_operation_name() {
        let request: GraphQlRequest =
            serde_json::from_str(r#"{"operationName":"getAllProducts"}"#).unwrap();
        assert_eq!(request.operation_name, "getAllProducts");
        assert!(request.variables.is_null());
    }
}
