//! Order endpoints
//!
//! Status transitions are validated client-side against the current order
//! status before the action request is issued.

use crate::{AdminClient, ClientError, ClientResult, HttpTransport};
use shared::models::{Order, OrderAction};
use shared::response::Paginated;

impl<T: HttpTransport> AdminClient<T> {
    pub async fn list_orders(&self, page: Option<u32>) -> ClientResult<Paginated<Order>> {
        let path = match page {
            Some(page) => format!("/orders/?page={}", page),
            None => "/orders/".to_string(),
        };
        self.transport().get(&path).await
    }

    pub async fn get_order(&self, id: i64) -> ClientResult<Order> {
        self.transport().get(&format!("/orders/{}/", id)).await
    }

    /// Apply a lifecycle action to an order.
    ///
    /// Fetches the order first and rejects transitions its current status
    /// does not allow, without issuing the action request.
    pub async fn order_action(&self, id: i64, action: OrderAction) -> ClientResult<Order> {
        let order = self.get_order(id).await?;

        if !order.status.can_apply(action) {
            return Err(ClientError::Validation(format!(
                "cannot {} order {} in status {}",
                action.as_str(),
                id,
                order.status.as_str()
            )));
        }

        self.transport()
            .post_empty(&format!("/orders/{}/{}/", id, action.as_str()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::AdminClient;
    use crate::transport::stub::StubTransport;
    use serde_json::json;
    use shared::models::{OrderAction, OrderStatus};

    fn order_json(id: i64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "number": "ORD-1001",
            "customer_name": "Dana",
            "items": [],
            "status": status
        })
    }

    #[tokio::test]
    async fn test_action_on_legal_transition() {
        let transport = StubTransport::new();
        transport.enqueue(order_json(5, "pending"));
        transport.enqueue(order_json(5, "confirmed"));
        let client = AdminClient::with_transport(transport);

        let order = client.order_action(5, OrderAction::Confirm).await.unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(
            client.transport().paths(),
            vec!["/orders/5/", "/orders/5/confirm/"]
        );
    }

    #[tokio::test]
    async fn test_illegal_transition_is_rejected_before_the_action_call() {
        let transport = StubTransport::new();
        transport.enqueue(order_json(5, "delivered"));
        let client = AdminClient::with_transport(transport);

        let err = client.order_action(5, OrderAction::Cancel).await.unwrap_err();
        assert!(matches!(err, crate::ClientError::Validation(_)));
        // Only the status fetch went out.
        assert_eq!(client.transport().paths(), vec!["/orders/5/"]);
    }
}
