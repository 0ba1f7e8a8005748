//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_transact`] to assert
//! behavior and answer on the actor's behalf.

use crate::actor_framework::{Entity, Filter, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// Nothing serves the receiver except the test itself, so the test decides
/// what each request answers (success, failure, or never).
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T::Id, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, Response<Vec<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Transact request
pub async fn expect_transact<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::Action)>, Response<Vec<T::ActionResult>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Transact { ops, respond_to }) => Some((ops, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{CartClient, ProductClient, UserClient};
    use crate::domain::{Cart, Role, User, UserCreate, UserId};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let (cart_inner, _cart_rx) = create_mock_client::<Cart>(10);
        let (product_inner, _product_rx) = create_mock_client(10);
        let user_client = UserClient::new(client, CartClient::new(cart_inner, ProductClient::new(product_inner)));

        let get_task = tokio::spawn(async move { user_client.get_user(UserId(1)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, UserId(1));
        let user = User {
            id: UserId(1),
            username: "test".to_string(),
            email: "test@example.com".to_string(),
            role: Role::Customer,
        };
        responder.send(Ok(Some(user.clone()))).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result, Ok(user));
    }

    #[tokio::test]
    async fn test_register_provisions_cart() {
        let (user_inner, mut user_rx) = create_mock_client::<User>(10);
        let (cart_inner, mut cart_rx) = create_mock_client::<Cart>(10);
        let (product_inner, _product_rx) = create_mock_client(10);
        let user_client = UserClient::new(user_inner, CartClient::new(cart_inner, ProductClient::new(product_inner)));

        let task = tokio::spawn(async move { user_client.register(UserCreate::customer("alice", "a@example.com")).await });

        let (_, responder) = expect_query(&mut user_rx).await.expect("Expected uniqueness Query");
        responder.send(Ok(Vec::new())).unwrap();

        let (params, responder) = expect_create(&mut user_rx).await.expect("Expected User Create");
        assert_eq!(params.username, "alice");
        responder.send(Ok(UserId(3))).unwrap();

        let (params, responder) = expect_create(&mut cart_rx).await.expect("Expected Cart Create");
        assert_eq!(params.user_id, UserId(3));
        responder.send(Ok(crate::domain::CartId(1))).unwrap();

        let (_, responder) = expect_get(&mut user_rx).await.expect("Expected User Get");
        let user = User {
            id: UserId(3),
            username: "alice".to_string(),
            email: "a@example.com".to_string(),
            role: Role::Customer,
        };
        responder.send(Ok(Some(user))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().id, UserId(3));
    }
}
