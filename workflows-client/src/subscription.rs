//! Billing plan and subscription operations.

use crate::ClientFuture;
use crate::error::{api_failure, transport_failure, unexpected_response, unrecognized_response};
use std::sync::Arc;
use workflows_core::v1::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, DeleteSubscriptionResponse,
    GetSubscriptionResponse, ListPlansResponse, Operations, PlanList, Subscription,
};

const LIST_PLANS: &str = "Subscription.ListPlans";
const READ: &str = "Subscription.Read";
const CREATE: &str = "Subscription.Create";
const DELETE: &str = "Subscription.Delete";

/// Operations on the account's billing subscription.
pub trait SubscriptionApi: Send + Sync {
    /// List the available plans.
    fn list_plans(&self) -> ClientFuture<'_, PlanList>;

    /// Get the current subscription.
    fn read(&self) -> ClientFuture<'_, Subscription>;

    /// Subscribe to a plan.
    fn create(&self, request: CreateSubscriptionRequest) -> ClientFuture<'_, ()>;

    /// Cancel the subscription.
    fn delete(&self) -> ClientFuture<'_, ()>;
}

/// [`SubscriptionApi`] over an [`Operations`] client.
#[derive(Debug)]
pub struct SubscriptionOp<C: Operations + ?Sized> {
    client: Arc<C>,
}

impl<C: Operations + ?Sized> SubscriptionOp<C> {
    /// Create the operation group. Performs no I/O.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C: Operations + ?Sized> Clone for SubscriptionOp<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: Operations + ?Sized> SubscriptionApi for SubscriptionOp<C> {
    fn list_plans(&self) -> ClientFuture<'_, PlanList> {
        Box::pin(async move {
            match self.client.list_plans().await {
                Ok(ListPlansResponse::Ok(plans)) => Ok(plans),
                Ok(ListPlansResponse::BadRequest(e)) => Err(api_failure(LIST_PLANS, 400, e)),
                Ok(ListPlansResponse::Unauthorized(e)) => Err(api_failure(LIST_PLANS, 401, e)),
                Ok(ListPlansResponse::Forbidden(e)) => Err(api_failure(LIST_PLANS, 403, e)),
                Ok(ListPlansResponse::NotFound(e)) => Err(api_failure(LIST_PLANS, 404, e)),
                Ok(ListPlansResponse::InternalServerError(e)) => {
                    Err(api_failure(LIST_PLANS, 500, e))
                }
                Ok(ListPlansResponse::Unexpected(r)) => Err(unexpected_response(LIST_PLANS, r)),
                Ok(_) => Err(unrecognized_response(LIST_PLANS)),
                Err(err) => Err(transport_failure(LIST_PLANS, err)),
            }
        })
    }

    fn read(&self) -> ClientFuture<'_, Subscription> {
        Box::pin(async move {
            match self.client.get_subscription().await {
                Ok(GetSubscriptionResponse::Ok(subscription)) => Ok(subscription),
                Ok(GetSubscriptionResponse::BadRequest(e)) => Err(api_failure(READ, 400, e)),
                Ok(GetSubscriptionResponse::Unauthorized(e)) => Err(api_failure(READ, 401, e)),
                Ok(GetSubscriptionResponse::Forbidden(e)) => Err(api_failure(READ, 403, e)),
                Ok(GetSubscriptionResponse::NotFound(e)) => Err(api_failure(READ, 404, e)),
                Ok(GetSubscriptionResponse::InternalServerError(e)) => {
                    Err(api_failure(READ, 500, e))
                }
                Ok(GetSubscriptionResponse::Unexpected(r)) => Err(unexpected_response(READ, r)),
                Ok(_) => Err(unrecognized_response(READ)),
                Err(err) => Err(transport_failure(READ, err)),
            }
        })
    }

    fn create(&self, request: CreateSubscriptionRequest) -> ClientFuture<'_, ()> {
        Box::pin(async move {
            match self.client.create_subscription(request).await {
                Ok(CreateSubscriptionResponse::NoContent) => Ok(()),
                Ok(CreateSubscriptionResponse::BadRequest(e)) => Err(api_failure(CREATE, 400, e)),
                Ok(CreateSubscriptionResponse::Unauthorized(e)) => {
                    Err(api_failure(CREATE, 401, e))
                }
                Ok(CreateSubscriptionResponse::Forbidden(e)) => Err(api_failure(CREATE, 403, e)),
                Ok(CreateSubscriptionResponse::NotFound(e)) => Err(api_failure(CREATE, 404, e)),
                Ok(CreateSubscriptionResponse::InternalServerError(e)) => {
                    Err(api_failure(CREATE, 500, e))
                }
                Ok(CreateSubscriptionResponse::Unexpected(r)) => {
                    Err(unexpected_response(CREATE, r))
                }
                Ok(_) => Err(unrecognized_response(CREATE)),
                Err(err) => Err(transport_failure(CREATE, err)),
            }
        })
    }

    fn delete(&self) -> ClientFuture<'_, ()> {
        Box::pin(async move {
            match self.client.delete_subscription().await {
                Ok(DeleteSubscriptionResponse::NoContent) => Ok(()),
                Ok(DeleteSubscriptionResponse::BadRequest(e)) => Err(api_failure(DELETE, 400, e)),
                Ok(DeleteSubscriptionResponse::Unauthorized(e)) => {
                    Err(api_failure(DELETE, 401, e))
                }
                Ok(DeleteSubscriptionResponse::Forbidden(e)) => Err(api_failure(DELETE, 403, e)),
                Ok(DeleteSubscriptionResponse::NotFound(e)) => Err(api_failure(DELETE, 404, e)),
                Ok(DeleteSubscriptionResponse::InternalServerError(e)) => {
                    Err(api_failure(DELETE, 500, e))
                }
                Ok(DeleteSubscriptionResponse::Unexpected(r)) => {
                    Err(unexpected_response(DELETE, r))
                }
                Ok(_) => Err(unrecognized_response(DELETE)),
                Err(err) => Err(transport_failure(DELETE, err)),
            }
        })
    }
}
