use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::errors::CoreError;
use crate::models::booking::{BookingRequest, PaymentRequest};
use crate::models::session::UserProfile;
use crate::models::trip::Trip;

use super::traits::TripService;
use super::wire::{
    AuthSession, BookingAck, ChatReply, ChatRequest, GenerateEnvelope, GenerateRequest,
    ItineraryEnvelope, ItineraryFetch, PaymentAck, RegisterRequest,
};

/// Request timeout for all remote calls. Transport policy, not core policy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of [`TripService`] backed by reqwest.
///
/// Thin by design: marshal the request, attach the bearer token when one is
/// stored, surface the raw response or a typed error. All retry, fallback,
/// and sequencing decisions live in the orchestrator, not here.
pub struct HttpTripService {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpTripService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    /// Client with a previously persisted bearer token already attached.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let service = Self::new(base_url);
        service.set_token(Some(token.into()));
        service
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Attach the stored bearer token, if any. Requests without a token go
    /// out unauthenticated; the server decides rejection.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match token.as_deref() {
            Some(t) => request.bearer_auth(t),
            None => request,
        }
    }

    /// Turn a non-2xx response into a typed API error carrying the body.
    async fn check(response: Response, endpoint: &str) -> Result<Response, CoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(CoreError::Api {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn parse<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, CoreError> {
        let status = response.status().as_u16();
        response.json::<T>().await.map_err(|e| CoreError::Api {
            endpoint: endpoint.to_string(),
            status,
            message: format!("Failed to parse response: {e}"),
        })
    }
}

#[async_trait]
impl TripService for HttpTripService {
    fn set_bearer_token(&self, token: Option<String>) {
        self.set_token(token);
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthSession, CoreError> {
        let endpoint = "/auth/login";
        let response = self
            .client
            .post(self.url(endpoint))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let response = Self::check(response, endpoint).await?;
        Self::parse(response, endpoint).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, CoreError> {
        let endpoint = "/auth/register";
        let response = self
            .authorize(self.client.post(self.url(endpoint)))
            .json(request)
            .send()
            .await?;
        let response = Self::check(response, endpoint).await?;
        Self::parse(response, endpoint).await
    }

    async fn generate_itinerary(&self, request: &GenerateRequest) -> Result<Trip, CoreError> {
        let endpoint = "/itinerary/generate";
        let response = self
            .authorize(self.client.post(self.url(endpoint)))
            .json(request)
            .send()
            .await?;
        let response = Self::check(response, endpoint).await?;
        let envelope: GenerateEnvelope = Self::parse(response, endpoint).await?;
        Ok(envelope.into_trip())
    }

    async fn list_trips(&self) -> Result<Vec<Trip>, CoreError> {
        let endpoint = "/trips";
        let response = self
            .authorize(self.client.get(self.url(endpoint)))
            .send()
            .await?;
        let response = Self::check(response, endpoint).await?;
        Self::parse(response, endpoint).await
    }

    async fn trip_itinerary(&self, trip_id: i64) -> Result<ItineraryFetch, CoreError> {
        let endpoint = format!("/trips/{trip_id}/itinerary");
        let response = self
            .authorize(self.client.get(self.url(&endpoint)))
            .send()
            .await?;
        let response = Self::check(response, &endpoint).await?;
        let envelope: ItineraryEnvelope = Self::parse(response, &endpoint).await?;
        Ok(envelope.normalize())
    }

    async fn update_itinerary(&self, trip_id: i64) -> Result<(), CoreError> {
        let endpoint = format!("/itinerary/update/{trip_id}");
        let response = self
            .authorize(self.client.put(self.url(&endpoint)))
            .send()
            .await?;
        // Ack body carries nothing we use.
        Self::check(response, &endpoint).await?;
        Ok(())
    }

    async fn book(&self, request: &BookingRequest) -> Result<BookingAck, CoreError> {
        let endpoint = "/book";
        let response = self
            .authorize(self.client.post(self.url(endpoint)))
            .json(request)
            .send()
            .await?;
        let response = Self::check(response, endpoint).await?;
        Self::parse(response, endpoint).await
    }

    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentAck, CoreError> {
        let endpoint = "/payment";
        let response = self
            .authorize(self.client.post(self.url(endpoint)))
            .json(request)
            .send()
            .await?;
        let response = Self::check(response, endpoint).await?;
        Self::parse(response, endpoint).await
    }

    async fn ai_insights(&self, trip_id: i64) -> Result<serde_json::Value, CoreError> {
        let endpoint = format!("/hackathon/ai/insights/{trip_id}");
        let response = self
            .authorize(self.client.get(self.url(&endpoint)))
            .send()
            .await?;
        let response = Self::check(response, &endpoint).await?;
        Self::parse(response, &endpoint).await
    }

    async fn ai_chat(&self, message: &str) -> Result<ChatReply, CoreError> {
        let endpoint = "/hackathon/ai/chat";
        let body = ChatRequest {
            message: message.to_string(),
        };
        let response = self
            .authorize(self.client.post(self.url(endpoint)))
            .json(&body)
            .send()
            .await?;
        let response = Self::check(response, endpoint).await?;
        Self::parse(response, endpoint).await
    }
}
