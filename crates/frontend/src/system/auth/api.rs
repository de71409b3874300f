use contracts::shared::api_response::ApiMessage;
use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};

use crate::shared::api_client::{ApiClient, Gate};

/// Login with email and password
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, String> {
    client
        .post_json("/auth/login", request, Gate::Open, "Login failed. Please try again.")
        .await
}

/// Register a new admin account; the admin secret gates the endpoint
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<(), String> {
    client
        .post_json::<_, ApiMessage>(
            "/auth/register",
            request,
            Gate::Open,
            "Registration failed. Please try again.",
        )
        .await
        .map(|_| ())
}
