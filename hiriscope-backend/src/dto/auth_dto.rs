use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "All fields are required."))]
    pub name: String,
    #[validate(email(message = "A valid email is required."))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

impl RegisterRequest {
    /// Trims name and email and lower-cases the email.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email and password are required."))]
    pub email: String,
    #[validate(length(min = 1, message = "Email and password are required."))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: SessionUser,
    pub token: String,
}
