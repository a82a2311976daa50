use std::env;

pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "Thank you I have placed your appointment.";
pub const DEFAULT_DELEGATE_MESSAGE: &str = "Thanks, got it.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Sent with every Close response. Nothing is actually booked.
    pub confirmation_message: String,
    pub delegate_message: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            confirmation_message: env::var("CONFIRMATION_MESSAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CONFIRMATION_MESSAGE.to_string()),
            delegate_message: env::var("DELEGATE_MESSAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DELEGATE_MESSAGE.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
            delegate_message: DEFAULT_DELEGATE_MESSAGE.to_string(),
        }
    }
}
