use crate::api::{ApiClient, ApiResult, ContactRequest};

pub const SENT_NOTICE: &str = "Thanks! Your message has been sent.";

/// Feedback shown under the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(s) | Self::Error(s) => s,
        }
    }
}

/// Contents of the three contact inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<ContactRequest, String> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err("Please fill in your name, email and message.".to_string());
        }
        if !email.contains('@') {
            return Err("Please enter a valid email address.".to_string());
        }

        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Clears the inputs on success; keeps them for another try on failure.
    pub fn apply(&mut self, result: ApiResult<()>) -> Notice {
        match result {
            Ok(()) => {
                *self = Self::default();
                Notice::Success(SENT_NOTICE.to_string())
            }
            Err(e) => Notice::Error(e.to_string()),
        }
    }

    /// Validates and posts the form. Invalid input never reaches the network.
    pub async fn submit(&mut self, api: &ApiClient) -> Notice {
        let req = match self.validate() {
            Ok(req) => req,
            Err(msg) => return Notice::Error(msg),
        };
        let result = api.submit_contact(&req).await;
        self.apply(result)
    }
}
