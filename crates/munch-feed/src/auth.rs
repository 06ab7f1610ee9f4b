//! Phone login with a server-issued OTP, and customer sign-up.

use serde_json::Value;

use crate::client::{CreateCustomerRequest, FeedClient, LoginRequest, CREATE_CUSTOMER_PATH, LOGIN_PATH};
use crate::error::FeedError;
use crate::raw::is_truthy;

/// OTP assumed when a successful login response does not carry one.
pub const FALLBACK_OTP: &str = "1234";
pub const OTP_LENGTH: usize = 4;

/// A pending login awaiting the code the customer received.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpChallenge {
    pub phone: String,
    server_otp: String,
}

impl std::fmt::Debug for OtpChallenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpChallenge")
            .field("phone", &self.phone)
            .field("server_otp", &"[redacted]")
            .finish()
    }
}

impl OtpChallenge {
    #[must_use]
    pub fn new(phone: impl Into<String>, server_otp: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            server_otp: server_otp.into(),
        }
    }

    /// Checks `entered` against the server OTP.
    ///
    /// # Errors
    ///
    /// [`FeedError::InvalidOtp`] unless `entered` is exactly four digits equal
    /// to the issued code.
    pub fn verify(&self, entered: &str) -> Result<(), FeedError> {
        let entered = entered.trim();
        if entered.len() != OTP_LENGTH || !entered.chars().all(|c| c.is_ascii_digit()) {
            return Err(FeedError::InvalidOtp);
        }
        if entered != self.server_otp {
            return Err(FeedError::InvalidOtp);
        }
        Ok(())
    }
}

/// Fields collected by the sign-up form. `email` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUp {
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
}

impl SignUp {
    fn validate(&self) -> Result<(), FeedError> {
        for (field, value) in [("name", &self.name), ("dob", &self.dob), ("phone", &self.phone)] {
            if value.trim().is_empty() {
                return Err(FeedError::MissingField { field });
            }
        }
        Ok(())
    }
}

fn message_of(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Text form of the OTP, which upstream sends as a string or a number.
fn otp_of(body: &Value) -> String {
    match body.get("data").and_then(|d| d.get(0)).and_then(|d| d.get("otp")) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => FALLBACK_OTP.to_owned(),
    }
}

impl FeedClient {
    /// Requests an OTP for `phone`.
    ///
    /// # Errors
    ///
    /// - [`FeedError::MissingField`] for a blank phone number.
    /// - [`FeedError::AuthRejected`] for a non-2xx status or a falsy
    ///   `success`/`Success` flag, carrying the server message when present.
    /// - Transport and timeout errors from the request.
    pub async fn login(&self, phone: &str) -> Result<OtpChallenge, FeedError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(FeedError::MissingField { field: "phone" });
        }

        let response = self.send(LOGIN_PATH, &LoginRequest { phone }).await?;
        // An unreadable body is treated like an empty object.
        let body = response.decode(LOGIN_PATH).unwrap_or(Value::Null);

        if !response.is_success() {
            return Err(FeedError::AuthRejected {
                message: message_of(&body, "message")
                    .unwrap_or_else(|| "Invalid phone number".to_owned()),
            });
        }
        let accepted = ["Success", "success"]
            .iter()
            .any(|k| body.get(*k).is_some_and(is_truthy));
        if !accepted {
            return Err(FeedError::AuthRejected {
                message: message_of(&body, "message")
                    .unwrap_or_else(|| "Please enter valid phone number".to_owned()),
            });
        }

        tracing::info!("login accepted, OTP issued");
        Ok(OtpChallenge::new(phone, otp_of(&body)))
    }

    /// Registers a new customer.
    ///
    /// # Errors
    ///
    /// - [`FeedError::MissingField`] when name, date of birth or phone is blank.
    /// - [`FeedError::AuthRejected`] for a non-2xx status. A message mentioning
    ///   "already" becomes "Customer already registered, please login".
    /// - Transport and timeout errors from the request.
    pub async fn create_customer(&self, sign_up: &SignUp) -> Result<(), FeedError> {
        sign_up.validate()?;

        let body = CreateCustomerRequest {
            name: &sign_up.name,
            dob: &sign_up.dob,
            email: &sign_up.email,
            phone: &sign_up.phone,
        };
        let response = self.send(CREATE_CUSTOMER_PATH, &body).await?;
        if response.is_success() {
            tracing::info!("customer created");
            return Ok(());
        }

        let body = response.decode(CREATE_CUSTOMER_PATH).unwrap_or(Value::Null);
        let message = message_of(&body, "message");
        let already = [message.clone(), message_of(&body, "error")]
            .iter()
            .flatten()
            .any(|m| m.contains("already"));
        let message = if already {
            "Customer already registered, please login".to_owned()
        } else {
            message.unwrap_or_else(|| "Something went wrong!".to_owned())
        };
        tracing::warn!(status = response.status, %message, "customer creation rejected");
        Err(FeedError::AuthRejected { message })
    }
}
