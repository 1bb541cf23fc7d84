use serde::{Deserialize, Serialize};

use super::AppError;

/// The single admin credential pair that gates the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub user: String,
    pub password: String,
}

/// Who is acting in the current request.
///
/// Built once per invocation and handed to the handlers that need it;
/// nothing about a login outlives the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessContext {
    operator: Option<String>,
}

impl AccessContext {
    /// Check the supplied credentials against the configured admin pair.
    ///
    /// With no admin configured the ledger is open and the context carries
    /// whatever user name was given, if any.
    pub fn authorize(
        admin: Option<&AdminCredentials>,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, AppError> {
        let Some(admin) = admin else {
            return Ok(Self {
                operator: user.map(str::to_string),
            });
        };

        match (user, password) {
            (Some(u), Some(p)) if u == admin.user && p == admin.password => Ok(Self {
                operator: Some(u.to_string()),
            }),
            _ => Err(AppError::Unauthorized(user.unwrap_or_default().to_string())),
        }
    }

    pub fn operator(&self) -> &str {
        self.operator.as_deref().unwrap_or("local")
    }
}
