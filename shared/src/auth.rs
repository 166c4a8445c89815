use serde::{Serialize, Deserialize};
use std::fmt;
use time::OffsetDateTime;
use tracing::{info, warn};
use crate::error::{Error, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "presiding-officer")]
    PresidingOfficer,
}

impl Role {
    pub const fn key(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PresidingOfficer => "presiding-officer",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::PresidingOfficer => "Presiding Officer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub login_time: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl From<AuthError> for Error {
    fn from(e: AuthError) -> Self {
        Error::new(ErrorCode::Unauthorized, e.to_string())
    }
}

struct Credential {
    role: Role,
    username: &'static str,
    password: &'static str,
}

const CREDENTIALS: [Credential; 2] = [
    Credential { role: Role::Admin, username: "admin", password: "1234" },
    Credential { role: Role::PresidingOfficer, username: "officer", password: "1234" },
];

/// Checks a login attempt against the built-in accounts for `role`.
pub fn authenticate(username: &str, password: &str, role: Role, now: OffsetDateTime) -> Result<User, AuthError> {
    let accepted = CREDENTIALS.iter()
        .any(|c| c.role == role && c.username == username && c.password == password);

    if !accepted {
        warn!(role = role.key(), "Rejected login attempt");
        return Err(AuthError::InvalidCredentials);
    }

    info!(username, role = role.key(), "User logged in");
    Ok(User {
        username: username.to_string(),
        role,
        login_time: now,
    })
}

/// Outcome of checking a role-gated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Login,
    /// Signed in with another role; send them to that role's own dashboard.
    RoleHome(Role),
}

pub fn gate(required: Role, user: Option<&User>) -> Gate {
    match user {
        None => Gate::Login,
        Some(user) if user.role == required => Gate::Allow,
        Some(user) => Gate::RoleHome(user.role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2025-11-06 14:12 UTC);

    #[test]
    fn accepts_each_role_with_its_own_account() {
        let admin = authenticate("admin", "1234", Role::Admin, NOW).unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.login_time, NOW);

        let officer = authenticate("officer", "1234", Role::PresidingOfficer, NOW).unwrap();
        assert_eq!(officer.username, "officer");
    }

    #[test]
    fn rejects_wrong_password_and_crossed_roles() {
        assert_eq!(authenticate("admin", "0000", Role::Admin, NOW), Err(AuthError::InvalidCredentials));
        assert_eq!(authenticate("officer", "1234", Role::Admin, NOW), Err(AuthError::InvalidCredentials));
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(Error::from(AuthError::InvalidCredentials).code, ErrorCode::Unauthorized);
    }

    #[test]
    fn gate_redirects_by_role() {
        let officer = authenticate("officer", "1234", Role::PresidingOfficer, NOW).unwrap();
        assert_eq!(gate(Role::Admin, None), Gate::Login);
        assert_eq!(gate(Role::PresidingOfficer, Some(&officer)), Gate::Allow);
        assert_eq!(gate(Role::Admin, Some(&officer)), Gate::RoleHome(Role::PresidingOfficer));
    }

    #[test]
    fn user_json_uses_camel_case_fields() {
        let user = authenticate("admin", "1234", Role::Admin, NOW).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"username":"admin","role":"admin","loginTime":"2025-11-06T14:12:00Z"}"#);
        assert_eq!(serde_json::from_str::<User>(&json).unwrap(), user);
    }
}
