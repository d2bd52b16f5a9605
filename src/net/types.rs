#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role of an authenticated user. Fixed five-way enumeration; every
/// capability flag in [`crate::state::perms`] derives from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superadmin,
    TenantAdmin,
    Manager,
    Employee,
    Driver,
}

impl Role {
    /// Wire-format name of the role, as the backend serializes it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::TenantAdmin => "tenant_admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Driver => "driver",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organization a user belongs to. Reference data owned by the backend;
/// the client never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
}

/// The authenticated principal.
///
/// `tenant` is conventionally `None` for superadmins, but the backend owns
/// that pairing and the client does not enforce it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub tenant: Option<Tenant>,
}

impl User {
    /// Display name used by the nav bar and profile page.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
}
