#[cfg(test)]
#[path = "perms_test.rs"]
mod perms_test;

use crate::net::types::{Role, User};

/// Capability flags derived from the current identity's role.
///
/// A plain value recomputed on every [`resolve`] call — nothing here is
/// cached or stored, so the flags can never go stale across login/logout.
///
/// [`resolve`]: Self::resolve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // the flag table is the data model
pub struct Permissions {
    pub is_authenticated: bool,

    pub is_superadmin: bool,
    pub is_tenant_admin: bool,
    pub is_manager: bool,
    pub is_employee: bool,
    pub is_driver: bool,

    pub can_manage_tenant: bool,
    pub can_manage_team: bool,
    pub can_approve_expenses: bool,
    pub can_submit_expenses: bool,
    pub can_view_vehicles: bool,
    pub can_manage_vehicles: bool,
    pub can_view_trips: bool,
    pub can_manage_drivers: bool,
    pub can_view_own_profile: bool,
    pub can_manage_users: bool,
    pub can_access_admin_panel: bool,
    pub can_view_dashboard: bool,
}

impl Permissions {
    /// Compute the flag set for `user`. No identity means every flag false.
    pub fn resolve(user: Option<&User>) -> Self {
        let Some(role) = user.map(|u| u.role) else {
            return Self::default();
        };
        let admin = matches!(role, Role::Superadmin | Role::TenantAdmin);
        let managerial = admin || role == Role::Manager;
        Self {
            is_authenticated: true,

            is_superadmin: role == Role::Superadmin,
            is_tenant_admin: role == Role::TenantAdmin,
            is_manager: role == Role::Manager,
            is_employee: role == Role::Employee,
            is_driver: role == Role::Driver,

            can_manage_tenant: admin,
            can_manage_team: managerial,
            can_approve_expenses: managerial,
            can_submit_expenses: role != Role::Driver,
            can_view_vehicles: true,
            can_manage_vehicles: managerial,
            can_view_trips: true,
            can_manage_drivers: managerial,
            can_view_own_profile: true,
            can_manage_users: admin,
            can_access_admin_panel: role == Role::Superadmin,
            can_view_dashboard: true,
        }
    }
}
