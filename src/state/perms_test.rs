use super::*;

use crate::net::types::Tenant;

fn make_user(role: Role) -> User {
    let tenant = match role {
        Role::Superadmin => None,
        _ => Some(Tenant {
            id: 1,
            name: "T".to_owned(),
            subdomain: "t".to_owned(),
        }),
    };
    User {
        id: 1,
        email: "u@test".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        role,
        tenant,
    }
}

fn resolve(role: Role) -> Permissions {
    Permissions::resolve(Some(&make_user(role)))
}

// =============================================================
// No identity
// =============================================================

#[test]
fn unauthenticated_has_no_permissions() {
    let p = Permissions::resolve(None);
    assert_eq!(p, Permissions::default());
    assert!(!p.is_authenticated);
    assert!(!p.is_superadmin);
    assert!(!p.is_tenant_admin);
    assert!(!p.is_manager);
    assert!(!p.is_employee);
    assert!(!p.is_driver);
    assert!(!p.can_manage_tenant);
    assert!(!p.can_manage_team);
    assert!(!p.can_approve_expenses);
    assert!(!p.can_submit_expenses);
    assert!(!p.can_view_vehicles);
    assert!(!p.can_manage_vehicles);
    assert!(!p.can_view_trips);
    assert!(!p.can_manage_drivers);
    assert!(!p.can_view_own_profile);
    assert!(!p.can_manage_users);
    assert!(!p.can_access_admin_panel);
    assert!(!p.can_view_dashboard);
}

// =============================================================
// Per-role flag tables
// =============================================================

#[test]
fn superadmin_flags() {
    let p = resolve(Role::Superadmin);
    assert!(p.is_authenticated);
    assert!(p.is_superadmin);
    assert!(!p.is_tenant_admin);
    assert!(!p.is_manager);
    assert!(!p.is_employee);
    assert!(!p.is_driver);
    assert!(p.can_manage_tenant);
    assert!(p.can_manage_team);
    assert!(p.can_approve_expenses);
    assert!(p.can_submit_expenses);
    assert!(p.can_view_vehicles);
    assert!(p.can_manage_vehicles);
    assert!(p.can_view_trips);
    assert!(p.can_manage_drivers);
    assert!(p.can_view_own_profile);
    assert!(p.can_manage_users);
    assert!(p.can_access_admin_panel);
    assert!(p.can_view_dashboard);
}

#[test]
fn tenant_admin_flags() {
    let p = resolve(Role::TenantAdmin);
    assert!(p.is_authenticated);
    assert!(!p.is_superadmin);
    assert!(p.is_tenant_admin);
    assert!(!p.is_manager);
    assert!(!p.is_employee);
    assert!(!p.is_driver);
    assert!(p.can_manage_tenant);
    assert!(p.can_manage_team);
    assert!(p.can_approve_expenses);
    assert!(p.can_submit_expenses);
    assert!(p.can_view_vehicles);
    assert!(p.can_manage_vehicles);
    assert!(p.can_view_trips);
    assert!(p.can_manage_drivers);
    assert!(p.can_view_own_profile);
    assert!(p.can_manage_users);
    assert!(!p.can_access_admin_panel);
    assert!(p.can_view_dashboard);
}

#[test]
fn manager_flags() {
    let p = resolve(Role::Manager);
    assert!(p.is_authenticated);
    assert!(!p.is_superadmin);
    assert!(!p.is_tenant_admin);
    assert!(p.is_manager);
    assert!(!p.is_employee);
    assert!(!p.is_driver);
    assert!(!p.can_manage_tenant);
    assert!(p.can_manage_team);
    assert!(p.can_approve_expenses);
    assert!(p.can_submit_expenses);
    assert!(p.can_view_vehicles);
    assert!(p.can_manage_vehicles);
    assert!(p.can_view_trips);
    assert!(p.can_manage_drivers);
    assert!(p.can_view_own_profile);
    assert!(!p.can_manage_users);
    assert!(!p.can_access_admin_panel);
    assert!(p.can_view_dashboard);
}

#[test]
fn employee_flags() {
    let p = resolve(Role::Employee);
    assert!(p.is_authenticated);
    assert!(!p.is_superadmin);
    assert!(!p.is_tenant_admin);
    assert!(!p.is_manager);
    assert!(p.is_employee);
    assert!(!p.is_driver);
    assert!(!p.can_manage_tenant);
    assert!(!p.can_manage_team);
    assert!(!p.can_approve_expenses);
    assert!(p.can_submit_expenses);
    assert!(p.can_view_vehicles);
    assert!(!p.can_manage_vehicles);
    assert!(p.can_view_trips);
    assert!(!p.can_manage_drivers);
    assert!(p.can_view_own_profile);
    assert!(!p.can_manage_users);
    assert!(!p.can_access_admin_panel);
    assert!(p.can_view_dashboard);
}

#[test]
fn driver_flags() {
    let p = resolve(Role::Driver);
    assert!(p.is_authenticated);
    assert!(!p.is_superadmin);
    assert!(!p.is_tenant_admin);
    assert!(!p.is_manager);
    assert!(!p.is_employee);
    assert!(p.is_driver);
    assert!(!p.can_manage_tenant);
    assert!(!p.can_manage_team);
    assert!(!p.can_approve_expenses);
    assert!(!p.can_submit_expenses);
    assert!(p.can_view_vehicles);
    assert!(!p.can_manage_vehicles);
    assert!(p.can_view_trips);
    assert!(!p.can_manage_drivers);
    assert!(p.can_view_own_profile);
    assert!(!p.can_manage_users);
    assert!(!p.can_access_admin_panel);
    assert!(p.can_view_dashboard);
}

// =============================================================
// Staleness
// =============================================================

#[test]
fn resolve_tracks_the_current_identity() {
    let user = make_user(Role::Manager);
    assert!(Permissions::resolve(Some(&user)).is_authenticated);
    // Same call after logout: flags recompute from scratch.
    assert!(!Permissions::resolve(None).is_authenticated);
}
