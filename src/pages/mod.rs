//! Page components for the four routes: login and register (guest-only),
//! dashboard and profile (auth-required).

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;
