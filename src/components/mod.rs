//! Reusable view components: route guards, the permission-gated nav bar,
//! and the dismissible error banner.

pub mod error_banner;
pub mod guards;
pub mod nav;
