//! Network layer: wire types shared with the backend and the HTTP auth
//! boundary behind the [`api::AuthApi`] trait.

pub mod api;
pub mod types;
