//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One `SessionState` lives for the whole app session inside an
//! `RwSignal<SessionState>` provided via context. Only the operations in
//! `session` mutate it; `perms` derives capability flags from it on every
//! read and stores nothing.

pub mod perms;
pub mod session;
