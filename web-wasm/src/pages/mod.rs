//! Routed views.

pub mod dashboard;
pub mod history;
pub mod home;
