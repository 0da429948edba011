//! E-mail components.

pub mod payment;
