mod binding;
mod entitlement;

pub use binding::*;
pub use entitlement::*;
