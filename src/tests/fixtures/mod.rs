pub mod auth;
pub mod builders;
pub mod clock;
pub mod gateways;
pub mod state;
