pub mod aggregate;
pub mod auth;
pub mod filter;
pub mod logic;
pub mod sort;
pub mod validate;
