pub mod crypto;
pub mod session;
