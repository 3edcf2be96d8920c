pub mod branch;
pub mod client;
pub mod domain;
pub mod lease;
pub mod newspaper;
pub mod private_owner;
pub mod property;
pub mod staff;
