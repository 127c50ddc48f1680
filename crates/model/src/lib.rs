pub mod domain;
pub mod error;
pub mod fields;
pub mod record;
pub mod wire;
