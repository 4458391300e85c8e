pub mod analysis;
pub mod greeting;
