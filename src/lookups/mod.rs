pub mod lookups_model;

pub use lookups_model::*;
