pub mod dsl;
pub mod model;
