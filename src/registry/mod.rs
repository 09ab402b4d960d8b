pub mod alias;
pub mod store;
