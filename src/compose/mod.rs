pub mod compositor;
pub mod plan;
pub mod uniform;
