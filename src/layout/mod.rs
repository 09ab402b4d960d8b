pub mod arc_text;
pub mod responsive;
