pub mod decorations;
