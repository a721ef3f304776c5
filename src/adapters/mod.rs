// Adapters: concrete front-end output for the domain ports.

pub mod render;

pub use render::{CsvRenderer, JsonRenderer, OutputFormat, TextRenderer};
