pub mod abbreviations;
pub mod client;
pub mod script;
pub mod wwwjdic;

pub use abbreviations::expand;
pub use client::WwwjdicClient;
pub use script::extract_headword;
pub use wwwjdic::{parse, parse_line};
