mod forvo;
mod select;

pub use forvo::{ForvoClient, pronunciations_url};
pub use select::select_audio;
