pub mod error;
pub mod generation;
pub mod preprocess;
pub mod provider;
pub mod types;

pub use error::{ParseError, TransportError};
pub use generation::{Generation, GenerationCounter};
pub use provider::{AudioProvider, DictionaryProvider};
pub use types::{AudioCandidate, DictionaryLookup, FilterPolicy, KeyType, VocabularyEntry};
