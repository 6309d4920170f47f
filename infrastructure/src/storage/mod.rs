//! Storage adapters for the answer record.
//!
//! - [`JsonFileAnswerStore`]: durable, one JSON file per user
//! - [`InMemoryAnswerStore`]: session-scoped, seedable with raw payloads
//!
//! Both implement the [`AnswerStore`](maturity_application::AnswerStore)
//! port and share the same wire format ([`codec`]).

pub mod codec;
mod json_file;
mod memory;

pub use codec::{decode_answers, encode_answers};
pub use json_file::{APP_DIR_NAME, JsonFileAnswerStore};
pub use memory::InMemoryAnswerStore;
