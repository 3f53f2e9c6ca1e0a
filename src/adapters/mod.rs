// Adapters layer: concrete implementations for external systems (image API, local disk).

pub mod openai;
pub mod storage;

pub use openai::OpenAiImageClient;
pub use storage::LocalStorage;
