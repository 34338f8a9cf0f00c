pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use session::{Session, TRANSLATION_FAILED_MSG, TranslateJob};
pub use store::{FileHistoryStore, HistoryStore, StoreError};
