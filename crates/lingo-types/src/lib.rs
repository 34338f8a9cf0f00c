pub mod events;
pub mod languages;
pub mod record;

pub use events::{AppEvent, SessionSnapshot};
pub use languages::{LANGUAGES, Language};
pub use record::TranslationRecord;
