pub mod formatter;
pub mod frequency;
pub mod session;
pub mod stop_words;
pub mod utils;

pub use formatter::result_formatter::ResultFormatter;
pub use frequency::frequency_counter::{FrequencyCounter, FrequencyMapping};
pub use session::tag_session::TagSession;
pub use stop_words::stop_word_set::StopWordSet;
pub use utils::error::TagError;
