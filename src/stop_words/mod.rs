pub mod stop_word_set;
