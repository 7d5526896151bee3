pub mod frequency_counter;
