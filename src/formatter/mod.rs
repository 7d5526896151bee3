pub mod result_formatter;
