pub mod word_count;

pub use word_count::WordCountResult;
