pub mod word_count;
