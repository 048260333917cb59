mod search_tests;
mod utils;
