mod fetch_tests;
mod filter_tests;
