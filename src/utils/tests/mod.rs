mod download_tests;
mod warning_tests;
