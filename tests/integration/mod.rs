pub mod file_loading_tests;
