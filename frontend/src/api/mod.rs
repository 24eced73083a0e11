pub mod compare_api;
