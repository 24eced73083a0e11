pub mod compare_page;
