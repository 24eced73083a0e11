pub mod compare_control;
