pub mod file_picker;
pub mod compare_bar;
pub mod viewer_toolbar;
pub mod dual_pdf_viewer;
pub mod comparison_summary;
pub mod download_bar;
