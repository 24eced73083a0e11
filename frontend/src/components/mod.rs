pub mod navbar;
pub mod error_boundary;
pub mod loading_overlay;
pub mod compare_components;
