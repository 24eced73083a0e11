//! Common library exports shared between the viewer core and the frontend.

extern crate serde;


pub mod viewer_const;
pub mod document_slot;
pub mod comparison;
pub mod download_format;
