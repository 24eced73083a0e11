//! Controller core of the template comparison viewer.
//!
//! Everything here is independent of the browser: the rendering backend, the drawing
//! surfaces, the panel layout target and the HTTP client are all reached through traits,
//! which the frontend implements with pdf.js, canvases, the DOM and `reqwest`.

pub mod error;
pub mod zoom;
pub mod viewer_state;
pub mod selection;
pub mod upload;
pub mod backend;
pub mod renderer;
pub mod layout;
pub mod command;
pub mod snapshot;
pub mod controller;

#[cfg(test)]
pub(crate) mod testing;
