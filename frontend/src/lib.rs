//! Browser front end for comparing two PDF templates side by side.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub(crate) mod routes;
pub(crate) mod pages;
pub(crate) mod components;
pub(crate) mod data_definitions;
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod pdf_render;
pub(crate) mod browser;
