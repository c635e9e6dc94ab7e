//! Core, DOM-free view helpers for the Web UI.
pub mod motion;
pub mod view;
