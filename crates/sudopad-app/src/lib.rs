//! Shared library module for the Sudopad app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod command;
pub mod state;
pub mod store;
pub mod ui;
pub mod version;
pub mod view_model_builder;

pub use self::app::SudopadApp;
