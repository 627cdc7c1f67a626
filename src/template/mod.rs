//! Template assets for tiergen
//!
//! This module contains the asset-side components:
//! - `assets`: loading template bodies by name from the asset directory
//! - `operation`: describing what happened to each generated file

pub mod assets;
pub mod operation;

pub use assets::TemplateAssets;
pub use operation::FileOperation;
