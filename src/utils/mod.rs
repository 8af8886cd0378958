//! Utilities - Formatting and Text Folding

pub mod collate;
pub mod format;
