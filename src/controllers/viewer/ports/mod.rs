//! Port definitions for the viewer session.
//!
//! Traits the UI shell implements so the session can talk back to it without
//! knowing anything about windows or widgets.

pub mod image_file_presenter;
pub mod viewer_port;
