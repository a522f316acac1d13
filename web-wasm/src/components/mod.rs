//! UI components.

pub mod analytics_card;
pub mod clinical_report;
pub mod condition_table;
pub mod export_buttons;
pub mod image_preview;
pub mod navbar;
pub mod processing_timeline;
pub mod severity_gauge;
pub mod upload_panel;
