pub mod dashboard_document;
pub mod dashboard_summary;
pub mod insight_banner;
pub mod panel;
