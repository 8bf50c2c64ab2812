pub mod enrichment_service;
pub mod export_service;
pub mod layout_service;
pub mod panel_service;
