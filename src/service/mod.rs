pub mod enrichment_service_impl;
pub mod export_service_impl;
pub mod layout_service_impl;
pub mod panel_service_impl;
