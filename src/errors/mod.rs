pub mod dashboard_error;
