pub mod action_item;
pub mod breakdown_mode;
pub mod insight_tone;
pub mod performance_status;
