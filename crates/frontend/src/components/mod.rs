pub mod pitch_view;
pub mod selection_summary;
