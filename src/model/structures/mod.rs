pub mod display_row;
pub mod flag_style;
pub mod output_format;
pub mod timestamp_policy;
