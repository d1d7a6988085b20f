// Regional indicator symbol letter A. 'B' is BASE + 1 and so on.
pub const REGIONAL_INDICATOR_BASE: u32 = 0x1F1E6;
// Day, full month name, 4-digit year, 24-hour hour:minute
pub const TIMESTAMP_FORMAT: &str = "%-d %B %Y, %H:%M";
pub const RATING_DECIMALS: usize = 1;
