use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `<table>` plus the last-update line, for embedding into a page
    #[default]
    Fragment,
    /// A complete HTML document
    Page,
    Json
}

#[cfg(test)]
mod tests {
    use crate::model::structures::output_format::OutputFormat;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_enumerate() {
        let formats = OutputFormat::iter().collect::<Vec<_>>();
        assert_eq!(formats, vec![OutputFormat::Fragment, OutputFormat::Page, OutputFormat::Json]);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON"), Ok(OutputFormat::Json));
    }
}
