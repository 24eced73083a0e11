//! Export formats offered for the comparison artifact.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::viewer_const::DOWNLOAD_PATH_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Pdf,
    Word,
    Svg,
}

impl DownloadFormat {
    pub const ALL: [DownloadFormat; 3] = [DownloadFormat::Pdf, DownloadFormat::Word, DownloadFormat::Svg];

    pub fn query_value(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::Svg => "svg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF Document",
            Self::Word => "Word Document (.docx)",
            Self::Svg => "SVG Image",
        }
    }

    /// Path the browser navigates to in order to fetch the artifact in this format.
    pub fn download_path(self, output_file: &str) -> String {
        format!(
            "{DOWNLOAD_PATH_PREFIX}{}?format={}",
            urlencoding::encode(output_file),
            self.query_value()
        )
    }
}

impl Display for DownloadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query_value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDownloadFormat(pub String);

impl Display for UnknownDownloadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown download format: {:?}", self.0)
    }
}

impl FromStr for DownloadFormat {
    type Err = UnknownDownloadFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.query_value() == s)
            .ok_or_else(|| UnknownDownloadFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_path_matches_endpoint() {
        assert_eq!(DownloadFormat::Pdf.download_path("cmp_123.pdf"), "/download/cmp_123.pdf?format=pdf");
        assert_eq!(DownloadFormat::Word.download_path("cmp_123.pdf"), "/download/cmp_123.pdf?format=word");
    }

    #[test]
    fn file_name_is_encoded_as_one_segment() {
        assert_eq!(
            DownloadFormat::Svg.download_path("updated old/v2 #1.pdf"),
            "/download/updated%20old%2Fv2%20%231.pdf?format=svg"
        );
    }

    #[test]
    fn parses_select_values() {
        for format in DownloadFormat::ALL {
            assert_eq!(format.query_value().parse::<DownloadFormat>(), Ok(format));
        }
        assert!("".parse::<DownloadFormat>().is_err());
        assert!("docx".parse::<DownloadFormat>().is_err());
    }
}
