pub const DOWNLOAD_TARGET: &str = "_blank";
pub const DOWNLOAD_FEATURES: &str = "noopener";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub target: &'static str,
    pub features: &'static str,
}

/// Opens the document in a new browsing context without an opener handle.
pub fn download_request(file: &str) -> DownloadRequest {
    DownloadRequest {
        url: file.to_string(),
        target: DOWNLOAD_TARGET,
        features: DOWNLOAD_FEATURES,
    }
}

pub fn footer_year(full_year: u32) -> String {
    full_year.to_string()
}
