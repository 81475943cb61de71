use directories::UserDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Default landing place for exported reports: the user's download
    /// directory when the platform knows one, otherwise the working dir.
    pub fn report_dir() -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_dir_is_never_empty() {
        let dir = AppDirs::report_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
