/// Error types for bundle construction and resource loading
///
/// Lookups never fail: `ResBundle::resolve` recovers from bad input locally.
/// These errors only surface when parsing configuration values or reading
/// resource files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    /// The locale tag could not be parsed
    InvalidLocale(String),
    /// Unknown content type name
    InvalidContentType(String),
    /// Unknown missing-translation policy name
    InvalidMissingPolicy(String),
    /// Reading or parsing a resource file failed
    Load(String),
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            BundleError::InvalidContentType(name) => write!(f, "Unknown content type: {}", name),
            BundleError::InvalidMissingPolicy(name) => {
                write!(f, "Unknown missing translation policy: {}", name)
            }
            BundleError::Load(msg) => write!(f, "Load error: {}", msg),
        }
    }
}

impl std::error::Error for BundleError {}

/// Result type for bundle operations
pub type BundleResult<T> = Result<T, BundleError>;
