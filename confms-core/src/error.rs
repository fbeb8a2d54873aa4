use std::fmt;

#[derive(Debug)]
pub enum PortalError {
    InvalidPageSize(usize),
    Config(String),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::InvalidPageSize(size) => {
                write!(f, "Invalid page size: {} (must be at least 1)", size)
            }
            PortalError::Config(e) => write!(f, "Configuration error: {}", e),
            PortalError::Json(e) => write!(f, "JSON parsing error: {}", e),
            PortalError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::Json(e) => Some(e),
            PortalError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Json(err)
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Io(err)
    }
}
