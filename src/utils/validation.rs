use std::net::SocketAddr;
use std::path::Path;

use url::Url;

use crate::utils::error::{ApiError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_listen_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Listen address cannot be empty".to_string(),
        });
    }

    match addr.parse::<SocketAddr>() {
        Ok(_) => Ok(()),
        Err(e) => Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        }),
    }
}

pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    if origin.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: "Origin cannot be empty".to_string(),
        });
    }

    match Url::parse(origin) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ApiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: origin.to_string(),
                reason: format!("Unsupported origin scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: format!("Invalid origin URL: {}", e),
        }),
    }
}

pub fn validate_static_dir(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    if !Path::new(path).is_dir() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Directory does not exist".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_listen_addr() {
        assert!(validate_listen_addr("listen", "127.0.0.1:8080").is_ok());
        assert!(validate_listen_addr("listen", "0.0.0.0:80").is_ok());
        assert!(validate_listen_addr("listen", "[::1]:8080").is_ok());
        assert!(validate_listen_addr("listen", "").is_err());
        assert!(validate_listen_addr("listen", "127.0.0.1").is_err());
        assert!(validate_listen_addr("listen", "localhost:8080").is_err());
    }

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin("cors_origins", "https://example.com").is_ok());
        assert!(validate_origin("cors_origins", "http://localhost:5173").is_ok());
        assert!(validate_origin("cors_origins", "").is_err());
        assert!(validate_origin("cors_origins", "not-a-url").is_err());
        assert!(validate_origin("cors_origins", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_static_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(validate_static_dir("static_dir", dir.path().to_str().unwrap()).is_ok());
        assert!(validate_static_dir("static_dir", "").is_err());
        assert!(validate_static_dir("static_dir", "/no/such/directory/here").is_err());
    }
}
