use unisoc_media::CloudinaryConfig;

use crate::auth::jwt::JwtConfig;

/// Default cap on a single uploaded image (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Which blob store backs image uploads.
#[derive(Debug, Clone)]
pub enum MediaBackend {
    Cloudinary(CloudinaryConfig),
    /// In-process store; images vanish on restart.
    Memory,
}

/// Credentials for the admin account created on first start.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted image upload in bytes.
    pub max_upload_bytes: usize,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    pub media: MediaBackend,
    /// Present only when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set.
    pub admin: Option<AdminSeed>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `5242880`                  |
    /// | `MEDIA_BACKEND`        | `cloudinary`               |
    /// | `ADMIN_EMAIL`          | unset                      |
    /// | `ADMIN_PASSWORD`       | unset                      |
    ///
    /// # Panics
    ///
    /// Panics on unparseable numbers, an unknown `MEDIA_BACKEND`, or missing
    /// JWT / Cloudinary credentials.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let media = match std::env::var("MEDIA_BACKEND")
            .unwrap_or_else(|_| "cloudinary".into())
            .as_str()
        {
            "cloudinary" => MediaBackend::Cloudinary(CloudinaryConfig::from_env()),
            "memory" => MediaBackend::Memory,
            other => panic!("MEDIA_BACKEND must be 'cloudinary' or 'memory', got '{other}'"),
        };

        let admin = match (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) {
            (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
                Some(AdminSeed { email, password })
            }
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            jwt: JwtConfig::from_env(),
            media,
            admin,
        }
    }
}
