use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Bearer token validation settings.
///
/// `project_id` mirrors the identity provider project: when set, tokens must
/// carry `iss = https://securetoken.google.com/<project_id>` and
/// `aud = <project_id>`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: default_seed_enabled() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_seed_enabled() -> bool { true }
fn default_log_format() -> String { "compact".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content).map_err(|e| e.context(format!("failed to parse {path}")))
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file when present, otherwise defaults overlaid with
    /// `SERVER_HOST`, `SERVER_PORT` and `TOKIO_WORKER_THREADS`.
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = load_file_or_env(&path)?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }
}

/// Only a missing file falls back to env; unreadable or malformed files are errors.
fn load_file_or_env(path: &str) -> Result<AppConfig> {
    match load_from_file(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) if is_missing_file(&e) => {
            let mut cfg = AppConfig::default();
            if let Ok(host) = std::env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok());
            Ok(cfg)
        }
        Err(e) => Err(e),
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.trim().is_empty() {
            self.jwt_secret = std::env::var("JWT_SECRET").unwrap_or_default();
        }
        if self.project_id.is_none() {
            self.project_id = std::env::var("AUTH_PROJECT_ID").ok();
        }
        if matches!(self.project_id.as_deref(), Some(p) if p.trim().is_empty()) {
            self.project_id = None;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!("auth.jwt_secret is empty; set it in config.toml or JWT_SECRET"));
        }
        Ok(())
    }

    /// Expected `iss` claim, if a project is configured.
    pub fn issuer(&self) -> Option<String> {
        self.project_id
            .as_ref()
            .map(|p| format!("https://securetoken.google.com/{p}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [auth]
            jwt_secret = "s3cret"
            project_id = "flowing-fusion"

            [seed]
            enabled = false

            [log]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.auth.jwt_secret, "s3cret");
        assert_eq!(
            cfg.auth.issuer().as_deref(),
            Some("https://securetoken.google.com/flowing-fusion")
        );
        assert!(!cfg.seed.enabled);
        assert_eq!(cfg.log.format, "json");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.seed.enabled);
        assert_eq!(cfg.log.format, "compact");
        assert!(cfg.auth.project_id.is_none());
    }

    #[test]
    fn normalize_rejects_port_zero_and_fills_threads() {
        let mut cfg = parse("[server]\nhost = \"\"\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[server]\nhost = \"\"\nport = 80\nworker_threads = 0\n[auth]\njwt_secret = \"x\"\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    fn temp_config(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("seller-api-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() {
        let path = temp_config("malformed", "[auth]\njwt_secret = \"real\"\n[server\n");
        let err = load_file_or_env(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn only_a_missing_file_falls_back() {
        assert!(load_file_or_env("/nonexistent/seller-api/config.toml").is_ok());

        let path = temp_config("valid", "[auth]\njwt_secret = \"real\"\n");
        assert_eq!(load_file_or_env(&path).unwrap().auth.jwt_secret, "real");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_secret_fails_validation() {
        assert!(AuthConfig::default().validate().is_err());
        let auth = AuthConfig { jwt_secret: "   ".into(), project_id: None };
        assert!(auth.validate().is_err());
    }

    #[test]
    fn blank_project_id_is_dropped() {
        let mut auth = AuthConfig { jwt_secret: "x".into(), project_id: Some("  ".into()) };
        auth.normalize_from_env();
        assert!(auth.project_id.is_none());
        assert!(auth.issuer().is_none());
    }
}
