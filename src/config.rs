use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub bind_addr: String,
    pub title: String,
    pub subtitle: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/NFLX.csv"),
            bind_addr: "0.0.0.0:3000".to_string(),
            title: "Netflix Stock Analysis".to_string(),
            subtitle: "Analyze Netflix stock performance with a professional fintech dashboard UI."
                .to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_path: std::env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            title: std::env::var("DASHBOARD_TITLE").unwrap_or(defaults.title),
            subtitle: std::env::var("DASHBOARD_SUBTITLE").unwrap_or(defaults.subtitle),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_addr
            .parse()
            .map_err(|e| format!("BIND_ADDR {:?} is not a socket address: {}", self.bind_addr, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr_parses() {
        let config = DashboardConfig::default();
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_bad_bind_addr_is_rejected() {
        let config = DashboardConfig {
            bind_addr: "localhost".to_string(),
            ..DashboardConfig::default()
        };
        let err = config.socket_addr().unwrap_err();
        assert!(err.contains("BIND_ADDR"));
    }
}
