use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // HTTP settings
    pub listen_addr: String,
    pub cors_permissive: bool,

    // Dataset settings
    pub countries_path: String,
    pub regions_path: String,
    pub reload_secs: u64,

    // Click handling
    pub strict_coordinates: bool,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            cors_permissive: false,
            countries_path: "data/countries.csv".to_string(),
            regions_path: "data/regions.csv".to_string(),
            reload_secs: 0,
            strict_coordinates: true,
            debug: false,
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(default)
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr = std::env::var("WINEMAP_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let cors_permissive = env_flag("WINEMAP_CORS_PERMISSIVE", false);

    let countries_path = std::env::var("WINEMAP_COUNTRIES_PATH")
        .unwrap_or_else(|_| "data/countries.csv".to_string());

    let regions_path = std::env::var("WINEMAP_REGIONS_PATH")
        .unwrap_or_else(|_| "data/regions.csv".to_string());

    // 0 disables periodic reload
    let reload_secs = std::env::var("WINEMAP_RELOAD_SECS")
        .unwrap_or_else(|_| "0".to_string())
        .parse()
        .unwrap_or(0);

    let strict_coordinates = env_flag("WINEMAP_STRICT_COORDINATES", true);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        listen_addr,
        cors_permissive,
        countries_path,
        regions_path,
        reload_secs,
        strict_coordinates,
        debug,
    })
}
