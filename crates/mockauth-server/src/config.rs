/// Runtime configuration.
///
/// The service takes no flags, environment variables, or config files:
/// it always binds the same port so dependent frontends can hardcode the
/// URL.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8081".to_string(),
        }
    }
}
