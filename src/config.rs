use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://cheezewizards.alchemyapi.io";
pub const MAINNET_BASE_URL: &str = "https://cheezewizards-mainnet.alchemyapi.io";
pub const RINKEBY_BASE_URL: &str = "https://cheezewizards-rinkeby.alchemyapi.io";

/// Deployment the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Default,
    Mainnet,
    Rinkeby,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Default => DEFAULT_BASE_URL,
            Environment::Mainnet => MAINNET_BASE_URL,
            Environment::Rinkeby => RINKEBY_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    /// Unrecognized names select the default deployment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Environment::Mainnet,
            "rinkeby" => Environment::Rinkeby,
            _ => Environment::Default,
        })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Default => "default",
            Environment::Mainnet => "mainnet",
            Environment::Rinkeby => "rinkeby",
        };
        f.write_str(name)
    }
}

#[derive(derive_builder::Builder, Clone)]
#[builder(setter(into))]
pub struct CheezeWizardsConfig {
    pub api_key: String,
    pub email: String,
    #[builder(default)]
    pub environment: Environment,
    #[builder(default = None, setter(into, strip_option))]
    pub timeout: Option<Duration>,
    /// Overrides the environment's base URL when set.
    #[builder(default = None, setter(into, strip_option))]
    pub base_url: Option<String>,
}

impl CheezeWizardsConfig {
    pub fn new(api_key: &str, email: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            email: email.to_string(),
            environment: Environment::default(),
            timeout: None,
            base_url: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

impl fmt::Debug for CheezeWizardsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheezeWizardsConfig")
            .field("api_key", &"<redacted>")
            .field("email", &self.email)
            .field("environment", &self.environment)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}
