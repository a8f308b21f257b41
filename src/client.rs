use crate::api::ApiClient;
use crate::config::{CheezeWizardsConfig, Environment};
use crate::error::CheezeWizardsError;
use crate::models::{Duel, DuelsResponse, Wizard};
use crate::query::{DuelQuery, WizardQuery};

/// Read operations exposed by the Cheeze Wizards API.
#[async_trait::async_trait]
pub trait CheezeWizardsApi: Send + Sync {
    async fn get_wizard_by_id(&self, id: u64) -> Result<Wizard, CheezeWizardsError>;

    async fn get_wizards_by_attributes(
        &self,
        query: &WizardQuery,
    ) -> Result<Vec<Wizard>, CheezeWizardsError>;

    async fn get_duel_by_id(&self, id: u64) -> Result<Duel, CheezeWizardsError>;

    async fn get_duels_by_attributes(
        &self,
        query: &DuelQuery,
    ) -> Result<Vec<Duel>, CheezeWizardsError>;
}

/// The main client for interacting with the Cheeze Wizards API.
///
/// Every request carries the `x-api-token` and `x-email` headers. A response other
/// than `200 OK` is returned as [`CheezeWizardsError::UnexpectedStatus`], and a `200`
/// whose body does not decode is returned as [`CheezeWizardsError::HttpJsonDecode`].
#[derive(Clone)]
pub struct CheezeWizards {
    environment: Environment,
    api: ApiClient,
}

impl CheezeWizards {
    /// Create a client for the default deployment.
    ///
    /// ```no_run
    /// use cheeze_wizards::CheezeWizards;
    /// # async fn run() -> Result<(), cheeze_wizards::CheezeWizardsError> {
    /// let cw = CheezeWizards::new("my-api-key", "me@example.com");
    /// let wizard = cw.get_wizard_by_id(5).await?;
    /// println!("{} owns wizard {}", wizard.owner, wizard.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: &str, email: &str) -> Self {
        Self::with_environment(api_key, email, Environment::Default)
    }

    pub fn with_environment(api_key: &str, email: &str, environment: Environment) -> Self {
        let api = ApiClient::new(
            environment.base_url().to_string(),
            api_key.to_string(),
            email.to_string(),
            reqwest::Client::new(),
        );
        Self { environment, api }
    }

    /// Create a client with a request timeout or a custom base URL.
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use cheeze_wizards::{CheezeWizards, CheezeWizardsConfigBuilder, Environment};
    /// let config = CheezeWizardsConfigBuilder::default()
    ///     .api_key("my-api-key")
    ///     .email("me@example.com")
    ///     .environment(Environment::Mainnet)
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// let cw = CheezeWizards::from_config(config).unwrap();
    /// ```
    pub fn from_config(config: CheezeWizardsConfig) -> Result<Self, CheezeWizardsError> {
        let api = ApiClient::from_config(&config)?;
        Ok(Self {
            environment: config.environment,
            api,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_wizard_by_id(&self, id: u64) -> Result<Wizard, CheezeWizardsError> {
        self.api.get(&format!("wizards/{id}"), &[]).await
    }

    /// List wizards matching every set field of `query`.
    ///
    /// ```no_run
    /// use cheeze_wizards::{Affinity, CheezeWizards, WizardQueryBuilder};
    /// # async fn run() -> Result<(), cheeze_wizards::CheezeWizardsError> {
    /// let cw = CheezeWizards::new("my-api-key", "me@example.com");
    /// let query = WizardQueryBuilder::default()
    ///     .affinity(Affinity::Water)
    ///     .min_power("100000")
    ///     .build()
    ///     .unwrap();
    /// let wizards = cw.get_wizards_by_attributes(&query).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn get_wizards_by_attributes(
        &self,
        query: &WizardQuery,
    ) -> Result<Vec<Wizard>, CheezeWizardsError> {
        self.api.get("wizards", &query.to_pairs()).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_duel_by_id(&self, id: u64) -> Result<Duel, CheezeWizardsError> {
        self.api.get(&format!("duels/{id}"), &[]).await
    }

    /// List duels matching every set field of `query`.
    #[tracing::instrument(skip(self))]
    pub async fn get_duels_by_attributes(
        &self,
        query: &DuelQuery,
    ) -> Result<Vec<Duel>, CheezeWizardsError> {
        let response: DuelsResponse = self.api.get("duels", &query.to_pairs()).await?;
        Ok(response.duels)
    }
}

impl std::fmt::Debug for CheezeWizards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheezeWizards")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl CheezeWizardsApi for CheezeWizards {
    async fn get_wizard_by_id(&self, id: u64) -> Result<Wizard, CheezeWizardsError> {
        CheezeWizards::get_wizard_by_id(self, id).await
    }

    async fn get_wizards_by_attributes(
        &self,
        query: &WizardQuery,
    ) -> Result<Vec<Wizard>, CheezeWizardsError> {
        CheezeWizards::get_wizards_by_attributes(self, query).await
    }

    async fn get_duel_by_id(&self, id: u64) -> Result<Duel, CheezeWizardsError> {
        CheezeWizards::get_duel_by_id(self, id).await
    }

    async fn get_duels_by_attributes(
        &self,
        query: &DuelQuery,
    ) -> Result<Vec<Duel>, CheezeWizardsError> {
        CheezeWizards::get_duels_by_attributes(self, query).await
    }
}
