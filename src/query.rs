use crate::models::Affinity;

/// Filters for listing wizards. Every field is optional; unset fields are not sent.
#[derive(derive_builder::Builder, Debug, Default, Clone, PartialEq, Eq)]
#[builder(setter(into, strip_option))]
pub struct WizardQuery {
    /// Wizards owned by this address.
    #[builder(default = None)]
    pub owner: Option<String>,
    #[builder(default = None)]
    pub affinity: Option<Affinity>,
    /// Current power greater than or equal to this value.
    #[builder(default = None)]
    pub min_power: Option<String>,
    /// Current power less than or equal to this value.
    #[builder(default = None)]
    pub max_power: Option<String>,
}

impl WizardQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "owner", self.owner.clone());
        push(
            &mut pairs,
            "affinity",
            self.affinity.map(|a| i64::from(a).to_string()),
        );
        push(&mut pairs, "minPower", self.min_power.clone());
        push(&mut pairs, "maxPower", self.max_power.clone());
        pairs
    }
}

/// Filters for listing duels. Every field is optional; unset fields are not sent.
#[derive(derive_builder::Builder, Debug, Default, Clone, PartialEq, Eq)]
#[builder(setter(into, strip_option))]
pub struct DuelQuery {
    /// Duels involving any of these wizards.
    #[builder(default = None)]
    pub wizard_ids: Option<Vec<String>>,
    #[builder(default = None)]
    pub exclude_in_progress: Option<bool>,
    #[builder(default = None)]
    pub exclude_finished: Option<bool>,
    #[builder(default = None)]
    pub start_block_from: Option<u64>,
    #[builder(default = None)]
    pub start_block_to: Option<u64>,
    #[builder(default = None)]
    pub end_block_from: Option<u64>,
    #[builder(default = None)]
    pub end_block_to: Option<u64>,
}

impl DuelQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(
            &mut pairs,
            "wizardIds",
            self.wizard_ids.as_ref().map(|ids| ids.join(",")),
        );
        push(
            &mut pairs,
            "excludeInProgress",
            self.exclude_in_progress.map(|b| b.to_string()),
        );
        push(
            &mut pairs,
            "excludeFinished",
            self.exclude_finished.map(|b| b.to_string()),
        );
        push(
            &mut pairs,
            "startBlockFrom",
            self.start_block_from.map(|n| n.to_string()),
        );
        push(
            &mut pairs,
            "startBlockTo",
            self.start_block_to.map(|n| n.to_string()),
        );
        push(
            &mut pairs,
            "endBlockFrom",
            self.end_block_from.map(|n| n.to_string()),
        );
        push(
            &mut pairs,
            "endBlockTo",
            self.end_block_to.map(|n| n.to_string()),
        );
        pairs
    }
}

// Empty strings count as absent.
fn push(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((name, value));
    }
}
