use serde::{Deserialize, Serialize};

/// Elemental affinity of a wizard, sent over the wire as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Affinity {
    NotSet,
    Neutral,
    Fire,
    Wind,
    Water,
    Unknown(i64),
}

impl From<i64> for Affinity {
    fn from(value: i64) -> Self {
        match value {
            0 => Affinity::NotSet,
            1 => Affinity::Neutral,
            2 => Affinity::Fire,
            3 => Affinity::Wind,
            4 => Affinity::Water,
            other => Affinity::Unknown(other),
        }
    }
}

impl From<Affinity> for i64 {
    fn from(affinity: Affinity) -> Self {
        match affinity {
            Affinity::NotSet => 0,
            Affinity::Neutral => 1,
            Affinity::Fire => 2,
            Affinity::Wind => 3,
            Affinity::Water => 4,
            Affinity::Unknown(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wizard {
    pub id: String,
    pub owner: String,
    pub affinity: Affinity,
    pub initial_power: String,
    pub power: String,
    /// `None` while the wizard is still in the tournament.
    #[serde(default)]
    pub eliminated_block_number: Option<u64>,
    pub created_block_number: u64,
}

impl Wizard {
    pub fn is_eliminated(&self) -> bool {
        self.eliminated_block_number.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duel {
    pub id: String,
    pub wizard1_id: String,
    pub wizard2_id: String,
    pub affinity1: Affinity,
    pub affinity2: Affinity,
    pub start_power1: String,
    pub start_power2: String,
    pub end_power1: String,
    pub end_power2: String,
    pub move_set1: String,
    pub move_set2: String,
    pub start_block: u64,
    pub end_block: u64,
    pub timeout_block: u64,
    pub timed_out: bool,
    pub is_ascension_battle: bool,
}

/// The duel listing is wrapped in an object rather than returned as a bare array.
#[derive(Debug, Deserialize)]
pub(crate) struct DuelsResponse {
    pub(crate) duels: Vec<Duel>,
}
