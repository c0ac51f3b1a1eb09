/// Move HTTP endpoints module
pub mod endpoints;

use serde::{Deserialize, Serialize};

use crate::dex::loader::lenient;

/// Represents a move as listed in the move dex.
///
/// Numbers are kept as display strings since the source uses "—" for moves
/// without power or accuracy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    #[serde(alias = "Name", deserialize_with = "lenient::string")]
    pub name: String,
    /// Elemental type of the move
    #[serde(rename = "type", alias = "Type", deserialize_with = "lenient::string")]
    pub move_type: String,
    /// Physical, Special or Status
    #[serde(alias = "Category", deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(alias = "Power", deserialize_with = "lenient::string")]
    pub power: String,
    #[serde(alias = "Accuracy", deserialize_with = "lenient::string")]
    pub accuracy: String,
    #[serde(alias = "PP", deserialize_with = "lenient::string")]
    pub pp: String,
    #[serde(alias = "Effect", deserialize_with = "lenient::string")]
    pub effect: String,
    /// Chance of the secondary effect, in percent
    #[serde(
        alias = "Probability (%)",
        default,
        deserialize_with = "lenient::string"
    )]
    pub probability: String,
}
