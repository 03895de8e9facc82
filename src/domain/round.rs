use serde::{Deserialize, Serialize};

/// One parsed round: the round number as printed on the verify page and the
/// participant names in page order. A round is only retained when it has at
/// least one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round: u32,
    pub names: Vec<String>,
}
