//! Suspect dossiers.

use serde::{Deserialize, Serialize};

/// One suspect in the shift queue.
///
/// The portrait field is an opaque asset key; loading and display
/// belong to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    /// Case identifier stamped onto the infraction form.
    pub case_id: String,
    /// Name as it appears in the dossier.
    pub display_name: String,
    /// Officer who made the arrest.
    pub arresting_officer: String,
    /// Citizenship tier from the registry.
    pub citizenship_tier: String,
    /// Dialogue node the interview starts at.
    pub start_node: String,
    /// Asset key for the suspect's portrait.
    pub portrait: String,
}

impl Suspect {
    /// Create a suspect with empty dossier extras.
    pub fn new(
        case_id: impl Into<String>,
        display_name: impl Into<String>,
        start_node: impl Into<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            display_name: display_name.into(),
            arresting_officer: String::new(),
            citizenship_tier: String::new(),
            start_node: start_node.into(),
            portrait: String::new(),
        }
    }

    /// Set the arresting officer.
    pub fn with_officer(mut self, officer: impl Into<String>) -> Self {
        self.arresting_officer = officer.into();
        self
    }

    /// Set the citizenship tier.
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.citizenship_tier = tier.into();
        self
    }

    /// Set the portrait asset key.
    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = portrait.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let suspect = Suspect::new("VK-221", "Darion Vale", "vale_intro")
            .with_officer("Sgt. Keller")
            .with_tier("Provisional")
            .with_portrait("portraits/vale");

        assert_eq!(suspect.case_id, "VK-221");
        assert_eq!(suspect.start_node, "vale_intro");
        assert_eq!(suspect.arresting_officer, "Sgt. Keller");
        assert_eq!(suspect.citizenship_tier, "Provisional");
        assert_eq!(suspect.portrait, "portraits/vale");
    }
}
