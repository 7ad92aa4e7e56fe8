//! Infraction record data.

use serde::{Deserialize, Serialize};

/// The charged violation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    /// Disturbances in shared civic space.
    PublicDisorder,
    /// Failure to meet quota or tariff obligations.
    EconomicNonCompliance,
    /// Expression contrary to doctrine.
    IdeologicalDeviance,
    /// Obstruction of bureau process.
    AdministrativeObstruction,
}

impl Violation {
    /// Every category, in form order.
    pub const ALL: [Violation; 4] = [
        Violation::PublicDisorder,
        Violation::EconomicNonCompliance,
        Violation::IdeologicalDeviance,
        Violation::AdministrativeObstruction,
    ];
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PublicDisorder => write!(f, "Public Disorder"),
            Self::EconomicNonCompliance => write!(f, "Economic Non-Compliance"),
            Self::IdeologicalDeviance => write!(f, "Ideological Deviance"),
            Self::AdministrativeObstruction => write!(f, "Administrative Obstruction"),
        }
    }
}

/// The charged severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// A note in the file.
    Minor,
    /// The usual consequences.
    Standard,
    /// Escalated handling.
    Aggravated,
}

impl Severity {
    /// Every level, in form order.
    pub const ALL: [Severity; 3] = [Severity::Minor, Severity::Standard, Severity::Aggravated];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minor => write!(f, "Minor"),
            Self::Standard => write!(f, "Standard"),
            Self::Aggravated => write!(f, "Aggravated"),
        }
    }
}

/// One finished, stamped infraction record.
///
/// Emitted exactly once per submission; the form resets afterwards and
/// keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfractionRecord {
    /// Case identifier from the suspect's file.
    pub case_id: String,
    /// Suspect name as confirmed on the form.
    pub suspect_name: String,
    /// Charged violation category.
    pub violation: Violation,
    /// Charged severity level.
    pub severity: Severity,
    /// Whether the stamp was applied.
    pub stamped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Violation::EconomicNonCompliance.to_string(), "Economic Non-Compliance");
        assert_eq!(Severity::Aggravated.to_string(), "Aggravated");
    }

    #[test]
    fn record_round_trips_as_json() {
        let record = InfractionRecord {
            case_id: "VK-221".to_string(),
            suspect_name: "Darion Vale".to_string(),
            violation: Violation::IdeologicalDeviance,
            severity: Severity::Standard,
            stamped: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: InfractionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
