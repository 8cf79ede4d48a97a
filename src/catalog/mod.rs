//! Static reference data: the insurer directory and the add-on coverage
//! catalog. Read-only; lookup misses degrade to fallback labels at the call
//! site, never an error.

use serde::{Deserialize, Serialize};

/// One insurer available for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderEntry {
    pub id: &'static str,
    pub name: &'static str,
}

/// Directory of insurers the front end can offer for comparison.
#[derive(Debug, Clone)]
pub struct ProviderDirectory {
    entries: Vec<ProviderEntry>,
}

impl ProviderDirectory {
    /// The standard motor-insurer directory.
    pub fn standard() -> Self {
        let entries = vec![
            ProviderEntry { id: "bajaj-allianz", name: "Bajaj Allianz" },
            ProviderEntry { id: "cholamandalam", name: "Cholamandalam MS" },
            ProviderEntry { id: "digit", name: "Digit General Insurance" },
            ProviderEntry { id: "edelweiss", name: "Edelweiss" },
            ProviderEntry { id: "future-generali", name: "Future Generali" },
            ProviderEntry { id: "hdfc-ergo", name: "HDFC ERGO" },
            ProviderEntry { id: "icici-lombard", name: "ICICI Lombard" },
            ProviderEntry { id: "iffco-tokio", name: "IFFCO Tokio" },
            ProviderEntry { id: "kotak", name: "Kotak General Insurance" },
            ProviderEntry { id: "liberty", name: "Liberty General Insurance" },
            ProviderEntry { id: "magma-hdi", name: "Magma HDI" },
            ProviderEntry { id: "national", name: "National Insurance" },
            ProviderEntry { id: "raheja-qbe", name: "Raheja QBE" },
            ProviderEntry { id: "reliance", name: "Reliance" },
            ProviderEntry { id: "royal-sundaram", name: "Royal Sundaram Alliance" },
            ProviderEntry { id: "sbi", name: "SBI General" },
            ProviderEntry { id: "shriram", name: "Shriram" },
            ProviderEntry { id: "tata-aig", name: "Tata AIG" },
            ProviderEntry { id: "new-india", name: "The New India Assurance" },
            ProviderEntry { id: "oriental", name: "The Oriental" },
            ProviderEntry { id: "united-india", name: "United India" },
            ProviderEntry { id: "universal-sompo", name: "Universal Sompo" },
        ];

        Self { entries }
    }

    pub fn entries(&self) -> &[ProviderEntry] {
        &self.entries
    }

    pub fn name_for(&self, id: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name)
    }
}

impl Default for ProviderDirectory {
    fn default() -> Self {
        Self::standard()
    }
}

/// Add-on coverages a policy can include. Each flag is independently
/// toggle-able on a provider record and defaults to included.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CoverageFlag {
    ZeroDepreciation,
    EngineProtect,
    KeyReplacement,
    ConsumableCover,
    LegalLiabilityPaidDriver,
    CpaCover,
    RoadsideAssistance,
    TyreSecure,
    ReturnToInvoice,
    PersonalBaggage,
    BatteryProtect,
    PassengerPa,
    RubberPlasticFibre,
}

impl CoverageFlag {
    pub const fn ordered() -> [Self; 13] {
        [
            Self::ZeroDepreciation,
            Self::EngineProtect,
            Self::KeyReplacement,
            Self::ConsumableCover,
            Self::LegalLiabilityPaidDriver,
            Self::CpaCover,
            Self::RoadsideAssistance,
            Self::TyreSecure,
            Self::ReturnToInvoice,
            Self::PersonalBaggage,
            Self::BatteryProtect,
            Self::PassengerPa,
            Self::RubberPlasticFibre,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ZeroDepreciation => "Zero Depreciation",
            Self::EngineProtect => "Engine Protect",
            Self::KeyReplacement => "Key and Lock Replacement",
            Self::ConsumableCover => "Consumable Cover",
            Self::LegalLiabilityPaidDriver => "Legal Liability Paid Driver",
            Self::CpaCover => "CPA Cover",
            Self::RoadsideAssistance => "Road Side Assistance",
            Self::TyreSecure => "Tyre Secure",
            Self::ReturnToInvoice => "Return to Invoice",
            Self::PersonalBaggage => "Personal Baggage",
            Self::BatteryProtect => "Battery Protect",
            Self::PassengerPa => "Passenger PA",
            Self::RubberPlasticFibre => "Rubber, Plastic, Fibre",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ZeroDepreciation => "No depreciation deducted on claim settlement",
            Self::EngineProtect => "Coverage for engine damage due to water ingression",
            Self::KeyReplacement => "Coverage for key and lock replacement costs",
            Self::ConsumableCover => "Coverage for consumable items like engine oil, nuts, bolts",
            Self::LegalLiabilityPaidDriver => "Legal liability coverage for paid driver",
            Self::CpaCover => "Personal Accident cover for owner-driver",
            Self::RoadsideAssistance => "24x7 roadside assistance services",
            Self::TyreSecure => "Coverage for tyre and rim damage",
            Self::ReturnToInvoice => "Get invoice value in case of total loss",
            Self::PersonalBaggage => "Coverage for personal belongings in the vehicle",
            Self::BatteryProtect => "Coverage for battery damage and replacement",
            Self::PassengerPa => "Personal Accident cover for passengers",
            Self::RubberPlasticFibre => "Coverage for rubber, plastic and fibre parts",
        }
    }
}
