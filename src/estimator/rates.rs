//! Fixed regulatory rate tables: per-band third-party base premiums and
//! per-class own-damage base rates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    TwoWheeler,
    Car,
    Commercial,
}

impl VehicleClass {
    pub const fn ordered() -> [Self; 3] {
        [Self::TwoWheeler, Self::Car, Self::Commercial]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoWheeler => "Two Wheeler",
            Self::Car => "Car",
            Self::Commercial => "Commercial",
        }
    }
}

/// Rating band within a vehicle class: engine capacity for two-wheelers and
/// cars, gross vehicle weight (kg) for commercial vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Cc75To150,
    Cc151To350,
    CcOver350,
    CcUnder1000,
    Cc1000To1500,
    CcOver1500,
    GvwTo2500,
    Gvw2501To3500,
    Gvw3501To7500,
    Gvw7501To12000,
    Gvw12001To20000,
    Gvw20001To40000,
    GvwOver40000,
}

impl RatingBand {
    /// Bands selectable for the given class, in display order.
    pub const fn for_class(class: VehicleClass) -> &'static [RatingBand] {
        match class {
            VehicleClass::TwoWheeler => {
                &[Self::Cc75To150, Self::Cc151To350, Self::CcOver350]
            }
            VehicleClass::Car => &[Self::CcUnder1000, Self::Cc1000To1500, Self::CcOver1500],
            VehicleClass::Commercial => &[
                Self::GvwTo2500,
                Self::Gvw2501To3500,
                Self::Gvw3501To7500,
                Self::Gvw7501To12000,
                Self::Gvw12001To20000,
                Self::Gvw20001To40000,
                Self::GvwOver40000,
            ],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cc75To150 => "75-150cc",
            Self::Cc151To350 => "151-350cc",
            Self::CcOver350 => ">350cc",
            Self::CcUnder1000 => "<1000cc",
            Self::Cc1000To1500 => "1000-1500cc",
            Self::CcOver1500 => ">1500cc",
            Self::GvwTo2500 => "1-2500",
            Self::Gvw2501To3500 => "2501-3500",
            Self::Gvw3501To7500 => "3501-7500",
            Self::Gvw7501To12000 => "7501-12000",
            Self::Gvw12001To20000 => "12001-20000",
            Self::Gvw20001To40000 => "20001-40000",
            Self::GvwOver40000 => ">40000",
        }
    }
}

/// The band preselected when a class is chosen.
pub const fn default_band(class: VehicleClass) -> RatingBand {
    match class {
        VehicleClass::TwoWheeler => RatingBand::Cc75To150,
        VehicleClass::Car => RatingBand::CcUnder1000,
        VehicleClass::Commercial => RatingBand::GvwTo2500,
    }
}

/// Unified third-party premium for the class/band pair, or `None` when the
/// band does not belong to the class.
pub const fn third_party_base(class: VehicleClass, band: RatingBand) -> Option<u32> {
    match (class, band) {
        (VehicleClass::TwoWheeler, RatingBand::Cc75To150) => Some(714),
        (VehicleClass::TwoWheeler, RatingBand::Cc151To350) => Some(1366),
        (VehicleClass::TwoWheeler, RatingBand::CcOver350) => Some(2804),
        (VehicleClass::Car, RatingBand::CcUnder1000) => Some(2090),
        (VehicleClass::Car, RatingBand::Cc1000To1500) => Some(3416),
        (VehicleClass::Car, RatingBand::CcOver1500) => Some(7897),
        (VehicleClass::Commercial, RatingBand::GvwTo2500)
        | (VehicleClass::Commercial, RatingBand::Gvw2501To3500)
        | (VehicleClass::Commercial, RatingBand::Gvw3501To7500) => Some(15648),
        (VehicleClass::Commercial, RatingBand::Gvw7501To12000) => Some(26217),
        (VehicleClass::Commercial, RatingBand::Gvw12001To20000) => Some(33940),
        (VehicleClass::Commercial, RatingBand::Gvw20001To40000) => Some(42133),
        (VehicleClass::Commercial, RatingBand::GvwOver40000) => Some(42530),
        _ => None,
    }
}

/// Own-damage base rate as a fraction of declared value.
pub const fn own_damage_rate(class: VehicleClass) -> f64 {
    match class {
        VehicleClass::TwoWheeler => 0.0063,
        VehicleClass::Car => 0.0183,
        VehicleClass::Commercial => 0.016,
    }
}
