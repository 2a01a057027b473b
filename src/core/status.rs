use crate::{error::GateInError, utils::util::Result};

/// Production milestones an option moves through after gate-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentStatus {
    InSelection,
    OrderBooked,
    FabricInHouse,
    InCutting,
    InSewing,
    InInspection,
    Logistic,
    Warehouse,
}

impl CurrentStatus {
    pub const ALL: [CurrentStatus; 8] = [
        CurrentStatus::InSelection,
        CurrentStatus::OrderBooked,
        CurrentStatus::FabricInHouse,
        CurrentStatus::InCutting,
        CurrentStatus::InSewing,
        CurrentStatus::InInspection,
        CurrentStatus::Logistic,
        CurrentStatus::Warehouse,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "IN SELECTION" => Some(CurrentStatus::InSelection),
            "ORDER BOOKED" => Some(CurrentStatus::OrderBooked),
            "FABRIC IN HOUSE" => Some(CurrentStatus::FabricInHouse),
            "IN CUTTING" => Some(CurrentStatus::InCutting),
            "IN SEWING" => Some(CurrentStatus::InSewing),
            "IN INSPECTION" => Some(CurrentStatus::InInspection),
            "LOGISTIC" => Some(CurrentStatus::Logistic),
            "WAREHOUSE" => Some(CurrentStatus::Warehouse),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CurrentStatus::InSelection => "IN SELECTION",
            CurrentStatus::OrderBooked => "ORDER BOOKED",
            CurrentStatus::FabricInHouse => "FABRIC IN HOUSE",
            CurrentStatus::InCutting => "IN CUTTING",
            CurrentStatus::InSewing => "IN SEWING",
            CurrentStatus::InInspection => "IN INSPECTION",
            CurrentStatus::Logistic => "LOGISTIC",
            CurrentStatus::Warehouse => "WAREHOUSE",
        }
    }

    pub fn completion_percent(&self) -> u8 {
        match self {
            CurrentStatus::InSelection => 10,
            CurrentStatus::OrderBooked => 20,
            CurrentStatus::FabricInHouse => 30,
            CurrentStatus::InCutting => 40,
            CurrentStatus::InSewing => 50,
            CurrentStatus::InInspection => 65,
            CurrentStatus::Logistic => 85,
            CurrentStatus::Warehouse => 100,
        }
    }
}

impl std::str::FromStr for CurrentStatus {
    type Err = GateInError;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s).ok_or_else(|| crate::gatein_error!("Unknown current status: {:?}", s))
    }
}

impl std::fmt::Display for CurrentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Completion percentage for a raw status label; unknown or missing statuses are 0.
pub fn completion_percent(status: Option<&str>) -> u8 {
    status
        .and_then(CurrentStatus::from_label)
        .map_or(0, |status| status.completion_percent())
}
