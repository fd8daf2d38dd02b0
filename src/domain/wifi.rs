// Simulated wifi access points
use crate::domain::error::DashboardError;
use serde::Serialize;

pub const NETWORKS: [&str; 4] = ["Home-Wifi", "Public-Hotspot", "NanoFish-AP", "AndroidAP"];

/// The only access point a connect attempt succeeds on.
pub const DRONE_ACCESS_POINT: &str = "NanoFish-AP";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WifiState {
    pub connecting: bool,
}

pub fn lookup_network(name: &str) -> Result<&'static str, DashboardError> {
    NETWORKS
        .into_iter()
        .find(|n| *n == name)
        .ok_or_else(|| DashboardError::UnknownNetwork(name.to_string()))
}
