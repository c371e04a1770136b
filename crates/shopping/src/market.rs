use serde::Serialize;
use strum::{AsRefStr, Display};
use time::Month;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StoreQuality {
    Budget,
    Bulk,
    Standard,
    Premium,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StoreChain {
    pub name: &'static str,
    pub multiplier: f64,
    pub quality: StoreQuality,
}

const fn chain(name: &'static str, multiplier: f64, quality: StoreQuality) -> StoreChain {
    StoreChain {
        name,
        multiplier,
        quality,
    }
}

/// Known chains, cheapest first.
pub const STORE_CHAINS: [StoreChain; 7] = [
    chain("Aldi", 0.75, StoreQuality::Budget),
    chain("Walmart", 0.82, StoreQuality::Budget),
    chain("Costco", 0.85, StoreQuality::Bulk),
    chain("Target", 0.92, StoreQuality::Standard),
    chain("Jewel-Osco", 1.0, StoreQuality::Standard),
    chain("Kroger", 1.05, StoreQuality::Standard),
    chain("Whole Foods", 1.35, StoreQuality::Premium),
];

/// Used when a preferred store matches no known chain.
pub const FALLBACK_STORE: StoreChain = STORE_CHAINS[1];

/// Chains whose name contains `preferred` (case-insensitive), or all chains.
pub fn matching_chains(preferred: Option<&str>) -> Vec<StoreChain> {
    let Some(preferred) = preferred.map(str::to_lowercase) else {
        return STORE_CHAINS.to_vec();
    };

    STORE_CHAINS
        .iter()
        .filter(|chain| chain.name.to_lowercase().contains(&preferred))
        .copied()
        .collect()
}

/// Price level of the city in the first comma-separated segment.
pub fn location_multiplier(location: Option<&str>) -> f64 {
    let Some(location) = location else {
        return 1.0;
    };

    let city = location
        .to_lowercase()
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned();

    match city.as_str() {
        "new york" => 1.35,
        "san francisco" => 1.45,
        "los angeles" => 1.25,
        "chicago" => 1.15,
        "miami" => 1.20,
        "seattle" => 1.30,
        "boston" => 1.28,
        "denver" => 1.05,
        "austin" => 1.10,
        "atlanta" => 1.08,
        "phoenix" => 1.02,
        "dallas" => 1.06,
        _ => 1.0,
    }
}

/// Summer discount and winter markup for seasonal produce.
pub fn seasonal_multiplier(month: Month) -> f64 {
    match month {
        Month::May | Month::June | Month::July | Month::August | Month::September => 0.85,
        Month::November | Month::December | Month::January | Month::February => 1.25,
        _ => 1.0,
    }
}
