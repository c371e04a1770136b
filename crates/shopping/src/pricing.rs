use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::Serialize;
use strum::{AsRefStr, Display};
use yeschef_shared::Clock;

use crate::{
    Category, FALLBACK_STORE, base_price, item_category, location_multiplier, matching_chains,
    seasonal_multiplier, STORE_CHAINS,
};

/// How long a computed price stays valid.
pub const CACHE_EXPIRY: time::Duration = time::Duration::minutes(30);

pub const FALLBACK_PRICE: f64 = 3.99;
pub const FALLBACK_UNIT: &str = "item";
pub const FALLBACK_STORE_NAME: &str = "Local Market";

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    fn from_volatility(volatility: f64) -> Self {
        if volatility > 1.05 {
            Trend::Up
        } else if volatility < 0.95 {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePrice {
    pub item: String,
    pub price: f64,
    pub unit: String,
    pub store: String,
    /// Unix milliseconds.
    pub last_updated: i64,
    pub trend: Trend,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub items: Vec<LivePrice>,
    pub total: f64,
    pub average_per_item: f64,
    pub breakdown: BTreeMap<Category, f64>,
}

type CacheKey = (String, Option<String>, Option<String>);

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Simulated market prices built from the static price list.
///
/// Each miss draws a fresh volatility factor and store; results are cached
/// per item, location and preferred store for [`CACHE_EXPIRY`].
pub struct PricingService {
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
    cache: Mutex<HashMap<CacheKey, LivePrice>>,
}

impl PricingService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(clock, StdRng::from_os_rng())
    }

    pub fn with_seed(clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self::with_rng(clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        Self {
            clock,
            rng: Mutex::new(rng),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let cleared = cache.len();
        cache.clear();

        tracing::debug!(cleared, "price cache cleared");
    }

    pub fn cached_len(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn cached(&self, key: &CacheKey, now: i64) -> Option<LivePrice> {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let cached = cache.get(key)?;

        if now - cached.last_updated < CACHE_EXPIRY.whole_milliseconds() as i64 {
            return Some(cached.clone());
        }

        None
    }

    pub async fn live_price(
        &self,
        item: &str,
        location: Option<&str>,
        preferred_store: Option<&str>,
    ) -> LivePrice {
        let now = self.clock.unix_millis();
        let key = (
            item.to_owned(),
            location.map(str::to_owned),
            preferred_store.map(str::to_owned),
        );

        if let Some(cached) = self.cached(&key, now) {
            tracing::debug!(item, "price cache hit");
            return cached;
        }

        let Some(base) = base_price(item) else {
            return LivePrice {
                item: item.to_owned(),
                price: FALLBACK_PRICE,
                unit: FALLBACK_UNIT.to_owned(),
                store: FALLBACK_STORE_NAME.to_owned(),
                last_updated: now,
                trend: Trend::Stable,
            };
        };

        let seasonal = if base.seasonal && base.category == Category::Vegetable {
            seasonal_multiplier(self.clock.now().month())
        } else {
            1.0
        };

        let (volatility, store) = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            let volatility = 0.9 + rng.random::<f64>() * 0.2;
            let store = matching_chains(preferred_store)
                .choose(&mut *rng)
                .copied()
                .unwrap_or(FALLBACK_STORE);

            (volatility, store)
        };

        let price = base.price
            * location_multiplier(location)
            * seasonal
            * volatility
            * store.multiplier;

        let live = LivePrice {
            item: item.to_owned(),
            price: round2(price),
            unit: base.unit.to_owned(),
            store: store.name.to_owned(),
            last_updated: now,
            trend: Trend::from_volatility(volatility),
        };

        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, live.clone());

        live
    }

    /// Prices every item concurrently, keeping input order.
    pub async fn bulk_prices<S: AsRef<str>>(
        &self,
        items: &[S],
        location: Option<&str>,
        preferred_store: Option<&str>,
    ) -> Vec<LivePrice> {
        futures::future::join_all(
            items
                .iter()
                .map(|item| self.live_price(item.as_ref(), location, preferred_store)),
        )
        .await
    }

    /// One price per known chain, cheapest first.
    pub async fn price_comparison(&self, item: &str, location: Option<&str>) -> Vec<LivePrice> {
        let mut prices = futures::future::join_all(
            STORE_CHAINS
                .iter()
                .map(|chain| self.live_price(item, location, Some(chain.name))),
        )
        .await;

        prices.sort_by(|a, b| a.price.total_cmp(&b.price));

        prices
    }

    pub async fn estimate_grocery_cost<S: AsRef<str>>(
        &self,
        items: &[S],
        location: Option<&str>,
    ) -> CostEstimate {
        let items = self.bulk_prices(items, location, None).await;
        let total: f64 = items.iter().map(|item| item.price).sum();

        let mut breakdown = BTreeMap::new();
        for item in &items {
            *breakdown.entry(item_category(&item.item)).or_insert(0.0) += item.price;
        }
        breakdown.values_mut().for_each(|sum| *sum = round2(*sum));

        let average_per_item = if items.is_empty() {
            0.0
        } else {
            round2(total / items.len() as f64)
        };

        CostEstimate {
            items,
            total: round2(total),
            average_per_item,
            breakdown,
        }
    }
}
