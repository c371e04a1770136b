use std::{sync::Arc, time::Duration};

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::{CACHE_EXPIRY, PricingService};

/// Period of the price cache wipe in production.
pub const CACHE_REFRESH_INTERVAL: Duration =
    Duration::from_secs(CACHE_EXPIRY.whole_seconds().unsigned_abs());

/// Scheduler that wipes the price cache every `every`, so the next lookups
/// draw fresh prices. The caller starts it.
pub async fn scheduler(
    pricing: Arc<PricingService>,
    every: Duration,
) -> Result<JobScheduler, JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    sched
        .add(Job::new_repeated_async(every, move |_uuid, _l| {
            let pricing = pricing.clone();

            Box::pin(async move {
                pricing.clear_cache();
                tracing::info!("refreshed simulated grocery prices");
            })
        })?)
        .await?;

    Ok(sched)
}
