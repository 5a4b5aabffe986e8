use dioxus_logger::tracing;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use uuid::Uuid;

use crate::model::giveaway::GiveawayId;

/// Registry of pending deferred resolutions, keyed by giveaway.
///
/// Each giveaway gets at most one one-shot job on the shared `JobScheduler`. The job
/// UUID is kept so an early `end` can unschedule the pending callback instead of leaving
/// it to fire into an already-resolved giveaway.
#[derive(Clone)]
pub struct ResolutionTimers {
    scheduler: JobScheduler,
    jobs: Arc<Mutex<HashMap<GiveawayId, Uuid>>>,
}

impl ResolutionTimers {
    /// Creates the registry on top of an existing scheduler.
    ///
    /// Jobs only fire once the scheduler has been started.
    pub fn new(scheduler: JobScheduler) -> Self {
        Self {
            scheduler,
            jobs: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a scheduler, starts it and wraps it in a registry.
    pub async fn start() -> Result<Self, JobSchedulerError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        tracing::info!("Giveaway resolution scheduler started");

        Ok(Self::new(scheduler))
    }

    /// Schedules `task` to run once after `delay`.
    ///
    /// Any job already armed for the same giveaway is cancelled first.
    ///
    /// # Arguments
    /// - `id` - Giveaway the job belongs to
    /// - `delay` - Time until the job fires
    /// - `task` - Callback to run when the job fires
    ///
    /// # Returns
    /// - `Ok(())` - Job scheduled
    /// - `Err(JobSchedulerError)` - Scheduler rejected the job
    pub async fn arm<F, Fut>(
        &self,
        id: GiveawayId,
        delay: Duration,
        task: F,
    ) -> Result<(), JobSchedulerError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel(id).await;

        let task = Arc::new(task);
        let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
            let task = task.clone();
            Box::pin(async move {
                task().await;
            })
        })?;

        // Recorded before the job can fire so a `forget` from the job always finds it
        let uuid = job.guid();
        self.jobs.lock().await.insert(id, uuid);

        if let Err(e) = self.scheduler.add(job).await {
            self.jobs.lock().await.remove(&id);
            return Err(e);
        }

        tracing::debug!("Armed resolution for giveaway {} in {:?}", id, delay);

        Ok(())
    }

    /// Unschedules the pending job for a giveaway, if any.
    ///
    /// # Returns
    /// - `true` - A pending job was found and removed
    /// - `false` - Nothing was armed for this giveaway
    pub async fn cancel(&self, id: GiveawayId) -> bool {
        let Some(uuid) = self.jobs.lock().await.remove(&id) else {
            return false;
        };

        if let Err(e) = self.scheduler.remove(&uuid).await {
            tracing::warn!(
                "Failed to unschedule resolution job {} for giveaway {}: {}",
                uuid,
                id,
                e
            );
        } else {
            tracing::debug!("Cancelled resolution job for giveaway {}", id);
        }

        true
    }

    /// Drops the bookkeeping for a job that has already fired.
    pub async fn forget(&self, id: GiveawayId) {
        self.jobs.lock().await.remove(&id);
    }

    #[cfg(test)]
    pub async fn is_armed(&self, id: GiveawayId) -> bool {
        self.jobs.lock().await.contains_key(&id)
    }

    /// Stops the scheduler, discarding every pending job.
    pub async fn shutdown(&self) -> Result<(), JobSchedulerError> {
        let pending = {
            let mut jobs = self.jobs.lock().await;
            let pending = jobs.len();
            jobs.clear();
            pending
        };

        let mut scheduler = self.scheduler.clone();
        scheduler.shutdown().await?;

        tracing::info!(
            "Giveaway resolution scheduler stopped, {} pending resolution(s) discarded",
            pending
        );

        Ok(())
    }
}
