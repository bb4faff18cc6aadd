use crate::clients::PersonClient;
use crate::person_actor;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the person store task.
///
/// The store runs until every [`PersonClient`] clone is dropped; `shutdown`
/// drops the system's own client and waits for the task to drain. Clones
/// handed to the HTTP layer must be gone first (i.e. the server has stopped),
/// otherwise `shutdown` waits for them.
///
/// ```ignore
/// let system = PeopleSystem::new(32);
/// let app = build_router(AppState::new(system.people.clone(), enricher));
/// // ... serve until ctrl-c ...
/// drop(app);
/// system.shutdown().await?;
/// ```
pub struct PeopleSystem {
    pub people: PersonClient,
    handle: JoinHandle<()>,
}

impl PeopleSystem {
    /// Spawns the store with a request channel of `store_buffer` slots.
    pub fn new(store_buffer: usize) -> Self {
        let (actor, people) = person_actor::new(store_buffer);
        let handle = tokio::spawn(actor.run());
        info!(store_buffer, "Person store started");
        Self { people, handle }
    }

    /// Closes the store's channel and waits for its task to finish.
    ///
    /// Fails only if the store task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down person store...");
        drop(self.people);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Person store stopped.");
        Ok(())
    }
}
