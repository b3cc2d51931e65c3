//! Deferred reply scheduling.
//!
//! Every accepted submission schedules one independent reply task. Tasks are
//! owned by a [`JoinSet`], so dropping the scheduler (or calling
//! [`ReplyScheduler::cancel_all`]) aborts anything still pending.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::responder::{Reply, ReplyRequest, Responder};

/// Owns pending reply tasks for one chat view.
pub struct ReplyScheduler {
    responder: Arc<dyn Responder>,
    tasks: JoinSet<Reply>,
}

impl ReplyScheduler {
    /// Create a scheduler backed by the given responder.
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            responder,
            tasks: JoinSet::new(),
        }
    }

    /// Name of the responder in use.
    pub fn responder_name(&self) -> &str {
        self.responder.name()
    }

    /// Schedule a reply. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, request: ReplyRequest) {
        let responder = Arc::clone(&self.responder);
        debug!(
            in_reply_to = %request.in_reply_to,
            responder = responder.name(),
            pending = self.tasks.len() + 1,
            "reply scheduled"
        );
        self.tasks.spawn(async move {
            let content = responder.respond(&request).await;
            Reply {
                in_reply_to: request.in_reply_to,
                content,
                responder: responder.name().to_string(),
            }
        });
    }

    /// Number of replies not yet collected.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for the next finished reply, in completion order.
    ///
    /// Returns `None` once nothing is pending. Cancel-safe.
    pub async fn next_reply(&mut self) -> Option<Reply> {
        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(reply) => return Some(reply),
                Err(e) if e.is_cancelled() => {}
                Err(e) => warn!(error = %e, "reply task failed"),
            }
        }
        None
    }

    /// Abort every pending reply.
    pub fn cancel_all(&mut self) {
        if !self.tasks.is_empty() {
            debug!(pending = self.tasks.len(), "cancelling pending replies");
        }
        // Dropping the old set aborts its tasks and leaves nothing pending
        self.tasks = JoinSet::new();
    }
}

impl std::fmt::Debug for ReplyScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyScheduler")
            .field("responder", &self.responder.name())
            .field("pending", &self.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageId;
    use crate::responder::{SimulatedResponder, DEFAULT_REPLY_DELAY, SAMPLE_REPLY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    fn request(prompt: &str) -> ReplyRequest {
        ReplyRequest {
            in_reply_to: MessageId::new(),
            prompt: prompt.into(),
        }
    }

    fn scheduler() -> ReplyScheduler {
        ReplyScheduler::new(Arc::new(SimulatedResponder::new()))
    }

    /// Responder whose delay depends on the prompt length, to reorder replies.
    struct LengthDelayResponder;

    #[async_trait::async_trait]
    impl Responder for LengthDelayResponder {
        fn name(&self) -> &str {
            "length"
        }

        async fn respond(&self, request: &ReplyRequest) -> String {
            let ms = u64::try_from(request.prompt.len()).unwrap_or(u64::MAX) * 100;
            tokio::time::sleep(Duration::from_millis(ms)).await;
            request.prompt.clone()
        }
    }

    struct CountingResponder(Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl Responder for CountingResponder {
        fn name(&self) -> &str {
            "counting"
        }

        async fn respond(&self, _request: &ReplyRequest) -> String {
            tokio::time::sleep(DEFAULT_REPLY_DELAY).await;
            self.0.fetch_add(1, Ordering::SeqCst);
            String::new()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut scheduler = scheduler();
        let req = request("hello");
        let id = req.in_reply_to;
        let start = Instant::now();

        scheduler.schedule(req);
        assert_eq!(scheduler.pending(), 1);

        let reply = scheduler.next_reply().await.expect("reply");
        assert!(start.elapsed() >= DEFAULT_REPLY_DELAY);
        assert_eq!(reply.in_reply_to, id);
        assert_eq!(reply.content, SAMPLE_REPLY);
        assert_eq!(reply.responder, "simulated");
        assert!(scheduler.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_reply_before_delay() {
        let mut scheduler = scheduler();
        scheduler.schedule(request("hello"));

        let early = tokio::time::timeout(Duration::from_millis(799), scheduler.next_reply()).await;
        assert!(early.is_err());
        assert_eq!(scheduler.pending(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_reply_when_idle_returns_none() {
        let mut scheduler = scheduler();
        assert!(scheduler.next_reply().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_submission_gets_its_own_reply() {
        let mut scheduler = scheduler();
        let ids: Vec<MessageId> = (0..3)
            .map(|i| {
                let req = request(&format!("message {i}"));
                let id = req.in_reply_to;
                scheduler.schedule(req);
                id
            })
            .collect();
        assert_eq!(scheduler.pending(), 3);

        let mut answered = Vec::new();
        while let Some(reply) = scheduler.next_reply().await {
            answered.push(reply.in_reply_to);
        }
        answered.sort_by_key(|id| ids.iter().position(|x| x == id));
        assert_eq!(answered, ids);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_come_back_in_completion_order() {
        let mut scheduler = ReplyScheduler::new(Arc::new(LengthDelayResponder));
        scheduler.schedule(request("slower"));
        scheduler.schedule(request("ok"));

        assert_eq!(scheduler.next_reply().await.unwrap().content, "ok");
        assert_eq!(scheduler.next_reply().await.unwrap().content, "slower");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_aborts_pending() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut scheduler = ReplyScheduler::new(Arc::new(CountingResponder(Arc::clone(&fired))));
        scheduler.schedule(request("a"));
        scheduler.schedule(request("b"));

        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.is_idle());
        assert!(scheduler.next_reply().await.is_none());

        tokio::time::sleep(DEFAULT_REPLY_DELAY * 2).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending() {
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let mut scheduler =
                ReplyScheduler::new(Arc::new(CountingResponder(Arc::clone(&fired))));
            scheduler.schedule(request("a"));
        }

        tokio::time::sleep(DEFAULT_REPLY_DELAY * 2).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
