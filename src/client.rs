use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use log::{debug, error, info};
use crate::DevlogFoot;

/// Clears the busy flag when dropped, on every exit path
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_>
{   fn drop(&mut self)
    {   self.0.store(false, Ordering::Release);
    }
}

/// Public API for the devlog backend - owns the task
pub struct DevlogBackend
{   hand: crate::DevlogHand
  , configured: bool
  , busy: Arc<AtomicBool>
  , _task_handle: tokio::task::JoinHandle<()>
}

impl DevlogBackend
{   /// Create a backend talking to the configured OpenAI endpoint
    pub fn new(
      config: &crate::config::DevlogConfig
    ) -> Result<Self, crate::error::Error>
    {   let provider
          = crate::providers::OpenAiClient::new(config)?;
        Ok(Self::with_provider(
          config.api_key.clone()
        , Box::new(provider)
        ))
    }

    /// Create and spawn a backend around any provider
    /// Returns immediately - spawns background task
    pub fn with_provider(
      api_key: Option<String>
    , provider: Box<dyn crate::providers::GenerationProvider>
    ) -> Self
    {   debug!("Creating DevlogBackend with task ownership");

        let orchestrator
          = crate::orchestrator::Orchestrator::new(api_key, provider);
        let configured = orchestrator.is_configured();

        let (generate_tx, generate_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::DevlogHand
        {   generate_tx
          , kill_process_tx
        };

        let foot = crate::DevlogFoot
        {   generate_rx
          , kill_process_rx
        };

        let busy = Arc::new(AtomicBool::new(false));
        let task_busy = busy.clone();
        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, orchestrator, task_busy).await
        });

        DevlogBackend
        {   hand
          , configured
          , busy
          , _task_handle
        }
    }

    /// Whether a generation is currently outstanding
    pub fn is_busy(&self) -> bool
    {   self.busy.load(Ordering::Acquire)
    }

    /// Queue a generation - returns almost immediately.
    ///
    /// Checks, in order: credential, non-empty input, busy flag.
    /// A submission while busy is rejected rather than queued.
    pub async fn generate(
      &self
    , request: crate::request::GenerationRequest
    ) -> Result<
        mpsc::UnboundedReceiver<crate::GenerateReply>,
        crate::error::Error
      >
    {   if !self.configured
        {   error!("Generation requested without an API key");
            return Err(crate::error::Error::MissingApiKey);
        }
        request.validate()?;

        if self.busy
          .compare_exchange(
            false, true, Ordering::AcqRel, Ordering::Acquire
          )
          .is_err()
        {   debug!("Rejecting generation: backend busy");
            return Err(crate::error::Error::Busy);
        }

        debug!("generate queuing {:?} request", request.mode);
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::GenerateArgs
        {   request
          , reply: reply_tx
        };

        self.hand.generate_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            self.busy.store(false, Ordering::Release);
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Queue a generation and wait for its result
    pub async fn generate_and_wait(
      &self
    , request: crate::request::GenerationRequest
    ) -> crate::GenerateReply
    {   let mut reply_rx = self.generate(request).await?;
        match reply_rx.recv().await
        {   Some(result) => result
          , None => {
              error!("Backend dropped generation reply");
              Err(crate::error::Error::Other(
                "Backend disconnected".to_string()
              ))
            }
        }
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down DevlogBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Other(
              "Backend already shutdown".to_string()
            )
          })?;

        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend stopped before confirming shutdown");
            Err(crate::error::Error::Other(
              "Backend already shutdown".to_string()
            ))
        }
    }
}

/// Main backend event loop
///
/// Generations run inline, so at most one is in flight; the busy
/// flag lets callers see that and reject re-submission.
async fn run_backend_loop(
  foot: crate::DevlogFoot
, orchestrator: crate::orchestrator::Orchestrator
, busy: Arc<AtomicBool>
)
{   debug!("Starting DevlogBackend event loop");
    let DevlogFoot
    {   mut generate_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = generate_rx.recv() => {
          debug!("Received Generate");
          let result = {
            let _busy = BusyGuard(&busy);
            orchestrator.generate(&cmd.request).await
          };
          let _ = cmd.reply.send(result);
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("DevlogBackend shutting down");
          break;
        }
      , else => {
          debug!("Command channels closed");
          break;
        }
      }
    }
}
