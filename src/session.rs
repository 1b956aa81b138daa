//! Caller-owned presentation state for one user session

use log::debug;

use crate::request::GenerationResult;

/// Loading flag, current result slot and error text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSession
{   pub loading: bool
  , pub result: Option<GenerationResult>
  , pub error: Option<String>
}

impl GenerationSession
{   pub fn new() -> Self
    {   Self::default()
    }

    /// Enter the loading state and drop the previous outcome
    pub fn begin(&mut self)
    {   debug!("Session entering loading state");
        self.loading = true;
        self.error = None;
        self.result = None;
    }

    /// Record the outcome of a generation; always clears loading
    pub fn finish(
      &mut self
    , outcome: Result<GenerationResult, crate::error::Error>
    )
    {   self.loading = false;
        match outcome
        {   Ok(result) => {
              self.error = None;
              self.result = Some(result);
            }
          , Err(e) => {
              debug!("Session recording error: {}", e);
              self.result = None;
              self.error = Some(e.user_message());
            }
        }
    }

    /// Record an error raised before generation started
    pub fn reject(&mut self, error: crate::error::Error)
    {   debug!("Session rejecting submission: {}", error);
        self.error = Some(error.user_message());
    }
}
