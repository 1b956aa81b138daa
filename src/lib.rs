pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod prompt;
pub mod input;
pub mod orchestrator;
pub mod client;
pub mod session;

pub use client::DevlogBackend;
pub use config::DevlogConfig;
pub use error::Error;
pub use orchestrator::Orchestrator;
pub use request::{
  Audience, GenerationRequest, GenerationResult, Language, Mode,
  PromptPair, Tone
};
pub use session::GenerationSession;

/*

devlog turns a topic or a code snippet into a markdown blog draft plus a
thumbnail image, using an OpenAI-compatible API.

devlog/
├── Cargo.toml
├── src/
│   ├── lib.rs           # Re-exports and backend channel interface
│   ├── main.rs          # Command-line front end
│   ├── error.rs         # Error type and user-facing messages
│   ├── config.rs        # Environment-driven configuration
│   ├── request.rs       # Request, prompt and result types
│   ├── prompt.rs        # Prompt builder
│   ├── input.rs         # Input source selection
│   ├── orchestrator.rs  # Text then image generation
│   ├── client.rs        # Single-flight backend task
│   ├── session.rs       # Caller-owned presentation state
│   └── providers/
│       ├── mod.rs       # GenerationProvider trait
│       └── openai.rs    # OpenAI HTTP client
└── tests/

*/

/// DEVLOG BACKEND INTERFACE:

// ===== Generate =====

pub type GenerateReply
  = Result<GenerationResult, crate::error::Error>;
pub type GenerateReplySender
  = tokio::sync::mpsc::UnboundedSender<GenerateReply>;

pub struct GenerateArgs
{   pub request: GenerationRequest
  , pub reply: GenerateReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== DevlogHand (sender side) =====

pub struct DevlogHand
{   pub generate_tx
      : tokio::sync::mpsc::UnboundedSender<GenerateArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== DevlogFoot (receiver side) =====

pub struct DevlogFoot
{   pub generate_rx
      : tokio::sync::mpsc::UnboundedReceiver<GenerateArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}
