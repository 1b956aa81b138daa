//! Request and result types for blog generation

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Which prompt template to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode
{   /// Write an article about a topic
    #[default]
    Topic
  , /// Explain a pasted code snippet
    Code
}

/// Stylistic directive for the article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone
{   #[default]
    Friendly
  , Professional
  , Simple
}

/// Target reader sophistication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience
{   #[default]
    Beginner
  , Senior
}

/// Output natural language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language
{   #[default]
    Korean
  , English
  , Japanese
}

impl Language
{   /// Literal language name inserted into prompts
    pub fn name(&self) -> &'static str
    {   match self
        {   Language::Korean => "Korean"
          , Language::English => "English"
          , Language::Japanese => "Japanese"
        }
    }
}

impl fmt::Display for Language
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.name())
    }
}

fn unknown(kind: &str, value: &str) -> crate::error::Error
{   crate::error::Error::Other(
      format!("Unknown {}: {}", kind, value)
    )
}

impl FromStr for Mode
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s.to_ascii_lowercase().as_str()
        {   "topic" => Ok(Mode::Topic)
          , "code" => Ok(Mode::Code)
          , _ => Err(unknown("mode", s))
        }
    }
}

impl FromStr for Tone
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s.to_ascii_lowercase().as_str()
        {   "friendly" => Ok(Tone::Friendly)
          , "professional" => Ok(Tone::Professional)
          , "simple" => Ok(Tone::Simple)
          , _ => Err(unknown("tone", s))
        }
    }
}

impl FromStr for Audience
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s.to_ascii_lowercase().as_str()
        {   "beginner" => Ok(Audience::Beginner)
          , "senior" => Ok(Audience::Senior)
          , _ => Err(unknown("audience", s))
        }
    }
}

impl FromStr for Language
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s.to_ascii_lowercase().as_str()
        {   "korean" => Ok(Language::Korean)
          , "english" => Ok(Language::English)
          , "japanese" => Ok(Language::Japanese)
          , _ => Err(unknown("language", s))
        }
    }
}

/// Everything the user chose for one generation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationRequest
{   pub mode: Mode
  , /// Topic text or pasted code
    pub raw_input: String
  , pub tone: Tone
  , pub audience: Audience
  , pub language: Language
}

impl GenerationRequest
{   /// Request with default options for the given mode and input
    pub fn new(mode: Mode, raw_input: impl Into<String>) -> Self
    {   GenerationRequest
        {   mode
          , raw_input: raw_input.into()
          , ..Default::default()
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self
    {   self.tone = tone;
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self
    {   self.audience = audience;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self
    {   self.language = language;
        self
    }

    /// Reject requests that must not reach the orchestrator
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.raw_input.is_empty()
        {   return Err(crate::error::Error::EmptyInput);
        }
        Ok(())
    }
}

/// System and user instructions for the chat completion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair
{   pub system_instruction: String
  , pub user_instruction: String
}

/// Article draft plus thumbnail from one successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult
{   /// Markdown article body
    pub article_markdown: String
  , /// Image URL as issued by the API; may expire
    pub thumbnail_image_url: String
}
