//! Prompt construction for article and thumbnail generation

use crate::request::{
  Audience, GenerationRequest, Language, Mode, PromptPair, Tone
};

/// Number of input characters used to seed the image prompt
pub const IMAGE_SEED_CHARS: usize = 30;

/// Constant style for every thumbnail
pub const IMAGE_STYLE: &str
  = "flat design, pastel yellow and blue colors, \
     vector art style, no text in the image.";

const SYSTEM_PERSONA: &str
  = "You are an experienced software engineer who writes \
     developer blog posts. Respond with a single article \
     formatted in Markdown.";

pub fn tone_clause(tone: Tone) -> &'static str
{   match tone
    {   Tone::Friendly
          => "warm, emoji-inclusive conversational style"
      , Tone::Professional
          => "formal, authoritative technical-documentation style"
      , Tone::Simple
          => "analogy-heavy, beginner-friendly explanatory style"
    }
}

pub fn audience_clause(audience: Audience) -> &'static str
{   match audience
    {   Audience::Beginner
          => "explain from first principles, assume no prior expertise"
      , Audience::Senior
          => "include deep technical rationale, \
              assume strong prior expertise"
    }
}

/// Directive fixing the output language.
///
/// Shared by both modes; the phrase about translated comments is part of
/// the language rule. Only Code mode adds `comment_translation_directive`.
pub fn language_directive(language: Language) -> String
{   format!(
      "You must write the output, including any translated \
       code comments, in {}."
    , language.name()
    )
}

/// Code mode only: translate comments inside the pasted code
pub fn comment_translation_directive(language: Language) -> String
{   format!(
      "Translate every inline code comment into {}."
    , language.name()
    )
}

fn style_lines(request: &GenerationRequest) -> String
{   format!(
      "Write in a {}.\nFor the reader: {}.\n{}"
    , tone_clause(request.tone)
    , audience_clause(request.audience)
    , language_directive(request.language)
    )
}

/// Build the instruction pair for the text generation call.
///
/// Pure and deterministic. The raw input is included in full.
pub fn build(request: &GenerationRequest) -> PromptPair
{   let system_instruction = format!(
      "{}\n{}"
    , SYSTEM_PERSONA
    , language_directive(request.language)
    );

    let user_instruction = match request.mode
    {   Mode::Topic => format!(
          "Tech blog topic: \"{}\".\n\
           Write a developer blog post about this topic. \
           Structure it with an introduction, a body, a conclusion \
           and example code, formatted cleanly in Markdown.\n{}"
        , request.raw_input
        , style_lines(request)
        )
      , Mode::Code => format!(
          "Analyze the following code and write a tech blog post \
           about it. Explain what the code does, the mechanism \
           behind it, and its advantages.\n{}\n{}\n\n\
           Code:\n{}"
        , style_lines(request)
        , comment_translation_directive(request.language)
        , request.raw_input
        )
    };

    PromptPair
    {   system_instruction
      , user_instruction
    }
}

/// First `IMAGE_SEED_CHARS` characters of the input, or all of it
pub fn image_seed(raw_input: &str) -> String
{   raw_input.chars().take(IMAGE_SEED_CHARS).collect()
}

/// Prompt for the thumbnail image generation call
pub fn image_prompt(raw_input: &str) -> String
{   format!(
      "Minimalist tech blog thumbnail about {}. {}"
    , image_seed(raw_input)
    , IMAGE_STYLE
    )
}

/// Text preview of everything that would be sent for `request`.
/// Rejects the same inputs a real generation would.
pub fn preview(request: &GenerationRequest)
  -> Result<String, crate::error::Error>
{   request.validate()?;
    let prompts = build(request);
    Ok(format!(
      "# System\n{}\n\n# User\n{}\n\n# Image\n{}"
    , prompts.system_instruction
    , prompts.user_instruction
    , image_prompt(&request.raw_input)
    ))
}
