use devlog::prompt::{
  audience_clause, build, comment_translation_directive, image_prompt,
  image_seed, language_directive, preview, tone_clause, IMAGE_STYLE
};
use devlog::{Audience, Error, GenerationRequest, Language, Mode, Tone};

const TONES: [Tone; 3]
  = [Tone::Friendly, Tone::Professional, Tone::Simple];
const AUDIENCES: [Audience; 2]
  = [Audience::Beginner, Audience::Senior];
const LANGUAGES: [Language; 3]
  = [Language::Korean, Language::English, Language::Japanese];
const MODES: [Mode; 2] = [Mode::Topic, Mode::Code];

fn all_requests(raw_input: &str) -> Vec<GenerationRequest>
{   let mut requests = vec![];
    for mode in MODES
    {   for tone in TONES
        {   for audience in AUDIENCES
            {   for language in LANGUAGES
                {   requests.push(
                      GenerationRequest::new(mode, raw_input)
                        .with_tone(tone)
                        .with_audience(audience)
                        .with_language(language)
                    );
                }
            }
        }
    }
    requests
}

#[test]
fn test_build_is_deterministic()
{   for request in all_requests("fn main() { println!(\"hi\"); }")
    {   assert_eq!(build(&request), build(&request.clone()));
    }
}

#[test]
fn test_clauses_appear_verbatim_for_every_combination()
{   for request in all_requests("Rust lifetimes")
    {   let prompts = build(&request);
        assert!(
          prompts.user_instruction
            .contains(tone_clause(request.tone)),
          "missing tone clause for {:?}", request
        );
        assert!(
          prompts.user_instruction
            .contains(audience_clause(request.audience)),
          "missing audience clause for {:?}", request
        );
        assert!(
          prompts.user_instruction
            .contains(&language_directive(request.language)),
          "missing language directive for {:?}", request
        );
        assert!(
          prompts.system_instruction
            .contains(request.language.name())
        );
    }
}

#[test]
fn test_fixed_clause_text()
{   assert_eq!(
      tone_clause(Tone::Friendly),
      "warm, emoji-inclusive conversational style"
    );
    assert_eq!(
      tone_clause(Tone::Professional),
      "formal, authoritative technical-documentation style"
    );
    assert_eq!(
      tone_clause(Tone::Simple),
      "analogy-heavy, beginner-friendly explanatory style"
    );
    assert_eq!(
      audience_clause(Audience::Beginner),
      "explain from first principles, assume no prior expertise"
    );
    assert_eq!(
      audience_clause(Audience::Senior),
      "include deep technical rationale, assume strong prior expertise"
    );
    assert_eq!(
      language_directive(Language::Japanese),
      "You must write the output, including any translated \
       code comments, in Japanese."
    );
}

#[test]
fn test_comment_translation_only_in_code_mode()
{   for request in all_requests("let x = 1; // counter")
    {   let prompts = build(&request);
        let directive
          = comment_translation_directive(request.language);
        let found = prompts.user_instruction.contains(&directive)
          || prompts.system_instruction.contains(&directive);
        match request.mode
        {   Mode::Code => assert!(found, "{:?}", request)
          , Mode::Topic => assert!(!found, "{:?}", request)
        }
    }
}

#[test]
fn test_topic_scenario()
{   let request = GenerationRequest
    {   mode: Mode::Topic
      , raw_input: "React Query".to_string()
      , tone: Tone::Friendly
      , audience: Audience::Beginner
      , language: Language::Korean
    };
    let prompts = build(&request);
    let user = &prompts.user_instruction;

    assert!(user.contains("React Query"));
    assert!(user.contains("warm, emoji-inclusive conversational style"));
    assert!(user.contains(
      "explain from first principles, assume no prior expertise"
    ));
    assert!(user.contains("in Korean."));
    for part in ["introduction", "body", "conclusion", "example code"]
    {   assert!(user.contains(part), "missing {}", part);
    }
    assert_eq!(image_seed(&request.raw_input), "React Query");
}

#[test]
fn test_long_code_is_kept_whole_but_seed_is_truncated()
{   let code: String = "abcdefghij".repeat(50);
    assert_eq!(code.chars().count(), 500);

    let request = GenerationRequest::new(Mode::Code, code.clone())
      .with_tone(Tone::Professional)
      .with_audience(Audience::Senior)
      .with_language(Language::English);
    let prompts = build(&request);

    assert!(prompts.user_instruction.contains(&code));
    assert_eq!(image_seed(&code), &code[..30]);
    assert!(image_prompt(&code).contains(&code[..30]));
    assert!(!image_prompt(&code).contains(&code[..31]));
}

#[test]
fn test_image_seed_counts_characters_not_bytes()
{   let topic = "리액트 쿼리 도입기: 서버 상태 관리를 위한 실전 가이드";
    let seed = image_seed(topic);
    assert_eq!(seed.chars().count(), 30);
    assert!(topic.starts_with(&seed));
}

#[test]
fn test_image_seed_short_input_is_whole()
{   assert_eq!(image_seed("Tokio"), "Tokio");
    assert_eq!(image_seed(""), "");
    let exact = "x".repeat(30);
    assert_eq!(image_seed(&exact), exact);
}

#[test]
fn test_image_prompt_is_mode_independent_and_styled()
{   let prompt = image_prompt("Async Rust");
    assert!(prompt.contains("Async Rust"));
    assert!(prompt.ends_with(IMAGE_STYLE));
    assert!(prompt.contains("flat design"));
    assert!(prompt.contains("pastel"));
    assert!(prompt.contains("vector art"));
    assert!(prompt.contains("no text in the image"));
}

#[test]
fn test_option_parsing()
{   assert_eq!("code".parse::<Mode>(), Ok(Mode::Code));
    assert_eq!("Professional".parse::<Tone>(), Ok(Tone::Professional));
    assert_eq!("senior".parse::<Audience>(), Ok(Audience::Senior));
    assert_eq!("JAPANESE".parse::<Language>(), Ok(Language::Japanese));
    assert!("casual".parse::<Tone>().is_err());
}

#[test]
fn test_preview_rejects_empty_input()
{   let request = GenerationRequest::new(Mode::Topic, "");
    assert_eq!(preview(&request), Err(Error::EmptyInput));
}

#[test]
fn test_preview_shows_both_instructions_and_image_prompt()
{   let request = GenerationRequest::new(Mode::Code, "let x = 1;");
    let text = preview(&request).unwrap();
    let prompts = build(&request);

    assert!(text.contains(&prompts.system_instruction));
    assert!(text.contains(&prompts.user_instruction));
    assert!(text.contains(&image_prompt("let x = 1;")));
}
