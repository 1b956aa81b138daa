use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use devlog::{
  Audience, DevlogBackend, DevlogConfig, Error, GenerationRequest,
  GenerationSession, Language, Mode, Tone
};

/// Generate a developer blog draft and thumbnail from a topic or code
#[derive(Debug, Parser)]
#[command(name = "devlog", version)]
struct Cli
{   /// Topic text or code; read from stdin when omitted
    #[arg(conflicts_with = "file")]
    input: Option<String>
  , /// topic or code
    #[arg(long, default_value = "topic")]
    mode: Mode
  , /// friendly, professional or simple
    #[arg(long, default_value = "friendly")]
    tone: Tone
  , /// beginner or senior
    #[arg(long, default_value = "beginner")]
    audience: Audience
  , /// korean, english or japanese
    #[arg(long, default_value = "korean")]
    language: Language
  , /// Read input from a file
    #[arg(long)]
    file: Option<PathBuf>
  , /// Write the markdown article to this path instead of stdout
    #[arg(long)]
    out: Option<PathBuf>
  , /// Print the prompts that would be sent and exit
    #[arg(long)]
    print_prompt: bool
}

fn render(session: &GenerationSession, out: Option<&PathBuf>)
  -> Result<(), Error>
{   let Some(result) = &session.result
    else
    {   return Ok(());
    };

    println!("Thumbnail: {}", result.thumbnail_image_url);
    match out
    {   Some(path) => {
          std::fs::write(path, &result.article_markdown)
            .map_err(|e| {
              Error::Other(
                format!("Failed to write {}: {}", path.display(), e)
              )
            })?;
          println!("Article written to {}", path.display());
        }
      , None => {
          println!();
          println!("{}", result.article_markdown);
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), Error>
{   let raw_input = devlog::input::read_input(
      cli.input.as_deref()
    , cli.file.as_deref()
    , std::io::stdin()
    )?;
    let request = GenerationRequest::new(cli.mode, raw_input)
      .with_tone(cli.tone)
      .with_audience(cli.audience)
      .with_language(cli.language);

    if cli.print_prompt
    {   println!("{}", devlog::prompt::preview(&request)?);
        return Ok(());
    }

    let config = DevlogConfig::from_env();
    let backend = DevlogBackend::new(&config)?;
    let mut session = GenerationSession::new();

    match backend.generate(request).await
    {   Ok(mut reply_rx) => {
          session.begin();
          eprintln!("Generating article and thumbnail...");
          let outcome = reply_rx.recv().await
            .unwrap_or_else(|| {
              Err(Error::Other("Backend disconnected".to_string()))
            });
          session.finish(outcome);
        }
      , Err(e) => session.reject(e)
    }

    let _ = backend.shutdown().await;

    if let Some(message) = &session.error
    {   return Err(Error::Other(message.clone()));
    }
    render(&session, cli.out.as_ref())?;
    info!("Done");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode
{   env_logger::init();
    let cli = Cli::parse();

    match run(cli).await
    {   Ok(()) => ExitCode::SUCCESS
      , Err(e) => {
          error!("{}", e);
          eprintln!("{}", e.user_message());
          ExitCode::FAILURE
        }
    }
}
