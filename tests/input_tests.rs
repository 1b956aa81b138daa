use std::io::{Cursor, Write};

use devlog::input::read_input;
use devlog::Error;

#[test]
fn test_inline_text_wins()
{   let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "from file").unwrap();

    let input = read_input(
      Some("React Query")
    , Some(file.path())
    , Cursor::new("from stdin")
    );
    assert_eq!(input, Ok("React Query".to_string()));
}

#[test]
fn test_file_wins_over_stdin_and_is_kept_verbatim()
{   let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "fn main() {{}}\n").unwrap();

    let input = read_input(
      None
    , Some(file.path())
    , Cursor::new("from stdin")
    );
    assert_eq!(input, Ok("fn main() {}\n".to_string()));
}

#[test]
fn test_stdin_trailing_newlines_are_stripped()
{   let input = read_input(None, None, Cursor::new("React Query\r\n\n"));
    assert_eq!(input, Ok("React Query".to_string()));
}

#[test]
fn test_stdin_keeps_inner_lines()
{   let code = "fn a() {}\n\nfn b() {}\n";
    let input = read_input(None, None, Cursor::new(code));
    assert_eq!(input, Ok("fn a() {}\n\nfn b() {}".to_string()));
}

#[test]
fn test_stdin_of_only_newlines_is_empty()
{   let input = read_input(None, None, Cursor::new("\n")).unwrap();
    assert!(input.is_empty());
}

#[test]
fn test_missing_file_is_reported()
{   let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.rs");

    match read_input(None, Some(missing.as_path()), Cursor::new(""))
    {   Err(Error::Other(msg)) => assert!(msg.contains("nope.rs"))
      , other => panic!("unexpected result: {:?}", other)
    }
}
