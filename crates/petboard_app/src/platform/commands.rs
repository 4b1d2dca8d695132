//! Line-command parsing for the terminal front end.

use petboard_core::Msg;

pub(crate) const HELP_TEXT: &str = "\
Commands:
  refresh                     reload the pet list
  name <text>                 set the create-form name
  type <text>                 set the create-form type
  create                      create a pet from the form
  edit <id> name <text>       edit a card's name field
  edit <id> type <text>       edit a card's type field
  save <id>                   send a card's edits to the server
  delete <id>                 delete a pet (asks for confirmation)
  file <id> <path>            pick a file for a card's upload
  upload <id>                 upload and link the selected file
  tag <id>                    run vision tagging on the card's image
  api <url>                   save a new API base URL and reload
  help                        show this text
  quit                        exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Msgs(Vec<Msg>),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub(crate) fn parse(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (word, rest) = split_word(line);
    match word {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "refresh" => Command::Msgs(vec![Msg::RefreshClicked]),
        "name" => Command::Msgs(vec![Msg::NameInputChanged(rest.to_string())]),
        "type" => Command::Msgs(vec![Msg::TypeInputChanged(rest.to_string())]),
        "create" => Command::Msgs(vec![Msg::CreateClicked]),
        "api" => Command::Msgs(vec![
            Msg::ApiInputChanged(rest.to_string()),
            Msg::SaveApiClicked,
        ]),
        "edit" => parse_edit(rest),
        "save" => with_id(rest, "usage: save <id>", |pet_id| Msg::SaveClicked { pet_id }),
        "delete" => with_id(rest, "usage: delete <id>", |pet_id| Msg::DeleteClicked {
            pet_id,
        }),
        "upload" => with_id(rest, "usage: upload <id>", |pet_id| Msg::UploadClicked {
            pet_id,
        }),
        "tag" => with_id(rest, "usage: tag <id>", |pet_id| Msg::TagClicked { pet_id }),
        "file" => {
            let (pet_id, path) = split_word(rest);
            if pet_id.is_empty() || path.is_empty() {
                Command::Invalid("usage: file <id> <path>".to_string())
            } else {
                Command::Msgs(vec![Msg::FileSelected {
                    pet_id: pet_id.to_string(),
                    path: path.to_string(),
                }])
            }
        }
        other => Command::Invalid(format!("unknown command: {other} (try \"help\")")),
    }
}

fn parse_edit(rest: &str) -> Command {
    let (pet_id, rest) = split_word(rest);
    let (field, text) = split_word(rest);
    if pet_id.is_empty() {
        return Command::Invalid("usage: edit <id> name|type <text>".to_string());
    }
    let pet_id = pet_id.to_string();
    let text = text.to_string();
    match field {
        "name" => Command::Msgs(vec![Msg::EditNameChanged { pet_id, text }]),
        "type" => Command::Msgs(vec![Msg::EditTypeChanged { pet_id, text }]),
        _ => Command::Invalid("usage: edit <id> name|type <text>".to_string()),
    }
}

fn with_id(rest: &str, usage: &str, build: impl FnOnce(String) -> Msg) -> Command {
    let (pet_id, _) = split_word(rest);
    if pet_id.is_empty() {
        Command::Invalid(usage.to_string())
    } else {
        Command::Msgs(vec![build(pet_id.to_string())])
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}
