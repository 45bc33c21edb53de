use schoolmap_view::DetailTab;

pub(crate) const HELP: &str = "\
Commands:
  list                 show the school table
  select <n|id>        select a school by table number or record id
  search <text>        search places by name
  pick <n>             select the N-th search result
  tab <overview|reviews>
  close                clear the selection
  help                 show this text
  quit                 leave the browser";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectTarget {
    /// 1-based row in the school table.
    Row(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Noop,
    List,
    Select(SelectTarget),
    Search(String),
    Pick(usize),
    Tab(DetailTab),
    Close,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parses one input line. The error is a message for the user.
    pub(crate) fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Noop),
            "list" | "ls" => Ok(Self::List),
            "select" | "s" => {
                if rest.is_empty() {
                    return Err("usage: select <n|id>".to_string());
                }
                Ok(Self::Select(match rest.parse::<usize>() {
                    Ok(row) => SelectTarget::Row(row),
                    Err(_) => SelectTarget::Id(rest.to_string()),
                }))
            }
            "search" | "find" => {
                if rest.is_empty() {
                    return Err("usage: search <text>".to_string());
                }
                Ok(Self::Search(rest.to_string()))
            }
            "pick" => rest
                .parse::<usize>()
                .map(Self::Pick)
                .map_err(|_| "usage: pick <n>".to_string()),
            "tab" => rest.parse::<DetailTab>().map(Self::Tab),
            "close" | "clear" => Ok(Self::Close),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}'; type 'help'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_noop() {
        assert_eq!(BrowseCommand::parse("   "), Ok(BrowseCommand::Noop));
    }

    #[test]
    fn select_by_row_or_id() {
        assert_eq!(
            BrowseCommand::parse("select 3"),
            Ok(BrowseCommand::Select(SelectTarget::Row(3)))
        );
        assert_eq!(
            BrowseCommand::parse("SELECT 65a1f0c2e4b0"),
            Ok(BrowseCommand::Select(SelectTarget::Id("65a1f0c2e4b0".to_string())))
        );
    }

    #[test]
    fn select_without_argument_is_error() {
        assert!(BrowseCommand::parse("select").is_err());
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            BrowseCommand::parse("search  keffi   grammar school "),
            Ok(BrowseCommand::Search("keffi   grammar school".to_string()))
        );
    }

    #[test]
    fn pick_requires_number() {
        assert_eq!(BrowseCommand::parse("pick 2"), Ok(BrowseCommand::Pick(2)));
        assert!(BrowseCommand::parse("pick two").is_err());
    }

    #[test]
    fn tab_parses_names() {
        assert_eq!(
            BrowseCommand::parse("tab reviews"),
            Ok(BrowseCommand::Tab(DetailTab::Reviews))
        );
        assert_eq!(
            BrowseCommand::parse("tab overview"),
            Ok(BrowseCommand::Tab(DetailTab::Overview))
        );
        assert!(BrowseCommand::parse("tab photos").is_err());
    }

    #[test]
    fn aliases() {
        assert_eq!(BrowseCommand::parse("ls"), Ok(BrowseCommand::List));
        assert_eq!(BrowseCommand::parse("q"), Ok(BrowseCommand::Quit));
        assert_eq!(BrowseCommand::parse("clear"), Ok(BrowseCommand::Close));
    }

    #[test]
    fn unknown_verb_mentions_help() {
        let err = BrowseCommand::parse("zoom 4").unwrap_err();
        assert!(err.contains("zoom"));
        assert!(err.contains("help"));
    }
}
