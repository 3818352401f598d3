#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use taskr::libs::messages::Message;
    use taskr::libs::prompt::Prompter;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_read_line_trims_surrounding_whitespace() {
        let mut p = prompter("  Buy milk  \n");
        assert_eq!(p.read_line(Message::PromptTaskTitle).unwrap(), "Buy milk");
    }

    #[test]
    fn test_read_line_keeps_interior_whitespace() {
        let mut p = prompter("Buy oat milk\n");
        assert_eq!(p.read_line(Message::PromptTaskTitle).unwrap(), "Buy oat milk");
    }

    #[test]
    fn test_read_token_takes_first_word_and_consumes_line() {
        let mut p = prompter("high priority\nerrands\n");
        assert_eq!(p.read_token(Message::PromptTaskPriority).unwrap(), "high");
        // The rest of the first line is gone; the next read starts fresh
        assert_eq!(p.read_line(Message::PromptTaskCategory).unwrap(), "errands");
    }

    #[test]
    fn test_read_token_empty_line_yields_empty_token() {
        let mut p = prompter("\n");
        assert_eq!(p.read_token(Message::PromptUpdatedTitle).unwrap(), "");
    }

    #[test]
    fn test_read_token_whitespace_line_yields_empty_token() {
        let mut p = prompter("   \n");
        assert_eq!(p.read_token(Message::PromptUpdatedTitle).unwrap(), "");
    }

    #[test]
    fn test_read_id_parses_integer() {
        let mut p = prompter("7\n");
        assert_eq!(p.read_id(Message::PromptUpdateId).unwrap(), 7);
    }

    #[test]
    fn test_read_id_non_numeric_yields_zero() {
        let mut p = prompter("abc\n");
        assert_eq!(p.read_id(Message::PromptDeleteId).unwrap(), 0);
    }

    #[test]
    fn test_end_of_input_behaves_like_empty_line() {
        let mut p = prompter("");
        assert_eq!(p.read_line(Message::PromptTaskTitle).unwrap(), "");
        assert_eq!(p.read_token(Message::PromptTaskPriority).unwrap(), "");
        assert_eq!(p.read_id(Message::PromptDeleteId).unwrap(), 0);
    }
}
