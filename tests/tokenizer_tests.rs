use word_analyzer::Tokenizer;

#[cfg(test)]
mod text_doc_tokenizer_tests {
    use super::*;

    #[test]
    fn test_lowercases_tokens() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "These Are ALL Mixed Case Tokens";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["these", "are", "all", "mixed", "case", "tokens"]);
    }

    #[test]
    fn test_tokenize_with_multiple_spaces() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "Netflix    and     Nvidia     did not generate";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["netflix", "and", "nvidia", "did", "not", "generate"]);
    }

    #[test]
    fn test_tokenize_with_tabs() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "Ford\tand\tDisney";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["ford", "and", "disney"]);
    }

    #[test]
    fn test_tokenize_with_line_breaks() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "Apple\r\nand\nMicrosoft";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["apple", "and", "microsoft"]);
    }

    #[test]
    fn test_tokenize_with_quotes_and_brackets() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "\"Hello,\" she said (quietly) [twice] «привет»";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["hello", "she", "said", "quietly", "twice", "привет"]);
    }

    #[test]
    fn test_drops_numbers_and_mixed_tokens() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "In 1812 the 2nd army moved 100km";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["in", "the", "army", "moved"]);
    }

    #[test]
    fn test_keeps_words_around_apostrophes() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "It's Pierre's book, isn't it";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["it", "pierre", "book", "is", "it"]);
    }

    #[test]
    fn test_splits_words_joined_by_punctuation() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "Apple,Microsoft and Ford/Disney: a well-known fact";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            tokens,
            vec!["apple", "microsoft", "and", "ford", "disney", "a", "well", "known", "fact"]
        );
    }

    #[test]
    fn test_splits_cyrillic_words_joined_by_dashes() {
        let tokenizer = Tokenizer::text_doc_parser();

        let text = "— Да,—сказал князь,—война!";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["да", "сказал", "князь", "война"]);
    }
}

#[cfg(test)]
mod typeset_text_tokenizer_tests {
    use super::*;

    #[test]
    fn test_merges_words_split_across_lines() {
        let tokenizer = Tokenizer::typeset_text_parser();

        let text = "Pierre Bezu-\nkhov and Natasha Ros-\r\ntova";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["pierre", "bezukhov", "and", "natasha", "rostova"]);
    }
}
