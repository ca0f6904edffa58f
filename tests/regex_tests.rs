use mini_regex::{Range, Regex};

fn test_pattern(pattern: &str, text: &str, expected: bool) {
    let regex = Regex::new(pattern).unwrap_or_else(|e| panic!("Failed to compile pattern {}: {}", pattern, e));
    let result = regex.is_match(text);
    assert_eq!(result, expected,
        "Pattern '{}' against text '{}' - expected: {}, got: {}",
        pattern, text, expected, result);
}

fn test_find(pattern: &str, text: &str, expected: Option<(usize, usize)>) {
    let regex = Regex::new(pattern).unwrap_or_else(|e| panic!("Failed to compile pattern {}: {}", pattern, e));
    let result = regex.find(text);
    assert_eq!(result, expected.map(|(start, end)| Range::new(start, end)),
        "Pattern '{}' against text '{}'", pattern, text);
}

fn test_full(pattern: &str, text: &str, expected: bool) {
    let regex = Regex::new(pattern).unwrap_or_else(|e| panic!("Failed to compile pattern {}: {}", pattern, e));
    assert_eq!(regex.full_match(text), expected,
        "Pattern '{}' full match against '{}'", pattern, text);
}

#[cfg(test)]
mod basic_character_tests {
    use super::*;

    #[test]
    fn test_char_match() {
        test_pattern("a", "abc", true);
    }

    #[test]
    fn test_char_no_match() {
        test_pattern("x", "abc", false);
    }

    #[test]
    fn test_char_at_end() {
        test_find("c", "abc", Some((2, 3)));
    }

    #[test]
    fn test_empty_pattern() {
        test_find("", "", Some((0, 0)));
        test_find("", "abc", Some((0, 0)));
    }

    #[test]
    fn test_empty_text() {
        test_pattern("a", "", false);
    }

    #[test]
    fn test_non_ascii_text_uses_char_indices() {
        test_find("ü", "grüße", Some((2, 3)));
    }
}

#[cfg(test)]
mod dot_wildcard_tests {
    use super::*;

    #[test]
    fn test_dot_match() {
        test_pattern(".", "a", true);
    }

    #[test]
    fn test_dot_sequence() {
        test_find("a.c", "xabc", Some((1, 4)));
    }

    #[test]
    fn test_dot_no_match() {
        test_pattern(".", "", false);
    }

    #[test]
    fn test_multiple_dots() {
        test_pattern("...", "abc", true);
        test_pattern("....", "abc", false);
    }
}

#[cfg(test)]
mod escape_tests {
    use super::*;

    #[test]
    fn test_escaped_dot_matches_only_dot() {
        test_full("\\.", ".", true);
        test_pattern("\\.", "a", false);
    }

    #[test]
    fn test_escaped_backslash() {
        test_full("\\\\", "\\", true);
        test_pattern("\\\\", "/", false);
    }

    #[test]
    fn test_escaped_quantifiers() {
        test_find("a\\*", "aaa*", Some((2, 4)));
        test_full("1\\+1", "1+1", true);
        test_pattern("\\?", "why", false);
    }

    #[test]
    fn test_escaped_bracket() {
        test_full("\\[x]", "[x]", true);
    }

    #[test]
    fn test_escaped_ordinary_char() {
        test_full("\\a\\b", "ab", true);
    }
}

#[cfg(test)]
mod literal_specials_tests {
    use super::*;

    #[test]
    fn test_caret_and_dollar_are_literal() {
        test_find("^a$", "x^a$", Some((1, 4)));
        test_pattern("^abc", "abc", false);
    }

    #[test]
    fn test_pipe_and_parens_are_literal() {
        test_full("(a|b)", "(a|b)", true);
        test_pattern("a|b", "a", false);
    }

    #[test]
    fn test_lone_closing_bracket() {
        test_full("a]", "a]", true);
    }
}

#[cfg(test)]
mod character_class_tests {
    use super::*;

    #[test]
    fn test_positive_class() {
        test_find("[abc]", "xxbxx", Some((2, 3)));
        test_pattern("[xyz]", "banana", false);
    }

    #[test]
    fn test_class_matches_exactly_one_char() {
        for c in ["a", "b", "c"] {
            test_full("[abc]", c, true);
        }
        test_full("[abc]", "ab", false);
        test_full("[abc]", "d", false);
    }

    #[test]
    fn test_negative_class() {
        test_full("[^abc]", "d", true);
        test_full("[^abc]", "!", true);
        test_pattern("[^abc]", "abcabc", false);
    }

    #[test]
    fn test_caret_not_first_is_member() {
        test_full("[a^]", "^", true);
        test_full("[a^]", "b", false);
    }

    #[test]
    fn test_escapes_inside_class() {
        test_full("[\\]]", "]", true);
        test_full("[\\^]", "^", true);
        test_full("[\\^]", "a", false);
        test_full("[\\\\]", "\\", true);
    }

    #[test]
    fn test_specials_inside_class_are_literal() {
        test_full("[.*+?]+", "*.+?", true);
        test_pattern("[.]", "a", false);
    }

    #[test]
    fn test_empty_classes() {
        test_pattern("[]", "anything", false);
        test_full("[^]", "z", true);
    }
}

#[cfg(test)]
mod star_quantifier_tests {
    use super::*;

    #[test]
    fn test_star_zero_matches() {
        test_find("a*", "bbb", Some((0, 0)));
    }

    #[test]
    fn test_star_multiple_matches() {
        test_find("a*", "aaa", Some((0, 3)));
    }

    #[test]
    fn test_star_in_sequence() {
        test_full("ab*", "a", true);
        test_full("ab*", "abb", true);
    }

    #[test]
    fn test_star_then_literal() {
        test_find("a*b", "aaab", Some((0, 4)));
    }

    #[test]
    fn test_dot_star() {
        test_full(".*", "anything", true);
        test_full(".*", "", true);
    }
}

#[cfg(test)]
mod plus_quantifier_tests {
    use super::*;

    #[test]
    fn test_plus_multiple() {
        test_find("a+", "baaa", Some((1, 4)));
    }

    #[test]
    fn test_plus_requires_one() {
        test_pattern("a+", "bbb", false);
        test_pattern("a+", "", false);
        test_pattern("a+", "b", false);
    }

    #[test]
    fn test_plus_in_sequence() {
        test_full("ab+", "abb", true);
        test_pattern("ab+", "a", false);
    }

    #[test]
    fn test_plus_then_literal() {
        test_full("a+b", "aaab", true);
    }
}

#[cfg(test)]
mod question_quantifier_tests {
    use super::*;

    #[test]
    fn test_question_zero() {
        test_find("a?", "b", Some((0, 0)));
    }

    #[test]
    fn test_question_one() {
        test_find("a?", "a", Some((0, 1)));
    }

    #[test]
    fn test_question_takes_at_most_one() {
        test_find("a?", "aa", Some((0, 1)));
    }

    #[test]
    fn test_colour() {
        test_full("colou?r", "color", true);
        test_full("colou?r", "colour", true);
        test_full("colou?r", "colouur", false);
    }
}

#[cfg(test)]
mod sequence_tests {
    use super::*;

    #[test]
    fn test_exact_sequence() {
        test_full("abc", "abc", true);
    }

    #[test]
    fn test_sequence_in_middle() {
        test_find("abc", "xabcy", Some((1, 4)));
    }

    #[test]
    fn test_sequence_mismatch() {
        test_pattern("abc", "axc", false);
    }

    #[test]
    fn test_prefix_only() {
        test_pattern("hello", "hell", false);
        test_find("hello", "hello world", Some((0, 5)));
    }
}

#[cfg(test)]
mod full_match_tests {
    use super::*;

    #[test]
    fn test_full_match_requires_whole_text() {
        test_full("abc", "abcd", false);
        test_full("bcd", "abcd", false);
    }

    #[test]
    fn test_full_match_uses_leftmost_match() {
        // Leftmost match of `b*` in "ab" is the empty match at 0.
        test_full("b*", "ab", false);
        test_full("a?b*", "xb", false);
    }

    #[test]
    fn test_full_match_empty() {
        test_full("a*", "", true);
        test_full("a", "", false);
    }
}

#[cfg(test)]
mod real_world_patterns {
    use super::*;

    #[test]
    fn test_dotted_version() {
        test_find("[0123456789]+\\.[0123456789]+", "version 10.42 released", Some((8, 13)));
    }

    #[test]
    fn test_file_extension() {
        test_full(".*\\.rs", "src/main.rs", true);
        test_full(".*\\.rs", "src/main.rsx", false);
    }

    #[test]
    fn test_quoted_string() {
        test_find("\"[^\"]*\"", "say \"hi\" now", Some((4, 8)));
    }
}
