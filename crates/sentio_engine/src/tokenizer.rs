//! Word tokenizer for lexical analysis.
//!
//! Lowercases, keeps contraction apostrophes inside words ("don't"), drops
//! quote marks and stray apostrophes, splits hyphenated compounds, and emits
//! every other non-word, non-space character as its own token.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}')
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_word_char(c) {
            current.extend(c.to_lowercase());
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let inside_word = prev.is_some_and(is_word_char) && next.is_some_and(is_word_char);

        // Apostrophe flanked by word characters belongs to the word.
        if is_apostrophe(c) && inside_word {
            current.push('\'');
            continue;
        }

        // Hyphenated compounds split into their parts, so "broken-hearted"
        // reads like "broken hearted".
        if c == '-' && inside_word {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }

        if c.is_whitespace() || is_quote(c) {
            continue;
        }
        tokens.push(c.to_string());
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
