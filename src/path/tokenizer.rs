//! Splits a path description into command letters and their operands
//!
//! The tokenizer is purely lexical. It does not know how many operands a
//! command takes and it keeps letters it has never heard of; both questions
//! belong to the interpreter.

use super::error::TokenizeError;

/// One command letter followed by every number up to the next letter.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    pub letter: char,
    pub operands: Vec<f64>,
    /// Byte offset of the letter in the source string
    pub offset: usize,
    /// Lexing stopped inside this command's operands. `operands` holds the
    /// numbers read before the fault.
    pub error: Option<TokenizeError>,
}

/// Streaming tokenizer over a path string.
///
/// Yields commands in source order. A bad number ends the stream with the
/// command it appeared in, carrying the error; anything else that cannot
/// start a command is yielded as `Err`. Either way the iterator is then
/// exhausted.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            done: false,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn fail(&mut self, error: TokenizeError) -> Option<Result<RawCommand, TokenizeError>> {
        self.done = true;
        Some(Err(error))
    }

    /// Read one number starting at the current position.
    ///
    /// A sign or a second decimal point terminates the literal, so `10-5`
    /// reads as two numbers and `.5.5` as `.5` followed by `.5`.
    fn read_number(&mut self) -> Result<f64, TokenizeError> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut end = start;

        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let int_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        let mut digits = end - int_start;
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            let frac_start = end;
            while bytes.get(end).is_some_and(u8::is_ascii_digit) {
                end += 1;
            }
            digits += end - frac_start;
        }

        if digits == 0 {
            self.pos = end;
            return Err(TokenizeError::InvalidNumber {
                offset: start,
                literal: self.src[start..end].to_string(),
            });
        }

        // An exponent only counts when digits follow it, otherwise the `e`
        // is left behind as a (meaningless) command letter.
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = exp_end;
            while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
                exp_end += 1;
            }
            if exp_end > exp_digits {
                end = exp_end;
            }
        }

        self.pos = end;
        let literal = &self.src[start..end];
        literal
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| TokenizeError::InvalidNumber {
                offset: start,
                literal: literal.to_string(),
            })
    }
}

fn starts_number(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.')
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<RawCommand, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.skip_separators();
        let b = self.peek()?;
        let offset = self.pos;

        if !b.is_ascii_alphabetic() {
            if starts_number(b) {
                return self.fail(TokenizeError::MissingCommand { offset });
            }
            let ch = self.src[offset..].chars().next().unwrap_or('\u{FFFD}');
            return self.fail(TokenizeError::UnexpectedChar { offset, ch });
        }

        self.pos += 1;
        let mut operands = Vec::new();
        let mut error = None;
        loop {
            self.skip_separators();
            match self.peek() {
                Some(c) if starts_number(c) => match self.read_number() {
                    Ok(value) => operands.push(value),
                    Err(e) => {
                        self.done = true;
                        error = Some(e);
                        break;
                    }
                },
                _ => break,
            }
        }

        Some(Ok(RawCommand {
            letter: b as char,
            operands,
            offset,
            error,
        }))
    }
}

/// Convenience wrapper collecting every command up to the first error.
///
/// A command cut short by a bad number is kept with its leading operands;
/// the error is moved out of it into the second slot.
pub fn tokenize(src: &str) -> (Vec<RawCommand>, Option<TokenizeError>) {
    let mut commands = Vec::new();
    for item in Tokenizer::new(src) {
        match item {
            Ok(mut cmd) => {
                let error = cmd.error.take();
                commands.push(cmd);
                if error.is_some() {
                    return (commands, error);
                }
            }
            Err(e) => return (commands, Some(e)),
        }
    }
    (commands, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters_and_operands(src: &str) -> Vec<(char, Vec<f64>)> {
        let (commands, error) = tokenize(src);
        assert!(error.is_none(), "unexpected error: {error:?}");
        commands
            .into_iter()
            .map(|c| (c.letter, c.operands))
            .collect()
    }

    #[test]
    fn commas_and_whitespace_are_equivalent() {
        assert_eq!(
            letters_and_operands("M0,0 L10,0"),
            vec![('M', vec![0.0, 0.0]), ('L', vec![10.0, 0.0])]
        );
        assert_eq!(
            letters_and_operands("M 0 0\n\tL 10 , 0"),
            vec![('M', vec![0.0, 0.0]), ('L', vec![10.0, 0.0])]
        );
    }

    #[test]
    fn signs_and_dots_split_numbers() {
        assert_eq!(
            letters_and_operands("c1.5-2.25.5.5+3"),
            vec![('c', vec![1.5, -2.25, 0.5, 0.5, 3.0])]
        );
    }

    #[test]
    fn letters_without_space_before_them() {
        assert_eq!(
            letters_and_operands("M31.5,24.5c1.12,0.75,2.66,0.67,3.73,0.5z"),
            vec![
                ('M', vec![31.5, 24.5]),
                ('c', vec![1.12, 0.75, 2.66, 0.67, 3.73, 0.5]),
                ('z', vec![]),
            ]
        );
    }

    #[test]
    fn exponent_is_accepted() {
        assert_eq!(letters_and_operands("L1e2,-2.5E-1"), vec![('L', vec![100.0, -0.25])]);
    }

    #[test]
    fn overflowing_literal_is_invalid() {
        let (commands, error) = tokenize("M0 0 L1e999 0");
        assert_eq!(commands.len(), 2);
        assert!(commands[1].operands.is_empty());
        assert!(matches!(error, Some(TokenizeError::InvalidNumber { offset: 6, .. })));
    }

    #[test]
    fn unknown_letters_are_preserved() {
        let parsed = letters_and_operands("M0 0 X 1 2 L3 4");
        assert_eq!(parsed[1], ('X', vec![1.0, 2.0]));
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn offsets_point_at_letters() {
        let (commands, _) = tokenize("M0 0  L5 5");
        assert_eq!(commands[0].offset, 0);
        assert_eq!(commands[1].offset, 6);
    }

    #[test]
    fn lone_sign_stops_the_stream() {
        let (commands, error) = tokenize("M0 0 L10 0 L - 5");
        assert_eq!(commands.len(), 3);
        assert!(commands[2].operands.is_empty());
        assert!(matches!(
            error,
            Some(TokenizeError::InvalidNumber { ref literal, .. }) if literal == "-"
        ));
    }

    #[test]
    fn bad_number_keeps_leading_operands() {
        let mut tokens = Tokenizer::new("M0,0 L10,0 20,-");
        assert!(matches!(tokens.next(), Some(Ok(RawCommand { letter: 'M', error: None, .. }))));
        let Some(Ok(line)) = tokens.next() else {
            panic!("expected the line command");
        };
        assert_eq!(line.operands, vec![10.0, 0.0, 20.0]);
        assert!(matches!(line.error, Some(TokenizeError::InvalidNumber { offset: 15, .. })));
        assert!(tokens.next().is_none());
    }

    #[test]
    fn operands_before_any_command() {
        let (commands, error) = tokenize("10 20 L 5 5");
        assert!(commands.is_empty());
        assert_eq!(error, Some(TokenizeError::MissingCommand { offset: 0 }));
    }

    #[test]
    fn unexpected_character() {
        let (commands, error) = tokenize("M0 0 # L1 1");
        assert_eq!(commands.len(), 1);
        assert_eq!(error, Some(TokenizeError::UnexpectedChar { offset: 5, ch: '#' }));
    }

    #[test]
    fn empty_input() {
        let (commands, error) = tokenize("   ");
        assert!(commands.is_empty());
        assert!(error.is_none());
    }
}
