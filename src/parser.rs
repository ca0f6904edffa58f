use nom::{
    branch::alt,
    character::complete::{anychar, char, none_of},
    combinator::{map, opt, value},
    multi::many0,
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::error::CompileError;
use crate::regex::{Atom, Operator, Quantifier};

enum Token {
    Atom(Atom),
    Quantifier(Quantifier),
}

/// Compiles `pattern` into its operator sequence.
///
/// Quantifiers modify the operator compiled just before them, so `ab*` is
/// `a` once followed by `b` zero or more times.
pub fn compile(pattern: &str) -> Result<Vec<Operator>, CompileError> {
    let mut operators: Vec<Operator> = Vec::new();
    let mut input = pattern;
    let mut position = 0;

    while !input.is_empty() {
        let (rest, token) = token(input).map_err(|_| failure_at(input, position))?;

        match token {
            Token::Atom(atom) => operators.push(Operator::new(atom)),
            Token::Quantifier(quantifier) => {
                let last = operators
                    .last_mut()
                    .ok_or(CompileError::NothingToRepeat(position, quantifier.symbol()))?;
                last.repeat.apply(quantifier);
            }
        }
        position += consumed(input, rest);
        input = rest;
    }

    Ok(operators)
}

/// Characters of `input` that a token parser used up to leave `rest`.
fn consumed(input: &str, rest: &str) -> usize {
    input[..input.len() - rest.len()].chars().count()
}

// Every character starts some token, so only an escape or a class can fail.
fn failure_at(input: &str, position: usize) -> CompileError {
    if input.starts_with('\\') {
        CompileError::DanglingEscape(position)
    } else {
        CompileError::UnterminatedClass(position)
    }
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        map(quantifier, Token::Quantifier),
        map(dot, Token::Atom),
        map(char_class, Token::Atom),
        map(escaped_char, Token::Atom),
        map(literal_char, Token::Atom),
    ))(input)
}

fn quantifier(input: &str) -> IResult<&str, Quantifier> {
    alt((
        value(Quantifier::Optional, char('?')),
        value(Quantifier::Star, char('*')),
        value(Quantifier::Plus, char('+')),
    ))(input)
}

fn dot(input: &str) -> IResult<&str, Atom> {
    value(Atom::Dot, char('.'))(input)
}

fn char_class(input: &str) -> IResult<&str, Atom> {
    let (input, (negated, chars)) = preceded(
        char('['),
        terminated(tuple((opt(char('^')), many0(class_char))), char(']')),
    )(input)?;

    let atom = if negated.is_some() {
        Atom::NegatedSet(chars)
    } else {
        Atom::Set(chars)
    };
    Ok((input, atom))
}

fn class_char(input: &str) -> IResult<&str, char> {
    alt((
        preceded(char('\\'), anychar),
        none_of("]\\"),
    ))(input)
}

fn escaped_char(input: &str) -> IResult<&str, Atom> {
    map(preceded(char('\\'), anychar), Atom::Char)(input)
}

fn literal_char(input: &str) -> IResult<&str, Atom> {
    map(none_of("\\[.?*+"), Atom::Char)(input)
}
