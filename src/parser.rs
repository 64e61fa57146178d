//! Parser parses numbers represented in plain or scientific decimal notation.

use crate::defs::Sign;

#[cfg(feature = "std")]
use std::str::Chars;

#[cfg(not(feature = "std"))]
use {alloc::vec::Vec, core::str::Chars};

// exponent accumulation stops here, any larger value is out of range anyway
const EXPONENT_LIMIT: i64 = 1_000_000_000;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: Vec<u8>,
    e: i64,
    nan: bool,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: Vec::new(),
            e: 0,
            nan: false,
            valid: false,
        }
    }

    /// Returns next character of a string in lower case,
    /// or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    /// Returns mantissa digits without leading zeroes, sign, and exponent.
    /// The value is the digits read as an integer times 10 to the power of the exponent.
    pub fn raw_parts(&self) -> (&[u8], Sign, i64) {
        (&self.digits, self.sign, self.e)
    }
}

/// Parse a decimal number. The whole string must be a number.
pub fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if let Some(c) = ch {
        match c {
            'n' => parse_nan(&mut parser_state),
            '.' | '0'..='9' => parse_num(&mut parser_state),
            _ => {}
        };
    }

    // trailing characters
    if parser_state.cur_char().is_some() {
        parser_state.valid = false;
    }

    parser_state
}

fn parse_nan(parser_state: &mut ParserState) {
    let a = parser_state.next_char();
    let n = parser_state.next_char();
    if Some('n') == n && Some('a') == a {
        parser_state.nan = true;
        parser_state.valid = true;
        parser_state.next_char();
    }
}

fn parse_num(parser_state: &mut ParserState) {
    let int_len = parse_digits(parser_state, false);

    let mut frac_len = 0;
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        frac_len = parse_digits(parser_state, true);
    }

    if int_len == 0 && frac_len == 0 {
        return;
    }

    parser_state.valid = true;

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parse_exp(parser_state);
    }

    if parser_state.digits.is_empty() {
        // just zeroes
        parser_state.e = 0;
    }
}

// returns the number of digits consumed
fn parse_digits(parser_state: &mut ParserState, frac: bool) -> usize {
    let mut ch = parser_state.cur_char();
    let mut len = 0;

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            // leading zeroes are not stored
            if d != 0 || !parser_state.digits.is_empty() {
                parser_state.digits.push(d as u8);
            }
            if frac {
                parser_state.e -= 1;
            }
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    len
}

fn parse_exp(parser_state: &mut ParserState) {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    let mut e: i64 = 0;
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            if e < EXPONENT_LIMIT {
                e = e * 10 + d as i64;
            }
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    parser_state.e += if neg { -e } else { e };
}
