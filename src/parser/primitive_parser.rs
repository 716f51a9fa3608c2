use nom::bytes::complete::take_till;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res, opt, rest};
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// Parse an unsigned decimal number spanning the whole input
pub fn parse_number(i: &str) -> IResult<&str, u32> {
    all_consuming(map_res(digit1, |digits: &str| digits.parse::<u32>())).parse(i)
}

/// Parse a number, `None` if `i` is not entirely made of digits
pub fn number(i: &str) -> Option<u32> {
    parse_number(i).map(|(_, n)| n).ok()
}

/// Split at the first `separator`.
/// The suffix is `None` when the separator is absent.
pub fn split_suffix(separator: char) -> impl FnMut(&str) -> IResult<&str, (&str, Option<&str>)> {
    move |i: &str| {
        let (i, head) = take_till(|c: char| c == separator)(i)?;
        let (i, suffix) = opt(preceded(char(separator), rest)).parse(i)?;
        log::trace!("split '{head}' / {suffix:?} on '{separator}'");
        Ok((i, (head, suffix)))
    }
}
