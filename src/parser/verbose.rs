//! `{ [+-]<n>[.ffffff] <unit> }`
//!
//! Every component is written with its own unit word and its own sign, only
//! the seconds may have a fraction.

use crate::interval::{Interval, Unit};
use crate::parser::lexer::{Decimal, Lexer, Parsed};
use crate::parser::{Components, Mismatch};

pub(super) fn parse(full: &str) -> Result<Interval, Mismatch> {
    let lexer = Lexer::new(full);
    let mut components = Components::default();
    let mut input = lexer.whitespace(full).input;

    while !input.is_empty() {
        let offset = lexer.offset(input);

        let Parsed {
            value: (unit, number),
            input: rest,
        } = component(&lexer, input)?;

        components.set(unit, number.sign.apply(number.whole), offset)?;
        if let Some(fraction) = number.fraction {
            components.set_remainder(number.sign.apply(fraction));
        }

        input = lexer.whitespace(rest).input;
    }

    Ok(components.finish())
}

/// `[+-]digits[.digits] <ws> unit`
fn component<'i>(
    lexer: &Lexer<'i>,
    input: &'i str,
) -> Result<Parsed<'i, (Unit, Decimal)>, Mismatch> {
    let Parsed { value: number, input } = lexer.decimal(input)?;
    let input = lexer.required_whitespace(input)?;
    let Parsed { value: unit, input: rest } = lexer.unit(input)?;

    if number.fraction.is_some() && unit != Unit::Seconds {
        return Err(Mismatch::FractionNotAllowed {
            offset: lexer.offset(input),
            unit,
        });
    }

    Ok(Parsed {
        value: (unit, number),
        input: rest,
    })
}
