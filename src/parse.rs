use crate::*;
use once_cell::sync::Lazy;
use pest::{iterators, Parser};
use regex::Regex;

#[derive(Parser)]
#[grammar_inline = r####"
sop      = _{ SOI ~ (sum | constant) ~ EOI }
sum      =  { product ~ ( "+" ~ product )* }
product  =  { literal+ }
literal  = ${ variable ~ negation? }
variable =  { 'A'..'D' }
negation =  { "'" }
constant =  { "0" | "1" }

WHITESPACE = _{ " " | "\t" }
"####]
struct SopParser;

static RE_LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,;]+").unwrap());
static RE_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());
static RE_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_$]*$").unwrap());

/// Split a list of integers separated by commas, semicolons or spaces.
///
/// A blank string gives an empty list. Values are not checked against the range of minterms,
/// this is done when building a [crate::Function] (or a [MintermSet]).
///
/// ```
/// use kmap::parse_minterm_list;
///
/// assert_eq!(parse_minterm_list("0,1, 5 ;7").unwrap(), vec![0, 1, 5, 7]);
/// assert!(parse_minterm_list("  ").unwrap().is_empty());
/// assert!(parse_minterm_list("3, four").is_err());
/// ```
pub fn parse_minterm_list(s: &str) -> Result<Vec<i64>, KmapError> {
    RE_LIST_SEPARATOR
        .split(s.trim())
        .filter(|token| !token.is_empty())
        .map(|token| {
            if RE_INTEGER.is_match(token) {
                if let Ok(value) = token.parse::<i64>() {
                    return Ok(value);
                }
            }
            Err(KmapError::from(ParseError::SimpleParseError(
                token.to_string(),
                "Integer",
            )))
        })
        .collect()
}

/// Check that a name can be used as a Verilog identifier
pub(crate) fn check_identifier(name: &str) -> Result<(), KmapError> {
    match RE_IDENTIFIER.is_match(name) {
        true => Ok(()),
        false => Err(KmapError::InvalidName(name.to_string())),
    }
}

/// Parse a sum of products such as ```A'B'D' + CD```, or the constants ```0``` and ```1```.
pub(crate) fn parse_sop(s: &str) -> Result<SopExpr, KmapError> {
    let mut parsed = SopParser::parse(Rule::sop, s).map_err(|_| KmapError::InvalidExpression)?;
    match parsed.next() {
        None => Err(KmapError::InvalidExpression),
        Some(pair) => match pair.as_rule() {
            Rule::constant => match pair.as_str() {
                "1" => Ok(SopExpr::One),
                _ => Ok(SopExpr::Zero),
            },
            Rule::sum => {
                let terms = pair
                    .into_inner()
                    .map(load_product)
                    .collect::<Result<Vec<Term>, KmapError>>()?;
                Ok(SopExpr::from_terms(terms))
            }
            _ => Err(KmapError::InvalidExpression),
        },
    }
}

fn load_product(product: iterators::Pair<Rule>) -> Result<Term, KmapError> {
    let literals = product
        .into_inner()
        .map(load_literal)
        .collect::<Result<Vec<Literal>, KmapError>>()?;
    Term::with_literals(literals)
}

fn load_literal(literal: iterators::Pair<Rule>) -> Result<Literal, KmapError> {
    let mut var = None;
    let mut positive = true;
    for part in literal.into_inner() {
        match part.as_rule() {
            Rule::variable => var = part.as_str().chars().next().and_then(Variable::from_name),
            Rule::negation => positive = false,
            _ => return Err(KmapError::InvalidExpression),
        }
    }
    var.map(|v| Literal::new(v, positive))
        .ok_or(KmapError::InvalidExpression)
}

#[cfg(test)]
mod tests {
    use crate::parse::*;

    #[test]
    fn minterm_lists() {
        assert_eq!(parse_minterm_list("0,1,2,3").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(parse_minterm_list(" 4 , 9\t12 ").unwrap(), vec![4, 9, 12]);
        assert_eq!(parse_minterm_list("-1, 20").unwrap(), vec![-1, 20]);
        assert!(parse_minterm_list("").unwrap().is_empty());
        assert_eq!(
            parse_minterm_list("1, 2.5"),
            Err(KmapError::Parse(ParseError::SimpleParseError(
                "2.5".to_string(),
                "Integer"
            )))
        );
    }

    #[test]
    fn identifiers() {
        assert!(check_identifier("kmap_simplified").is_ok());
        assert!(check_identifier("_f2").is_ok());
        assert!(check_identifier("2f").is_err());
        assert!(check_identifier("my module").is_err());
        assert!(check_identifier("").is_err());
    }

    #[test]
    fn sums_of_products() -> Result<(), KmapError> {
        assert_eq!(parse_sop("0")?, SopExpr::Zero);
        assert_eq!(parse_sop(" 1 ")?, SopExpr::One);

        let sop = parse_sop("C'D + AD+BD")?;
        assert_eq!(sop.to_string(), "AD + BD + C'D");
        assert_eq!(sop.terms().len(), 3);

        let sop = parse_sop("D'B'")?;
        assert_eq!(sop.to_string(), "B'D'");

        assert_eq!(parse_sop("A + "), Err(KmapError::InvalidExpression));
        assert_eq!(parse_sop("AE"), Err(KmapError::InvalidExpression));
        assert_eq!(parse_sop("A ' B"), Err(KmapError::InvalidExpression));
        assert_eq!(parse_sop(""), Err(KmapError::InvalidExpression));
        assert!(matches!(
            parse_sop("AA'"),
            Err(KmapError::Parse(ParseError::RepeatedVariable('A', _)))
        ));
        Ok(())
    }
}
