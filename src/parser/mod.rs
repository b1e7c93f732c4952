/// Grammar Parsers
///
/// The primary interface for this module is [`parse`], which produces a
/// single [`Expr`](crate::object::Expr) for a snippet, wrapping multiple
/// top-level expressions in a `{` block.
///
mod core;
pub use self::core::*;

mod style;
pub use style::{highlight, Style};

use pest::pratt_parser::PrattParser;
use std::sync::LazyLock;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct RParser;

pub static PRATT: LazyLock<PrattParser<Rule>> = LazyLock::new(|| {
    use pest::pratt_parser::{Assoc::*, Op};
    use Rule::*;

    // Precedence is defined lowest to highest
    PrattParser::new()
        .op(Op::infix(assign_eq, Right))
        .op(Op::infix(assign, Right))
        .op(Op::infix(assign_right, Left))
        .op(Op::infix(or, Left) | Op::infix(vor, Left))
        .op(Op::infix(and, Left) | Op::infix(vand, Left))
        .op(Op::prefix(not))
        .op(Op::infix(eq, Left)
            | Op::infix(neq, Left)
            | Op::infix(lt, Left)
            | Op::infix(gt, Left)
            | Op::infix(lte, Left)
            | Op::infix(gte, Left))
        .op(Op::infix(add, Left) | Op::infix(subtract, Left))
        .op(Op::infix(multiply, Left) | Op::infix(divide, Left))
        .op(Op::infix(modulo, Left) | Op::infix(special_in, Left))
        .op(Op::infix(colon, Left))
        .op(Op::prefix(negate))
        .op(Op::infix(power, Right))
});
