use crate::ast::{BinaryOp, Expr, ExprKind, Name, Span, UnaryOp};
use crate::error::SyntaxError;
use chumsky::prelude::*;
use chumsky::Stream;
use lexer::token::Token;

/// Parse a complete expression: the whole token stream must be consumed.
pub fn parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    expr_parser().then_ignore(end())
}

/// Lex and parse `source`, keeping byte spans on every node.
pub fn parse_expression(source: &str) -> Result<Expr, Vec<SyntaxError>> {
    let tokens = lexer::lex_spanned(source)
        .map_err(|errors| errors.into_iter().map(SyntaxError::from).collect::<Vec<_>>())?;

    let eoi = source.len()..source.len() + 1;
    parser()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| errors.into_iter().map(SyntaxError::from).collect())
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    let span = lhs.span.start..rhs.span.end;
    Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        span,
    )
}

fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> + Clone {
    recursive(|expr| {
        let number = select! { Token::Number(text) => text }.try_map(|text, span: Span| {
            text.parse::<f64>()
                .map(|value| Expr::new(ExprKind::Number(value), span.clone()))
                .map_err(|_| Simple::custom(span, format!("invalid number literal '{}'", text)))
        });

        let ident = select! { Token::Identifier(name) => name };

        // np.sin, math.pi or a plain name
        let name = ident
            .clone()
            .then(just(Token::Dot).ignore_then(ident).or_not())
            .map_with_span(|(first, member), span: Span| match member {
                Some(member) => (Name::qualified(first, member), span),
                None => (Name::plain(first), span),
            });

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let name_or_call = name
            .then(args.or_not())
            .map_with_span(|((func, func_span), args), span: Span| match args {
                Some(args) => Expr::new(
                    ExprKind::Call {
                        func,
                        func_span,
                        args,
                    },
                    span,
                ),
                None => Expr::new(ExprKind::Identifier(func), span),
            });

        let atom = number
            .or(name_or_call)
            .or(expr
                .clone()
                .delimited_by(just(Token::LParen), just(Token::RParen)))
            .boxed();

        // Unary signs bind looser than power (-x**2 == -(x**2)), but the
        // exponent itself may be signed (2**-1). Power is right-associative.
        let unary = recursive(|unary| {
            let power = atom
                .clone()
                .then(
                    just(Token::Pow)
                        .or(just(Token::Caret))
                        .ignore_then(unary)
                        .or_not(),
                )
                .map(|(base, exponent)| match exponent {
                    Some(exponent) => binary(BinaryOp::Pow, base, exponent),
                    None => base,
                });

            just(Token::Minus)
                .to(UnaryOp::Negate)
                .or(just(Token::Plus).to(UnaryOp::Plus))
                .map_with_span(|op, span: Span| (op, span))
                .repeated()
                .then(power)
                .foldr(|(op, op_span), expr| {
                    let span = op_span.start..expr.span.end;
                    Expr::new(
                        ExprKind::Unary {
                            op,
                            expr: Box::new(expr),
                        },
                        span,
                    )
                })
        })
        .boxed();

        let product = unary
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Mod))
                    .then(unary)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(op, lhs, rhs))
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(op, lhs, rhs))
            .boxed();

        // Comparisons do not chain: `a < b < c` is a syntax error
        let comparison = sum
            .clone()
            .then(
                choice((
                    just(Token::DoubleEq).to(BinaryOp::Eq),
                    just(Token::NotEq).to(BinaryOp::NotEq),
                    just(Token::LtEq).to(BinaryOp::LtEq),
                    just(Token::GtEq).to(BinaryOp::GtEq),
                    just(Token::Lt).to(BinaryOp::Lt),
                    just(Token::Gt).to(BinaryOp::Gt),
                ))
                .then(sum)
                .or_not(),
            )
            .map(|(lhs, rest)| match rest {
                Some((op, rhs)) => binary(op, lhs, rhs),
                None => lhs,
            });

        comparison.boxed()
    })
}
