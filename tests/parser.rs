use commacalc::{
    ast::{BinaryOperator, Expr, PrefixFunction},
    error::ParseError,
    interpreter::{
        lexer::{FUNCTION_NAMES, Function, Token, tokenize},
        validator::{is_valid, validate},
    },
    parse,
};

fn assert_tree(src: &str, expected: &str) {
    match parse(src) {
        Ok(tree) => assert_eq!(tree.to_string(), expected, "expression: `{src}`"),
        Err(e) => panic!("expression `{src}` failed to parse: {e}"),
    }
}

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("expression `{src}` failed to tokenize: {e}"))
}

#[test]
fn power_is_right_associative_and_multiply_left() {
    assert_tree("4* sin (5) ^ 6^8*7", "((4 * (sin(5) ^ (6 ^ 8))) * 7)");
    assert_tree("2 ^ 3 ^ 2", "(2 ^ (3 ^ 2))");
    assert_tree("8 / 4 / 2", "((8 / 4) / 2)");
    assert_tree("1 - 2 - 3", "((1 - 2) - 3)");
}

#[test]
fn tree_structure_matches_display() {
    let expected = Expr::binary(Expr::binary(Expr::integer(4),
                                             BinaryOperator::Mul,
                                             Expr::binary(Expr::call(PrefixFunction::Sin,
                                                                     Expr::integer(5)),
                                                          BinaryOperator::Pow,
                                                          Expr::binary(Expr::integer(6),
                                                                       BinaryOperator::Pow,
                                                                       Expr::integer(8)))),
                                BinaryOperator::Mul,
                                Expr::integer(7));

    assert_eq!(parse("4* sin (5) ^ 6^8*7"), Ok(expected));
}

#[test]
fn prefix_functions_take_one_operand() {
    assert_tree("sin cos 5", "sin(cos(5))");
    assert_tree("sin 5 + 1", "(sin(5) + 1)");
    assert_tree("sin (5 + 1)", "sin(5 + 1)");
    assert_tree("sin 5 mod 2", "(sin(5) mod 2)");
    assert_tree("ln 2,5", "ln(2,5)");
}

#[test]
fn infix_functions_bind_tighter_than_operators() {
    assert_tree("2 * 8 yth_root 3", "(2 * (8 yth_root 3))");
    assert_tree("3 mod 2 mod 2", "((3 mod 2) mod 2)");
    assert_tree("5 log_base 25 + 3 mod 2", "((5 log_base 25) + (3 mod 2))");
    assert_tree("2 ^ 9 mod 4", "(2 ^ (9 mod 4))");
}

#[test]
fn unary_minus_becomes_subtraction_from_zero() {
    assert_tree("-5", "(0 - 5)");
    assert_tree("-2 ^ 2", "(0 - (2 ^ 2))");
    assert_tree("3 * (-2)", "(3 * (0 - 2))");
    assert_tree("-sin 1 - 2", "((0 - sin(1)) - 2)");
}

#[test]
fn constants_are_real_leaves() {
    let Ok(Expr::Literal { .. }) = parse("pi") else {
        panic!("pi should parse as a leaf");
    };
    assert_tree("e ^ 2", "(2,718281828459045 ^ 2)");
}

#[test]
fn tokenizer_reads_decimal_commas_and_names() {
    assert_eq!(tokens("1,5 + log_base"),
               vec![Token::Real(1.5), Token::Plus, Token::Function(Function::LogBase)]);
    assert_eq!(tokens("(e)^2"),
               vec![Token::LParen,
                    Token::Function(Function::E),
                    Token::RParen,
                    Token::Caret,
                    Token::Integer(2)]);
    assert_eq!(tokens("  "), Vec::new());
}

#[test]
fn every_known_word_is_one_token() {
    for name in FUNCTION_NAMES {
        let expected = Function::from_name(name).map(Token::Function);
        assert_eq!(tokens(name).first().copied(), expected, "word `{name}`");
        assert_eq!(tokens(name).len(), 1);
    }
}

#[test]
fn tokenizer_rejects_malformed_text() {
    assert!(tokenize("1,").is_err());
    assert!(tokenize("1,,2").is_err());
    assert!(matches!(tokenize("sin (cos 5) + cis 6"), Err(ParseError::UnknownName { .. })));
    assert!(matches!(tokenize("2pi"), Err(ParseError::MissingSeparator { .. })));
    assert!(matches!(tokenize("pi(2)"), Err(ParseError::ConstantCall { .. })));
    assert!(matches!(tokenize("e(2)"), Err(ParseError::ConstantCall { .. })));
    assert!(matches!(tokenize("99999999999999999999"),
                     Err(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn validator_accepts_well_formed_sequences() {
    for src in ["- 1",
                "1+ 2 - ( 3 + 4*5 * 6^(6+6)) - sin cos 565,4123 + ln (5,2 / 66,3)",
                "(3) + 4*(sin cos (e^((3)- 5 mod 6) + 3 log_base (pi)))",
                "sin (pi + cos e)",
                "-sin (-6 - 3-(-4^2)) - cos (-5)"]
    {
        assert!(is_valid(&tokens(src)), "expression `{src}` should be valid");
    }
}

#[test]
fn validator_rejects_misplaced_tokens() {
    for src in ["arcsin",
                "sin cos + ()",
                "sin cos + 5",
                "sin (5 + cos)",
                "6 mod (sin 6 cos 8)",
                "(3) + 4(sin cos (e^((3)- 5 mod 6) + 3 log_base (pi)))",
                "-(-5) - sin",
                "(2)(3)",
                "pi (2)",
                "3 4"]
    {
        assert!(!is_valid(&tokens(src)), "expression `{src}` should be invalid");
    }
}

#[test]
fn minus_after_an_operator_or_function_is_rejected() {
    for src in ["2 * -3", "2 ^ -1", "7 mod -3", "sin -1", "2 - -3"] {
        assert!(matches!(validate(&tokens(src)), Err(ParseError::MisplacedToken { .. })),
                "expression `{src}` should be invalid");
    }
    for src in ["2 * (-3)", "2 ^ (-1)", "(-7) mod 3", "sin (-1)", "-1"] {
        assert!(is_valid(&tokens(src)), "expression `{src}` should be valid");
    }
}

#[test]
fn validator_reports_parenthesis_errors() {
    assert_eq!(validate(&tokens("()")), Err(ParseError::EmptyGroup { index: 1 }));
    assert_eq!(validate(&tokens("1 + 2)")),
               Err(ParseError::UnmatchedClosingParen { index: 3 }));
    assert_eq!(validate(&tokens("((1 + 2)")), Err(ParseError::UnclosedParen { count: 1 }));
}
