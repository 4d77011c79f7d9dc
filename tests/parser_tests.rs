// tests/parser_tests.rs

use fiql_parser::ast::{Comparison, LogicOp, Node, NodeKind, Operator};
use fiql_parser::config::ParserConfig;
use fiql_parser::error::{ErrorKind, Position};
use fiql_parser::lexer::Lexer;
use fiql_parser::parser::Parser;
use fiql_parser::{parse, parse_with_config};
use pretty_assertions::assert_eq;

fn render(input: &str) -> String {
    match parse(input) {
        Ok(tree) => tree.to_string(),
        Err(e) => panic!("failed to parse {:?}: {}", input, e),
    }
}

fn error(input: &str) -> String {
    match parse(input) {
        Ok(tree) => panic!("expected {:?} to fail, got {}", input, tree),
        Err(e) => e.to_string(),
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_comparators_render() {
    let test_cases = vec![
        ("column==value", "(column == value)"),
        ("column!=value", "(column <> value)"),
        ("column=q=value", "(column query value)"),
        ("column=ge=1", "(column >= 1)"),
        ("column=le=1", "(column <= 1)"),
        ("column=gt=1.1", "(column > 1.1)"),
        ("column=lt=100", "(column < 100)"),
        ("column=lt=+100", "(column < +100)"),
        ("column=lt=-100", "(column < -100)"),
        ("column=in=[a]", "(column in [a])"),
        ("updated=gt=2003-12-13T00:00:00Z", "(updated > 2003-12-13T00:00:00Z)"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(render(input), expected, "rendering {:?}", input);
    }
}

#[test]
fn test_duration_arguments() {
    let test_cases = vec![
        ("column=le=P1.4Y2M", "(column <= P1.4Y2M)"),
        ("column=le=+P5W", "(column <= +P5W)"),
        ("column=le=-P5W", "(column <= -P5W)"),
        ("column=lt=P3DT4H59M", "(column < P3DT4H59M)"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(render(input), expected);
    }
}

#[test]
fn test_whitespace_is_ignored() {
    let test_cases = vec![
        "column==value,b==a",
        "column==value  ,   b==a",
        "     column==value  ,   b==a     ",
        "     column  ==  value  ,   b  ==  a     ",
    ];

    for input in test_cases {
        assert_eq!(render(input), "(column == value OR b == a)");
    }
    assert_eq!(render("column      ==        value"), "(column == value)");
}

#[test]
fn test_multiline_input() {
    let input = "a==value\n\t\t; \n\t\tb==value";
    assert_eq!(render(input), "(a == value AND b == value)");
}

#[test]
fn test_groups() {
    assert_eq!(render("(column==value)"), "((column == value))");
    assert_eq!(
        render("title==foo*;(updated=lt=-P1D,title==*bar)"),
        "(title == foo* AND (updated < -P1D OR title == *bar))"
    );
    assert_eq!(
        render("(title==foo*);(fml==x,(xfs==a;f==fx))"),
        "((title == foo*) AND (fml == x OR (xfs == a AND f == fx)))"
    );
    assert_eq!(
        render("(title==foo*,test==a,fx==fa);(fml==x)"),
        "((title == foo* OR test == a OR fx == fa) AND (fml == x))"
    );
}

#[test]
fn test_escaped_delimiter() {
    assert_eq!(render("column==va\\,lue,b==a"), "(column == va,lue OR b == a)");
}

#[test]
fn test_empty_input() {
    let tree = parse("").unwrap();
    assert!(tree.is_root());
    assert!(tree.is_empty());
    assert_eq!(tree.to_string(), "()");

    assert!(parse("   \n\t").unwrap().is_empty());
}

// ============================================================================
// Tree shape
// ============================================================================

fn logic_of(node: &Node) -> LogicOp {
    match node {
        Node::Binary(b) => match b.operator() {
            Operator::Logic(op) => op,
            other => panic!("expected logic operator, got {}", other),
        },
        other => panic!("expected binary node, got {:?}", other.kind()),
    }
}

#[test]
fn test_chains_nest_to_the_right() {
    // a;b,c is AND(a, OR(b, c))
    let tree = parse("a==b;c==d,f==g").unwrap();
    let root = tree.child().unwrap();
    assert_eq!(logic_of(root), LogicOp::And);

    let Node::Binary(and) = root else { unreachable!() };
    assert_eq!(and.left().kind(), NodeKind::Binary);
    assert_eq!(logic_of(and.right()), LogicOp::Or);
}

#[test]
fn test_group_on_the_left() {
    // (a;b),c is OR(Expr(AND(a, b)), c)
    let tree = parse("(a==b;c==d),f==g").unwrap();
    let root = tree.child().unwrap();
    assert_eq!(logic_of(root), LogicOp::Or);

    let Node::Binary(or) = root else { unreachable!() };
    let Node::Expression(group) = or.left() else {
        panic!("expected group on the left");
    };
    assert!(!group.is_root());
    assert_eq!(logic_of(group.child().unwrap()), LogicOp::And);
}

#[test]
fn test_long_chain() {
    let input = (0..2000)
        .map(|i| format!("f{}=={}", i, i))
        .collect::<Vec<_>>()
        .join(";");
    let tree = parse(&input).unwrap();

    let mut depth = 0;
    let mut node = tree.child().unwrap();
    while let Node::Binary(b) = node {
        if b.as_comparison().is_some() {
            break;
        }
        depth += 1;
        node = b.right();
    }
    assert_eq!(depth, 1999);
}

#[test]
fn test_comparison_parts() {
    let tree = parse("title=in=[a+b]").unwrap();
    let Some(Node::Binary(binary)) = tree.child() else {
        panic!("expected comparison");
    };
    let (comparison, selector, argument) = binary.as_comparison().unwrap();
    assert_eq!(comparison, Comparison::In);
    assert_eq!(selector.name(), "title");
    assert!(!selector.is_unary());
    assert_eq!(argument.as_tuple().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_parser_from_lexer() {
    let mut parser = Parser::new(Lexer::new("a==b"));
    assert_eq!(parser.parse().unwrap().to_string(), "(a == b)");
}

// ============================================================================
// Unary selectors
// ============================================================================

#[test]
fn test_unary_selector() {
    assert_eq!(render("deleted"), "(deleted)");
    assert_eq!(render("deleted;title==foo"), "(deleted AND title == foo)");
    assert_eq!(render("(archived,deleted)"), "((archived OR deleted))");

    let tree = parse("deleted").unwrap();
    let Some(Node::Constant(constant)) = tree.child() else {
        panic!("expected a bare selector");
    };
    assert!(constant.is_selector());
    assert_eq!(constant.value(), "deleted");
}

#[test]
fn test_strict_rejects_unary_selector() {
    let strict = ParserConfig::default().with_unary_selectors(false);
    let err = parse_with_config("deleted", &strict).unwrap_err();
    assert_eq!(err.to_string(), "ln:1:7 syntax error (got `eof` but expected a value)");

    let err = parse_with_config("deleted;a==b", &strict).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedValue { found: "AND".to_string() });
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_parse_errors() {
    let test_cases = vec![
        (
            "(title==foo*);(fml==x,(xfs==a;f==fx)",
            "ln:1:36 syntax error (unclosed brace `)` )",
        ),
        (
            "title=ffoo*",
            "ln:1:6 unexpected input (got `=f` but expected one of ==,!=,=gt=,=ge=,=lt=,=le=,=in=,=q=)",
        ),
        ("title==fo,o*", "ln:1:12 syntax error (got `*` but expected a value)"),
        ("\n\t\t\n\t\t)", "ln:3:3 syntax error (invalid closing brace `)` )"),
        (
            "column=ge=invalid",
            "ln:1:17 syntax error (got `invalid` but expected number or date or duration)",
        ),
        (
            "column=in=123",
            "ln:1:13 syntax error (got `123` but expected in clause [a+b+c])",
        ),
    ];

    for (input, expected) in test_cases {
        assert_eq!(error(input), expected, "parsing {:?}", input);
    }
}

#[test]
fn test_dangling() {
    let test_cases = vec![
        ("a==b;", "ln:1:5 dangling operator"),
        ("a==b,", "ln:1:5 dangling operator"),
        (",a==b", "ln:1:1 dangling operator"),
        (";a==b", "ln:1:1 dangling operator"),
        ("==a==b", "ln:1:2 dangling comparator"),
        ("a==b!=", "ln:1:4 dangling comparator"),
        ("(a==b", "ln:1:5 syntax error (unclosed brace `)` )"),
        ("a==b)", "ln:1:4 syntax error (invalid closing brace `)` )"),
        ("()", "ln:1:2 syntax error (invalid closing brace `)` )"),
        ("a==", "ln:1:3 syntax error (got `eof` but expected a value)"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(error(input), expected, "parsing {:?}", input);
    }
}

#[test]
fn test_error_position_accessors() {
    let err = parse("a==b;").unwrap_err();
    assert_eq!(err.position, Position::new(1, 5));
    assert_eq!(err.line(), 1);
    assert_eq!(err.column(), 5);
    assert!(err.is_dangling());
}

#[test]
fn test_unit_followed_by_group() {
    let err = parse("a==b (c==d)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedOperator { found: "(".to_string() });
}

#[test]
fn test_wildcard_inside_argument() {
    let err = parse("title==fo*o").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedOperator { found: "o".to_string() });
}

#[test]
fn test_doubled_wildcards() {
    let test_cases = vec![
        ("title==**foo", "ln:1:9 syntax error (got `*` but expected a value)"),
        ("title==foo**", "ln:1:11 syntax error (got `*` but expected an operator)"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(error(input), expected, "parsing {:?}", input);
    }

    let err = parse("title==foo**").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedOperator { found: "*".to_string() });
    assert_eq!(err.position, Position::new(1, 11));
}

#[test]
fn test_max_depth() {
    let config = ParserConfig::default().with_max_depth(2);
    assert!(parse_with_config("((a==b))", &config).is_ok());

    let err = parse_with_config("(((a==b)))", &config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NestingTooDeep { limit: 2 });
    assert_eq!(err.to_string(), "ln:1:3 syntax error (nesting deeper than 2 levels)");

    // chains do not count as nesting
    assert!(parse_with_config("a==1;b==2;c==3;d==4", &config).is_ok());
}

#[test]
fn test_tree_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<fiql_parser::Expression>();
    assert_send_sync::<Node>();
    assert_send_sync::<fiql_parser::ParseError>();
}
