// tests/output_tests.rs

use fiql_parser::ast::NodeKind;
use fiql_parser::output::{to_json, to_json_pretty};
use fiql_parser::parse;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn projection(input: &str) -> Value {
    let tree = parse(input).unwrap();
    serde_json::from_str(&to_json(&tree).unwrap()).unwrap()
}

#[test]
fn test_compact_json() {
    let tree = parse("column==value").unwrap();
    assert_eq!(
        to_json(&tree).unwrap(),
        r#"{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"column"},{"Type":"Const","Value":"value"}]}]}"#
    );
}

#[test]
fn test_operator_names() {
    // serde_json writes `<` unescaped
    let test_cases = vec![
        ("column=q=value", "query"),
        ("column!=value", "<>"),
        ("column=gt=1", ">"),
        ("column=ge=1", ">="),
        ("column=lt=1", "<"),
        ("column=le=1", "<="),
        ("column=in=[a]", "in"),
    ];

    for (input, operator) in test_cases {
        let value = projection(input);
        assert_eq!(value["Nodes"][0]["Operator"], json!(operator), "projecting {:?}", input);
    }
}

#[test]
fn test_wildcards_and_groups() {
    let expected: Value = serde_json::from_str(
        r#"{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"AND","Nodes":[{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"title"},{"Type":"Const","Value":"foo*"}]},{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"OR","Nodes":[{"Type":"Binary","Operator":"<","Nodes":[{"Type":"Const","Value":"updated"},{"Type":"Const","Value":"-P1D"}]},{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"title"},{"Type":"Const","Value":"*bar"}]}]}]}]}]}"#,
    )
    .unwrap();

    assert_eq!(projection("title==foo*;(updated=lt=-P1D,title==*bar)"), expected);
}

#[test]
fn test_nested_groups() {
    let expected: Value = serde_json::from_str(
        r#"{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"AND","Nodes":[{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"title"},{"Type":"Const","Value":"foo*"}]}]},{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"OR","Nodes":[{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"fml"},{"Type":"Const","Value":"x"}]},{"Type":"Expr","Operator":"","Nodes":[{"Type":"Binary","Operator":"AND","Nodes":[{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"xfs"},{"Type":"Const","Value":"a"}]},{"Type":"Binary","Operator":"==","Nodes":[{"Type":"Const","Value":"f"},{"Type":"Const","Value":"fx"}]}]}]}]}]}]}]}"#,
    )
    .unwrap();

    assert_eq!(projection("(title==foo*);(fml==x,(xfs==a;f==fx))"), expected);
}

#[test]
fn test_chain_handling() {
    let and_first = projection("a==b;c==d,f==g");
    assert_eq!(and_first["Nodes"][0]["Operator"], json!("AND"));
    assert_eq!(and_first["Nodes"][0]["Nodes"][1]["Operator"], json!("OR"));

    let group_first = projection("(a==b;c==d),f==g");
    assert_eq!(group_first["Nodes"][0]["Operator"], json!("OR"));
    assert_eq!(group_first["Nodes"][0]["Nodes"][0]["Type"], json!("Expr"));
    assert_eq!(
        group_first["Nodes"][0]["Nodes"][0]["Nodes"][0]["Operator"],
        json!("AND")
    );
}

#[test]
fn test_unary_selector_projection() {
    assert_eq!(
        projection("deleted"),
        json!({
            "Type": "Expr",
            "Operator": "",
            "Nodes": [{"Type": "Const", "Value": "deleted"}]
        })
    );
}

#[test]
fn test_empty_projection() {
    assert_eq!(
        projection(""),
        json!({"Type": "Expr", "Operator": "", "Nodes": []})
    );
}

#[test]
fn test_pretty_json_matches_compact() {
    let tree = parse("a==b;c==d").unwrap();
    let pretty = to_json_pretty(&tree).unwrap();
    assert!(pretty.contains('\n'));

    let reparsed: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed, projection("a==b;c==d"));
}

#[test]
fn test_children() {
    let tree = parse("a==b;c==d").unwrap();
    let children = tree.children();
    assert_eq!(children.len(), 1);

    let and = children[0];
    assert_eq!(and.kind(), NodeKind::Binary);
    assert_eq!(and.children().len(), 2);

    for comparison in and.children() {
        let leaves = comparison.children();
        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().all(|leaf| leaf.kind() == NodeKind::Constant));
        assert!(leaves.iter().all(|leaf| leaf.children().is_empty()));
    }
}
