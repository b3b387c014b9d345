#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

mod common;

use std::fmt::Write;

use pjson::{ParserOptions, parse, parse_with_options};

fn render(inputs: &[&str], options: ParserOptions) -> String {
    let mut out = String::new();
    for input in inputs {
        match parse_with_options(input, options) {
            Ok(value) => writeln!(out, "{input} -> {value:?}"),
            Err(err) => writeln!(out, "{input} -> {}:{} {err}", err.line(), err.column()),
        }
        .unwrap();
    }
    out
}

#[test]
fn snapshot_document_members() {
    let value = parse(common::DOCUMENT).expect("document parses");
    let mut out = String::new();
    for (key, member) in value.as_object().expect("root is an object") {
        writeln!(out, "{key}: {member:?}").unwrap();
    }
    insta::assert_snapshot!(out, @r#"
    name: String("pjson")
    version: Integer(1)
    ratio: Float(0.75)
    exponent: Integer(2000)
    enabled: Boolean(true)
    parent: Null
    tags: Array([String("parser"), String("json")])
    escapes: String("tab\there \"quoted\" \\ slash/")
    nested: Object({"list": Array([Integer(1), Array([Integer(2), Array([Integer(3)])]), Object({"deep": Object({"deeper": Array([])})})]), "empty": Object({})})
    "#);
}

#[test]
fn snapshot_values() {
    let inputs = [
        r#"{"k":[1,2.5,{"x":"y"}],"s":"hello"}"#,
        "[true,false,null]",
        r#"{"a":1,"b":2,"a":3}"#,
        "1e3",
        "-0.5",
        "[[], {}]",
    ];
    insta::assert_snapshot!(render(&inputs, ParserOptions::default()), @r#"
    {"k":[1,2.5,{"x":"y"}],"s":"hello"} -> Object({"k": Array([Integer(1), Float(2.5), Object({"x": String("y")})]), "s": String("hello")})
    [true,false,null] -> Array([Boolean(true), Boolean(false), Null])
    {"a":1,"b":2,"a":3} -> Object({"a": Integer(3), "b": Integer(2)})
    1e3 -> Integer(1000)
    -0.5 -> Float(-0.5)
    [[], {}] -> Array([Array([]), Object({})])
    "#);
}

#[test]
fn snapshot_errors() {
    let inputs = [
        "[1, 2 3, 4]",
        r#"{"a" 1, "b": 2}"#,
        r#"{"a":1 "b":2}"#,
        "{'a':1}",
        "[1, @x]",
        "[tru]",
        "[1.2.3]",
        r#""\x41""#,
        "{} {}",
    ];
    insta::assert_snapshot!(render(&inputs, ParserOptions::default()), @r#"
    [1, 2 3, 4] -> 1:8 Expected "," or "]" but not found: , 4
    {"a" 1, "b": 2} -> 1:7 Expected ":" but not found: , "b": 2
    {"a":1 "b":2} -> 1:9 Expected "," or "}" but not found: b":2
    {'a':1} -> 1:3 Expected "\"" but not found: a':1
    [1, @x] -> 1:5 Invalid sequence: @x
    [tru] -> 1:2 Unknown token: tru
    [1.2.3] -> 1:2 Invalid number: 1.2.3
    "\x41" -> 1:4 Invalid string token: 41
    {} {} -> 1:4 Unexpected trailing content: {
    "#);
}

#[test]
fn snapshot_strict_options() {
    let inputs = ["1e3", "[1.5E-1, 0.5e+1]", "01", "nulls"];
    insta::assert_snapshot!(render(&inputs, ParserOptions::strict()), @r#"
    1e3 -> Float(1000.0)
    [1.5E-1, 0.5e+1] -> Array([Float(0.15), Float(5.0)])
    01 -> 1:1 Invalid number: 0
    nulls -> 1:1 Unknown token: null
    "#);
}
