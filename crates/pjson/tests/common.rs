#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

pub const DOCUMENT: &str = r#"
{
    "name": "pjson",
    "version": 1,
    "ratio": 0.75,
    "exponent": 2e3,
    "enabled": true,
    "parent": null,
    "tags": ["parser", "json"],
    "escapes": "tab\there \"quoted\" \\ slash\/",
    "nested": {
        "list": [1, [2, [3]], {"deep": {"deeper": []}}],
        "empty": {}
    }
}
"#;
