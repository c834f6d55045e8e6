use serde_yaml::Value;
use toml2yaml::convert_str;

fn reparse(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

#[test]
fn inline_table_is_written_as_block() -> Result<(), Box<dyn std::error::Error>> {
    let out = convert_str("point = {x = 1, y = 2}\n")?;
    assert_eq!(out, "point:\n  x: 1\n  y: 2\n");
    assert!(!out.contains('{'));
    Ok(())
}

#[test]
fn array_of_tables_uses_block_items() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"
[[fruit]]
name = "apple"
[fruit.physical]
color = "red"

[[fruit]]
name = "banana"
"#;
    let out = convert_str(input)?;
    assert!(out.starts_with("fruit:\n"));
    assert!(out.contains("- name: apple\n"));
    assert!(out.contains("physical:\n"));
    assert!(out.contains("color: red\n"));
    assert!(out.contains("- name: banana\n"));
    assert!(!out.contains('{') && !out.contains('['));
    Ok(())
}

#[test]
fn nested_arrays_stay_in_block_style() -> Result<(), Box<dyn std::error::Error>> {
    let out = convert_str("data = [ [\"delta\", \"phi\"], [3.14], [] ]\n")?;
    assert!(out.contains("- - delta\n"));
    assert!(out.contains("- - 3.14\n"));
    assert!(out.contains("- []\n"));
    Ok(())
}

#[test]
fn empty_collections() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(convert_str("e = {}\nl = []\n")?, "e: {}\nl: []\n");
    assert_eq!(convert_str("")?, "{}\n");
    Ok(())
}

#[test]
fn floats_stay_floats() -> Result<(), Box<dyn std::error::Error>> {
    let out = convert_str("f = 1.0\ng = 1e20\nh = inf\ni = -inf\nj = nan\nk = -0.5\n")?;
    assert!(out.contains("f: 1.0\n"));
    assert!(out.contains("h: .inf\n"));
    assert!(out.contains("i: -.inf\n"));
    assert!(out.contains("j: .nan\n"));
    let v = reparse(&out)?;
    for key in ["f", "g", "h", "i", "j", "k"] {
        assert!(v[key].is_f64(), "{key} should reparse as a float");
    }
    assert_eq!(v["g"].as_f64(), Some(1e20));
    Ok(())
}

#[test]
fn integers_and_bools() -> Result<(), Box<dyn std::error::Error>> {
    let out = convert_str("a = 0xFF\nb = 1_000\nc = -7\nd = true\ne = false\n")?;
    assert_eq!(out, "a: 255\nb: 1000\nc: -7\nd: true\ne: false\n");
    Ok(())
}

#[test]
fn datetimes_are_written_as_rfc3339_text() -> Result<(), Box<dyn std::error::Error>> {
    let out = convert_str("odt = 1979-05-27T07:32:00Z\nld = 1979-05-27\nlt = 07:32:00\n")?;
    let v = reparse(&out)?;
    assert_eq!(v["odt"].as_str(), Some("1979-05-27T07:32:00Z"));
    assert_eq!(v["ld"].as_str(), Some("1979-05-27"));
    assert_eq!(v["lt"].as_str(), Some("07:32:00"));
    Ok(())
}

#[test]
fn ambiguous_strings_keep_string_type() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"
plain = "hello world"
bool_word = "true"
number = "123"
null_word = "null"
empty = ""
dash = "- x"
colon = "a: b"
multi = "one\ntwo"
"#;
    let out = convert_str(input)?;
    assert!(out.contains("plain: hello world\n"));
    let v = reparse(&out)?;
    assert_eq!(v["bool_word"].as_str(), Some("true"));
    assert_eq!(v["number"].as_str(), Some("123"));
    assert_eq!(v["null_word"].as_str(), Some("null"));
    assert_eq!(v["empty"].as_str(), Some(""));
    assert_eq!(v["dash"].as_str(), Some("- x"));
    assert_eq!(v["colon"].as_str(), Some("a: b"));
    assert_eq!(v["multi"].as_str(), Some("one\ntwo"));
    Ok(())
}

#[test]
fn encode_to_writer_matches_string() -> Result<(), Box<dyn std::error::Error>> {
    let doc = toml2yaml::decode_from_str("[server]\nhost = \"localhost\"\nport = 8080\n")?;
    let mut buf = Vec::new();
    toml2yaml::encode_to_writer(&mut buf, &doc)?;
    assert_eq!(String::from_utf8(buf)?, toml2yaml::encode_to_string(&doc)?);
    assert_eq!(toml2yaml::encode_to_string(&doc)?, "server:\n  host: localhost\n  port: 8080\n");
    Ok(())
}
