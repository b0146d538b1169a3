use nodedit::{Path, Seg, path};

#[test]
fn root_path_display() {
    assert_eq!(Path::root().to_display_string(), "$");
    assert!(Path::root().is_root());
}

#[test]
fn mixed_path_display() {
    let p = path!("customer", 0, "name");
    assert_eq!(p.to_display_string(), r#"$["customer"][0]["name"]"#);
}

#[test]
fn display_parses_back() -> Result<(), Box<dyn std::error::Error>> {
    let p = Path::root().key("orders").index(12).key("line items").index(0);
    let parsed: Path = p.to_string().parse()?;
    assert_eq!(parsed, p);
    Ok(())
}

#[test]
fn renderer_path_array_form() -> Result<(), Box<dyn std::error::Error>> {
    let p: Path = serde_json::from_str(r#"["customer", 0, "name"]"#)?;
    assert_eq!(
        p.segments(),
        &[
            Seg::Key("customer".to_string()),
            Seg::Index(0),
            Seg::Key("name".to_string()),
        ]
    );
    assert_eq!(p.to_string(), r#"$["customer"][0]["name"]"#);
    Ok(())
}

#[test]
fn empty_array_is_root() -> Result<(), Box<dyn std::error::Error>> {
    let p: Path = serde_json::from_str("[]")?;
    assert_eq!(p, Path::root());
    assert_eq!(p.to_string(), "$");
    Ok(())
}
