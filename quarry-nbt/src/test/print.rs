use crate::test::Builder;
use crate::{from_bytes, TagId};

#[test]
fn scalar_display() {
    let payload = Builder::new()
        .start_compound("")
        .int("x", 42)
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    let x = root.get("x").unwrap();
    assert_eq!(x.to_string(), "TAG_Int('x'): 42");
}

#[test]
fn flat_compound_rendering() {
    let payload = Builder::new()
        .start_compound("root")
        .byte("a", 1)
        .string("s", "hi")
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    assert_eq!(
        root.as_string(),
        "2 entries\n{\n  TAG_Byte('a'): 1\n  TAG_String('s'): hi\n}"
    );
    assert_eq!(
        root.to_string(),
        "TAG_Compound('root'): 2 entries\n{\n  TAG_Byte('a'): 1\n  TAG_String('s'): hi\n}"
    );
}

#[test]
fn nested_compounds_indent() {
    let payload = Builder::new()
        .start_compound("root")
        .start_compound("inner")
        .byte("b", 1)
        .end_compound()
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    assert_eq!(
        root.as_string(),
        "1 entries\n{\n  TAG_Compound('inner'): 1 entries\n  {\n    TAG_Byte('b'): 1\n  }\n}"
    );
}

#[test]
fn list_elements_print_their_index() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("l", TagId::Short, 2)
        .short_payload(3)
        .short_payload(4)
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    let rendered = root.get("l").unwrap().as_string();
    assert!(rendered.contains("TAG_Short('0'): 3"), "{}", rendered);
    assert!(rendered.contains("TAG_Short('1'): 4"), "{}", rendered);
}

#[test]
fn long_containers_truncate_after_ten() {
    let bytes: Vec<i8> = (0..20).collect();
    let payload = Builder::new()
        .start_compound("")
        .byte_array("bs", &bytes)
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    let rendered = root.get("bs").unwrap().as_string();
    assert!(rendered.starts_with("20 entries\n{\n"), "{}", rendered);
    assert!(rendered.contains("TAG_Byte('9'): 9"), "{}", rendered);
    assert!(!rendered.contains("TAG_Byte('10'): 10"), "{}", rendered);
    assert!(rendered.contains("... and 10 more"), "{}", rendered);
}

#[test]
fn borderline_containers_do_not_truncate() {
    let bytes: Vec<i8> = (0..15).collect();
    let payload = Builder::new()
        .start_compound("")
        .byte_array("bs", &bytes)
        .end_compound()
        .build();

    let rendered = from_bytes(&payload).unwrap().get("bs").unwrap().as_string();
    assert!(rendered.contains("TAG_Byte('14'): 14"), "{}", rendered);
    assert!(!rendered.contains("more"), "{}", rendered);
}
