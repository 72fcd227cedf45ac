use metagen_codegen::{serialize, value_to_json, Declaration, MetadataCodec, Serializer};
use metagen_core_store::{path, Codec, FieldPath, Format, RecordStore, Value};

fn written(paths: &[(&str, Value)]) -> RecordStore {
    let mut store = RecordStore::new();
    for (p, v) in paths {
        store.set(&path!(p), v.clone());
    }
    store
}

#[test]
fn written_value_is_reachable_in_output() {
    let store = written(&[
        ("openGraph.images.0.url", Value::from("https://example.com/og.png")),
        ("robots.googleBot.max-snippet", Value::from(-1i64)),
    ]);
    let code = serialize(store.root());

    let body = code
        .strip_prefix("export const metadata = ")
        .expect("declaration head");
    let reparsed: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        reparsed["openGraph"]["images"]["0"]["url"],
        serde_json::json!("https://example.com/og.png")
    );
    assert_eq!(
        reparsed["robots"]["googleBot"]["max-snippet"],
        serde_json::json!(-1)
    );
}

#[test]
fn output_body_is_the_tree_as_json() {
    let store = written(&[
        ("title.default", Value::from("Hello")),
        ("robots.index", Value::from(false)),
    ]);
    let code = serialize(store.root());
    let body = code.strip_prefix("export const metadata = ").unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(reparsed, value_to_json(store.root()));
}

#[test]
fn serializing_twice_is_identical() {
    let store = written(&[("a.b.c", Value::from(1i64))]);
    let serializer = Serializer::new(Declaration::default().with_indent(4));
    assert_eq!(
        serializer.serialize(store.root()),
        serializer.serialize(store.root())
    );
}

#[test]
fn nested_write_into_empty_tree() {
    let store = written(&[("a.b.c", Value::from(1i64))]);
    assert_eq!(
        serialize(store.root()),
        "export const metadata = {\n  \"a\": {\n    \"b\": {\n      \"c\": 1\n    }\n  }\n}"
    );
}

#[test]
fn codec_formats_agree_on_the_tree() {
    let store = written(&[("description", Value::from("About"))]);
    let codec = MetadataCodec::default();

    let json = codec.encode(store.root(), &Format::JSON).unwrap();
    let js = codec.encode(store.root(), &Format::JS_MODULE).unwrap();
    let ts = codec.encode(store.root(), &Format::TS_MODULE).unwrap();

    assert_eq!(js, format!("export const metadata = {}", json));
    assert!(ts.ends_with(&format!("export const metadata: Metadata = {}", json)));
}

#[test]
fn root_path_is_empty() {
    assert!(FieldPath::root().is_empty());
}
