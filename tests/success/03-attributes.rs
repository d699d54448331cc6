use structextract::Record;

mod reexport {
    pub use structextract as inner;
}

#[derive(Record)]
#[extract(crate = "reexport::inner")]
pub struct Config {
    #[extract(r#type = "kind", skip = "not_a_skip")]
    r#type: String,
    #[extract(skip)]
    #[allow(dead_code)]
    cache: Vec<u8>,
    #[doc = "unrelated attributes are left alone"]
    enabled: bool,
}

fn main() {
    let config = Config {
        r#type: "sqlite".to_string(),
        cache: Vec::new(),
        enabled: true,
    };
    let fields = config.fields().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name(), "type");
    assert_eq!(fields[0].tag("type"), Some("kind"));
    assert_eq!(fields[0].tag("skip"), Some("not_a_skip"));
    assert_eq!(fields[1].name(), "enabled");
}
