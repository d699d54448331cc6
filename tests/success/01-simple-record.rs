use structextract::{Extractor, Record};

#[derive(Record)]
pub struct User {
    #[extract(json = "name", db = "user_name")]
    name: String,
    #[extract(json = "email")]
    email: Option<String>,
    age: u8,
}

fn main() {
    let user = User {
        name: "cat".to_string(),
        email: None,
        age: 3,
    };
    let extractor = Extractor::new(&user).ignore_field(["age"]);
    assert_eq!(extractor.names().unwrap(), vec!["name", "email"]);
}
