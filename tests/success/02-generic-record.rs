use std::borrow::Cow;

use structextract::{Extractor, Record, ToValue};

#[derive(Record)]
pub struct Envelope<'a, T, const N: usize>
where
    T: Clone,
{
    #[extract(json = "payload")]
    payload: T,
    #[extract(json = "label")]
    label: Cow<'a, str>,
    checksum: [u8; N],
}

fn names<T: Clone + ToValue>(envelope: &Envelope<'_, T, 4>) -> Vec<&'static str> {
    Extractor::new(envelope).names().unwrap()
}

fn main() {
    let envelope = Envelope {
        payload: 1u32,
        label: Cow::Borrowed("one"),
        checksum: [0; 4],
    };
    assert_eq!(names(&envelope), vec!["payload", "label", "checksum"]);
}
