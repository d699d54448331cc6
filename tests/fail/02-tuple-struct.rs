use structextract::Record;

#[derive(Record)]
pub struct Pair(u32, u32);

fn main() {}
