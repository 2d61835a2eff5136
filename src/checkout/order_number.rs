use chrono::NaiveDate;
use rand::Rng;

/// Human-readable purchase order number: fixed prefix, compact date code,
/// random numeric suffix. Unique with very high probability, not by
/// construction; the orders table carries a UNIQUE key as the backstop, and
/// a collision rolls the order back like any other commit failure.
pub fn generate() -> String {
    let suffix = rand::thread_rng().gen_range(0..10_000);
    for_date(chrono::Local::now().date_naive(), suffix)
}

pub fn for_date(date: NaiveDate, suffix: u16) -> String {
    format!("PO-{}-{:04}", date.format("%y%m%d"), suffix)
}
