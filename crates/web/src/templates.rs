use askama::Template;
use shared::model::Mac;

#[derive(Template)]
#[template(path = "terminal.html")]
pub struct TerminalTemplate<'a> {
    pub stripe_key: &'a str,
}

#[derive(Template)]
#[template(path = "buy-once.html")]
pub struct BuyOnceTemplate<'a> {
    pub stripe_key: &'a str,
    pub mac: &'a Mac,
    pub price: String,
}

#[derive(Template)]
#[template(path = "succeeded.html")]
pub struct SucceededTemplate<'a> {
    pub cardholder: &'a str,
    pub email: &'a str,
    pub payment_intent: &'a str,
    pub payment_method: &'a str,
    pub amount: String,
    pub currency: String,
    pub purchase_note: Option<String>,
}

/// Renders minor units as a major-unit amount, e.g. `109900` as `1099.00`.
pub fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
