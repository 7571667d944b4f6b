mod messages;
mod stripe;

pub use self::stripe::StripeClient;
