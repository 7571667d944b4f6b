mod payment;

pub use self::payment::StripeClient;
