mod payment;

pub use self::payment::{PaymentIntent, PaymentMethod, PaymentMethodCard};
