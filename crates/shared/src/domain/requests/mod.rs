mod order;
mod payment;
mod transaction;

pub use self::order::{CreateOrder, CreatePurchaseOrder};
pub use self::payment::PaymentIntentPayload;
pub use self::transaction::CreateTransaction;
