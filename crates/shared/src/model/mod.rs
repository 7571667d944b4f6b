mod mac;
mod order;
mod status;
mod transaction;

pub use self::mac::Mac;
pub use self::order::Order;
pub use self::status::{Status, TransactionStatus};
pub use self::transaction::Transaction;
