mod mac;
mod order;
mod payment;
mod purchase;
mod transaction;

pub use self::mac::{DynMacQueryRepository, MacQueryRepositoryTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandRepositoryTrait,
    OrderQueryRepositoryTrait,
};
pub use self::payment::{DynPaymentGateway, PaymentGatewayTrait};
pub use self::purchase::{DynPurchaseRepository, PurchaseRepositoryTrait};
pub use self::transaction::{
    DynTransactionCommandRepository, DynTransactionQueryRepository,
    TransactionCommandRepositoryTrait, TransactionQueryRepositoryTrait,
};
