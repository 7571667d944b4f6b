mod database;
mod env;
mod stripe;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::env::{env_flag, env_or, env_parse, env_required};
pub use self::stripe::StripeConfig;
