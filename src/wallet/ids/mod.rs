mod account_id;
mod favorite_id;
mod generator;
mod payment_id;

pub use account_id::AccountId;
pub use favorite_id::FavoriteId;
pub use generator::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use payment_id::PaymentId;
