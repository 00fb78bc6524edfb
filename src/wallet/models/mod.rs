mod account;
mod favorite;
mod payment;

pub use account::{Account, Phone};
pub use favorite::Favorite;
pub use payment::{Payment, PaymentCategory, PaymentStatus};
