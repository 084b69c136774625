//! Domain models
//!
//! Pure data types with no I/O.

mod datetime;
pub mod money;
mod receipt;
mod receipt_id;

pub use datetime::{DATE_LAYOUT, DateTimeError, PurchaseDate, PurchaseTime, TIME_LAYOUT};
pub use money::MoneyParts;
pub use receipt::{Item, ParseError, Receipt};
pub use receipt_id::{ReceiptId, ReceiptIdError};
