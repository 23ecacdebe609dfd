//! Account recovery settings state slice

mod event;
mod flags;
mod model;
mod normalize;
mod raw;
mod reducer;
pub mod selectors;
mod store;

pub use event::{Operation, RecoveryEvent, Stage};
pub use flags::{OperationFlags, OperationPhase};
pub use model::{PhoneNumber, RecoverySettings, Target};
pub use normalize::{convert_email_response, convert_phone_response};
pub use raw::{RawPhone, RawSettings, RawValue};
pub use reducer::{
    reduce_data, reduce_is_deleting, reduce_is_resending, reduce_is_updating, RecoveryState,
};
pub use store::{parse_events, RecoveryStore};
