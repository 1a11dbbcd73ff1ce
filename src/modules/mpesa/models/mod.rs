pub mod access_token;
pub mod lipa_request;
pub mod stk_callback;
pub mod stk_push;

pub use access_token::AccessToken;
pub use lipa_request::{
    parse_integer, LipaRequest, PaymentRequest, INVALID_AMOUNT_MESSAGE, INVALID_PHONE_MESSAGE,
};
pub use stk_callback::StkCallback;
pub use stk_push::{ProviderError, StkPushAcknowledgement, StkPushPayload};
