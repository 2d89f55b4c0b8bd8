use crate::errors::OcppError;
use dyn_clone::DynClone;

#[typetag::serde(tag = "type")]
pub trait OcppEntity: DynClone {
    fn validate(self: &Self) -> Result<(), OcppError>;
}

dyn_clone::clone_trait_object!(OcppEntity);

/// Implemented by every outbound request payload so it can travel as the
/// boxed `payload` field of an RcpCall without the caller naming its type.
#[typetag::serde(tag = "type")]
pub trait OcppRequest: DynClone {
    fn get_message_type(&self) -> String;
}

dyn_clone::clone_trait_object!(OcppRequest);

pub trait OcppMessage {
    type Request: Default;
    type Response: Default;

    fn request() -> Self::Request {
        Self::Request::default()
    }
    fn response() -> Self::Response {
        Self::Response::default()
    }
}
