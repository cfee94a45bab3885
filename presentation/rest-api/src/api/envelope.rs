use poem_openapi::Object;
use poem_openapi::types::{ParseFromJSON, ToJSON};

/// Success envelope: every 2xx body with content is `{"data": ...}`.
#[derive(Debug, Object)]
pub struct Data<T: ParseFromJSON + ToJSON> {
    pub data: T,
}

impl<T: ParseFromJSON + ToJSON> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
