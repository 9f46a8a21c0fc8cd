use serde::Serialize;

pub mod contact;

/// Every response body is `success`-shaped, so the form can decode the
/// verdict without inspecting the status code.
#[derive(Serialize)]
pub struct ApiSuccess {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: &'static str,
}
