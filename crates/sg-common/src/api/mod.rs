pub mod match_request;
pub mod match_response;

pub use match_request::{JobMatchRequest, RoleMatchRequest};
pub use match_response::{CategoryScore, JobMatchResponse, RoleMatchResponse};
