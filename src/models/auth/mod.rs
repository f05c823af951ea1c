pub mod entities;
pub mod requests;
pub mod responses;

pub use requests::{CheckCollegeRequest, LoginRequest};
pub use responses::{LoginResponse, StudentData};
