pub mod entities;
pub mod requests;
pub mod responses;

pub use requests::SubjectListQuery;
pub use responses::SubjectItem;
