pub mod entities;
pub mod requests;
pub mod responses;

pub use requests::{
    EvolutionSummaryQuery, NewSubmission, PendingHomeworkQuery, SubmitHomeworkRequest,
    SubmittedHomeworkQuery,
};
pub use responses::{EvolutionSummary, PendingHomeworkItem, SubmittedHomework};
