// Job postings: storage, classification, dashboard aggregation and JSearch import.
// Matching against resumes lives in `matching`.

pub mod classify;
pub mod dashboard;
pub mod handlers;
pub mod jsearch;
pub mod store;
