pub mod accommodation;
pub mod business;
pub mod place;
pub mod review;
