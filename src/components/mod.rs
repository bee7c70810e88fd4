pub mod accommodations;
pub mod activities;
pub mod business_directory;
pub mod destinations;
pub mod dive_sites;
pub mod footer;
pub mod hero;
pub mod interactive_map;
pub mod language_selector;
pub mod navigation;
pub mod newsletter;
pub mod page_title;
pub mod review_form;
pub mod review_section;
pub mod reviews_list;
pub mod star_rating;
pub mod toaster;
