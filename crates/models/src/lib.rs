pub mod db;

pub mod background;
pub mod banner;
pub mod ceo_card;
pub mod core_values;
pub mod facts;
pub mod gallery;
pub mod geotech_requests;
pub mod main_service;
pub mod members;
pub mod messages;
pub mod sub_service;
pub mod tus;
pub mod why_choose_us;
