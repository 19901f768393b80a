//! Site content resources: the attachment-bearing sets (banners, CEO cards,
//! members, gallery) and the flat editable sections, plus the two inbound
//! submission logs (contact messages and geotechnical requests).

pub mod background;
pub mod banners;
pub mod ceo;
pub mod core_values;
pub mod facts;
pub mod gallery;
pub mod geotech;
pub mod members;
pub mod messages;
pub mod tus;
pub mod why;
