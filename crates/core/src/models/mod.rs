pub mod analytics;
pub mod bucket;
pub mod emergency;
pub mod focus;
pub mod goal;
pub mod profile;
pub mod settings;
pub mod spot;
