pub mod emergency_service;
pub mod focus_service;
pub mod goal_service;
pub mod metals_service;
pub mod spot_price_service;
