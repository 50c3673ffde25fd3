pub mod attendance;
pub mod audit;
pub mod leave;
pub mod location;
pub mod notification;
