// Domain layer - Dashboard data model
pub mod boards;
pub mod cases;
pub mod dashboard;
pub mod geo;
pub mod map;
pub mod tab;
pub mod widgets;
