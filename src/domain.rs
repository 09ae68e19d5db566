pub mod cases;
pub mod sheets;
