pub mod bus_layout;
pub mod render;
pub mod wav;
