pub mod hsb_to_rgb;
pub mod map_coord;
