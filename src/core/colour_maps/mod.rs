pub mod hue_cycle_gradient;
