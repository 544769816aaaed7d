use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

const START_HUE: f32 = 0.8;
const ITERATIONS_PER_HUE_CYCLE: f32 = 100.0;

/// Walks backwards round the hue wheel, one full turn every hundred
/// iterations, starting from violet. Points that hit the cap are black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueCycleGradient {
    max_iterations: u32,
}

impl HueCycleGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for HueCycleGradient {
    fn map(&self, iterations: u32) -> Colour {
        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let hue = START_HUE - iterations as f32 / ITERATIONS_PER_HUE_CYCLE;

        hsb_to_rgb(hue, 1.0, 1.0)
    }
}
