use std::path::PathBuf;

use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;

/// User intents produced by the UI shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    SelectVariant(FractalKind),
    Reset,
    /// Recentre on the clicked pixel and zoom in.
    Click(Point),
    Save(PathBuf),
}
