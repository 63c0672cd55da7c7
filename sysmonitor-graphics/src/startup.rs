use core::f32::consts::TAU;

use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
    text::{Baseline, Text},
    Drawable,
};

use crate::primitives::draw_spinning_square;

const TITLE: &str = "System Monitor";
const TITLE_ORIGIN: Point = Point::new(25, 5);
const SQUARE_CENTER: Point = Point::new(64, 40);
const SQUARE_SIZE: f32 = 30.0;

/// Boot splash: the title above a square spinning through one full turn.
pub struct StartupAnimation {
    total_frames: u32,
}

impl StartupAnimation {
    pub const fn new(total_frames: u32) -> Self {
        Self { total_frames }
    }

    pub const fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Rotation angle for `frame`, in radians. The sweep reaches a full turn
    /// one frame past the end, so the last rendered frame stops just short.
    pub fn angle(&self, frame: u32) -> f32 {
        frame as f32 / self.total_frames as f32 * TAU
    }

    pub fn angles(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.total_frames).map(|frame| self.angle(frame))
    }

    pub fn render<D>(&self, target: &mut D, frame: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(TITLE, TITLE_ORIGIN, style, Baseline::Top).draw(target)?;
        draw_spinning_square(target, SQUARE_CENTER, SQUARE_SIZE, self.angle(frame))
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use pretty_assertions::assert_eq;

    use crate::primitives::square_corners;

    use super::*;

    #[test]
    fn yields_one_angle_per_frame() {
        let animation = StartupAnimation::new(60);
        assert_eq!(animation.angles().count(), 60);
    }

    #[test]
    fn sweep_starts_at_zero_and_stops_short_of_a_full_turn() {
        let animation = StartupAnimation::new(60);
        assert_eq!(animation.angle(0), 0.0);
        for angle in animation.angles() {
            assert!(angle < TAU, "angle {angle} overshot");
        }
        assert_eq!(animation.angle(60), TAU);
    }

    #[test]
    fn square_stays_on_a_128x64_panel_for_every_frame() {
        let animation = StartupAnimation::new(60);
        for angle in animation.angles() {
            for corner in square_corners(SQUARE_CENTER, SQUARE_SIZE, angle) {
                assert!((0..128).contains(&corner.x), "x {corner:?} at {angle}");
                assert!((0..64).contains(&corner.y), "y {corner:?} at {angle}");
            }
        }
    }

    #[test]
    fn renders_title_and_square() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        // MockDisplay is 64x64; the 128x64 layout hangs off the right edge.
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);

        StartupAnimation::new(60).render(&mut display, 0).unwrap();

        // Top-left corner of the unrotated square.
        assert_eq!(display.get_pixel(Point::new(49, 25)), Some(BinaryColor::On));
    }
}
