use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point, Primitive, Size},
    primitives::{Polyline, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle},
    Drawable,
};

/// Pixel width of the filled portion of a bar: `floor(width * progress / max)`.
/// No clamping; progress past `max_value` widens the fill past the outline.
pub fn fill_width(width: u32, progress: f32, max_value: f32) -> u32 {
    (f64::from(progress) / f64::from(max_value) * f64::from(width)) as u32
}

/// Horizontal progress bar: an outlined box with a cleared interior, then a
/// filled block `fill_width` pixels wide from the left edge.
pub fn draw_progress_bar<D>(
    target: &mut D,
    top_left: Point,
    size: Size,
    progress: f32,
    max_value: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let outline = PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .fill_color(BinaryColor::Off)
        .build();
    Rectangle::new(top_left, size).into_styled(outline).draw(target)?;

    let filled = fill_width(size.width, progress, max_value);
    if filled > 0 {
        Rectangle::new(top_left, Size::new(filled, size.height))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)?;
    }

    Ok(())
}

/// Corners of a square of edge `size` centered on `center`, rotated by
/// `angle` radians. Fixed order: top-left, top-right, bottom-right,
/// bottom-left before rotation; consecutive corners share an edge.
pub fn square_corners(center: Point, size: f32, angle: f32) -> [Point; 4] {
    let half = size / 2.0;
    let (sin, cos) = angle.sin_cos();

    [(-half, -half), (half, -half), (half, half), (-half, half)].map(|(x, y)| {
        let rx = x * cos - y * sin;
        let ry = x * sin + y * cos;
        Point::new(center.x + rx.round() as i32, center.y + ry.round() as i32)
    })
}

/// Outline of a rotated square, drawn as a closed polyline through the four
/// corners.
pub fn draw_spinning_square<D>(
    target: &mut D,
    center: Point,
    size: f32,
    angle: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let corners = square_corners(center, size, angle);
    // Revisit the first corner so the fourth edge is drawn.
    let outline = [corners[0], corners[1], corners[2], corners[3], corners[0]];
    Polyline::new(&outline)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, TAU};

    use embedded_graphics::mock_display::MockDisplay;
    use pretty_assertions::assert_eq;

    use super::*;

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        // The fill block overpaints part of the outline, as the layout intends.
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn fill_width_floors() {
        assert_eq!(fill_width(100, 37.4, 100.0), 37);
        assert_eq!(fill_width(100, 99.9, 100.0), 99);
        assert_eq!(fill_width(10, 50.0, 100.0), 5);
        assert_eq!(fill_width(64, 100.0, 200.0), 32);
    }

    #[test]
    fn fill_width_at_the_ends() {
        assert_eq!(fill_width(100, 0.0, 100.0), 0);
        assert_eq!(fill_width(100, 100.0, 100.0), 100);
        assert_eq!(fill_width(42, 73.0, 73.0), 42);
    }

    #[test]
    fn fill_width_past_max_is_not_clamped() {
        assert_eq!(fill_width(10, 150.0, 100.0), 15);
    }

    #[test]
    fn empty_bar_is_outline_only() {
        let mut display = display();
        draw_progress_bar(&mut display, Point::zero(), Size::new(10, 4), 0.0, 100.0).unwrap();
        display.assert_pattern(&[
            "##########",
            "#........#",
            "#........#",
            "##########",
        ]);
    }

    #[test]
    fn half_full_bar_fills_from_the_left() {
        let mut display = display();
        draw_progress_bar(&mut display, Point::zero(), Size::new(10, 4), 50.0, 100.0).unwrap();
        display.assert_pattern(&[
            "##########",
            "#####....#",
            "#####....#",
            "##########",
        ]);
    }

    #[test]
    fn full_bar_is_solid() {
        let mut display = display();
        draw_progress_bar(&mut display, Point::zero(), Size::new(10, 4), 100.0, 100.0).unwrap();
        display.assert_pattern(&[
            "##########",
            "##########",
            "##########",
            "##########",
        ]);
    }

    #[test]
    fn corners_keep_fixed_order_at_angle_zero() {
        let corners = square_corners(Point::new(64, 40), 30.0, 0.0);
        assert_eq!(
            corners,
            [
                Point::new(49, 25),
                Point::new(79, 25),
                Point::new(79, 55),
                Point::new(49, 55),
            ]
        );
    }

    #[test]
    fn rotation_is_periodic() {
        for angle in [0.0_f32, 0.35, 1.0, 2.5, 4.0] {
            assert_eq!(
                square_corners(Point::new(64, 40), 30.0, angle),
                square_corners(Point::new(64, 40), 30.0, angle + TAU),
                "angle {angle}",
            );
        }
    }

    #[test]
    fn quarter_turn_advances_the_corner_cycle() {
        let base = square_corners(Point::new(32, 32), 20.0, 0.0);
        let turned = square_corners(Point::new(32, 32), 20.0, FRAC_PI_2);
        for index in 0..4 {
            assert_eq!(turned[index], base[(index + 1) % 4], "corner {index}");
        }
    }

    #[test]
    fn square_outline_at_angle_zero() {
        let mut display = display();
        draw_spinning_square(&mut display, Point::new(5, 5), 8.0, 0.0).unwrap();
        display.assert_pattern(&[
            "          ",
            " #########",
            " #       #",
            " #       #",
            " #       #",
            " #       #",
            " #       #",
            " #       #",
            " #       #",
            " #########",
        ]);
    }
}
