use serde::{Deserialize, Serialize};

/// One drawing command of a vector path, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => [x1, y1, x2, y2, x, y].iter().all(|value| value.is_finite()),
            Self::Close => true,
        }
    }
}

/// Projects a polar coordinate where angle `0` points up (12 o'clock) and
/// angles grow clockwise in screen space.
#[must_use]
pub fn polar_point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Open polyline through `points` in order.
#[must_use]
pub fn polyline(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len());
    for (index, &(x, y)) in points.iter().enumerate() {
        if index == 0 {
            commands.push(PathCommand::MoveTo { x, y });
        } else {
            commands.push(PathCommand::LineTo { x, y });
        }
    }
    commands
}

/// Closed cardinal spline through `points`.
///
/// Each segment `p[i] -> p[i + 1]` uses control points
/// `p[i] + k * (p[i + 1] - p[i - 1])` and `p[i + 1] - k * (p[i + 2] - p[i])`
/// with `k = (1 - tension) / 6`, indices wrapping around. Tension `0` is a
/// Catmull-Rom-like curve, tension `1` degenerates to straight edges.
#[must_use]
pub fn cardinal_closed(points: &[(f64, f64)], tension: f64) -> Vec<PathCommand> {
    let count = points.len();
    match count {
        0 => return Vec::new(),
        1 | 2 => {
            let mut commands = polyline(points);
            commands.push(PathCommand::Close);
            return commands;
        }
        _ => {}
    }

    let k = (1.0 - tension) / 6.0;
    let at = |index: usize| points[index % count];

    let mut commands = Vec::with_capacity(count + 2);
    let (start_x, start_y) = points[0];
    commands.push(PathCommand::MoveTo {
        x: start_x,
        y: start_y,
    });
    for index in 0..count {
        let previous = at(index + count - 1);
        let current = at(index);
        let next = at(index + 1);
        let after = at(index + 2);
        commands.push(PathCommand::CubicTo {
            x1: current.0 + k * (next.0 - previous.0),
            y1: current.1 + k * (next.1 - previous.1),
            x2: next.0 - k * (after.0 - current.0),
            y2: next.1 - k * (after.1 - current.1),
            x: next.0,
            y: next.1,
        });
    }
    commands.push(PathCommand::Close);
    commands
}

/// Closed circle outline as four cubic quarter arcs starting at 12 o'clock.
#[must_use]
pub fn circle_path(cx: f64, cy: f64, radius: f64) -> Vec<PathCommand> {
    // Control distance for a quarter arc: 4/3 * tan(pi/8).
    const KAPPA: f64 = 0.552_284_749_830_793_4;
    let k = radius * KAPPA;
    let (top, right, bottom, left) = (
        (cx, cy - radius),
        (cx + radius, cy),
        (cx, cy + radius),
        (cx - radius, cy),
    );
    vec![
        PathCommand::MoveTo { x: top.0, y: top.1 },
        PathCommand::CubicTo {
            x1: top.0 + k,
            y1: top.1,
            x2: right.0,
            y2: right.1 - k,
            x: right.0,
            y: right.1,
        },
        PathCommand::CubicTo {
            x1: right.0,
            y1: right.1 + k,
            x2: bottom.0 + k,
            y2: bottom.1,
            x: bottom.0,
            y: bottom.1,
        },
        PathCommand::CubicTo {
            x1: bottom.0 - k,
            y1: bottom.1,
            x2: left.0,
            y2: left.1 + k,
            x: left.0,
            y: left.1,
        },
        PathCommand::CubicTo {
            x1: left.0,
            y1: left.1 - k,
            x2: top.0 - k,
            y2: top.1,
            x: top.0,
            y: top.1,
        },
        PathCommand::Close,
    ]
}

#[cfg(test)]
mod tests {
    use super::{PathCommand, cardinal_closed, circle_path, polar_point};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn polar_zero_angle_points_up() {
        let (x, y) = polar_point(10.0, 0.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, -10.0, epsilon = 1e-12);

        let (x, y) = polar_point(10.0, FRAC_PI_2);
        assert_abs_diff_eq!(x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);

        let (x, y) = polar_point(10.0, PI);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn closed_curve_visits_every_point_and_closes() {
        let points = [(0.0, -10.0), (10.0, 0.0), (0.0, 10.0), (-10.0, 0.0)];
        let commands = cardinal_closed(&points, 0.0);

        assert_eq!(commands.len(), points.len() + 2);
        assert_eq!(commands[0], PathCommand::MoveTo { x: 0.0, y: -10.0 });
        assert_eq!(commands.last(), Some(&PathCommand::Close));

        let ends: Vec<(f64, f64)> = commands
            .iter()
            .filter_map(|command| match *command {
                PathCommand::CubicTo { x, y, .. } => Some((x, y)),
                _ => None,
            })
            .collect();
        assert_eq!(ends, vec![(10.0, 0.0), (0.0, 10.0), (-10.0, 0.0), (0.0, -10.0)]);
    }

    #[test]
    fn full_tension_places_controls_on_vertices() {
        let points = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
        let commands = cardinal_closed(&points, 1.0);
        assert_eq!(
            commands[1],
            PathCommand::CubicTo {
                x1: 0.0,
                y1: 0.0,
                x2: 4.0,
                y2: 0.0,
                x: 4.0,
                y: 0.0,
            }
        );
    }

    #[test]
    fn circle_outline_passes_through_cardinal_points() {
        let commands = circle_path(430.0, 500.0, 26.0);
        assert_eq!(commands.len(), 6);
        assert_eq!(commands[0], PathCommand::MoveTo { x: 430.0, y: 474.0 });
        let ends: Vec<(f64, f64)> = commands
            .iter()
            .filter_map(|command| match *command {
                PathCommand::CubicTo { x, y, .. } => Some((x, y)),
                _ => None,
            })
            .collect();
        assert_eq!(
            ends,
            vec![(456.0, 500.0), (430.0, 526.0), (404.0, 500.0), (430.0, 474.0)]
        );
    }
}
