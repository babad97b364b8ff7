/// Axis tick values on "nice" 1/2/5 × 10^k increments covering `[start, stop]`.
///
/// `count` is a target, not an exact count. Returns an empty vector when the
/// inputs are not finite or `count` is zero.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let Some((first, last, increment)) = tick_spec(low, high, count as f64) else {
        return Vec::new();
    };

    let mut ticks: Vec<f64> = (first..=last)
        .map(|index| {
            let index = index as f64;
            if increment < 0.0 {
                index / -increment
            } else {
                index * increment
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Returns `(first_index, last_index, increment)`; a negative increment means
/// "divide by `-increment`" to avoid accumulating float error on sub-unit steps.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor() as i32;
    let error = step / 10f64.powi(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (first, last, increment) = if power < 0 {
        let increment = 10f64.powi(-power) / factor;
        let mut first = (start * increment).round();
        let mut last = (stop * increment).round();
        if first / increment < start {
            first += 1.0;
        }
        if last / increment > stop {
            last -= 1.0;
        }
        (first, last, -increment)
    } else {
        let increment = 10f64.powi(power) * factor;
        let mut first = (start / increment).round();
        let mut last = (stop / increment).round();
        if first * increment < start {
            first += 1.0;
        }
        if last * increment > stop {
            last -= 1.0;
        }
        (first, last, increment)
    };

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if last < first || last - first > 10_000.0 {
        return None;
    }

    Some((first as i64, last as i64, increment))
}
