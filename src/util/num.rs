/// Formats a real number in its canonical text form.
///
/// Finite integral values always carry one decimal place, so `10` is written
/// `10.0`. Any other value uses the shortest representation that parses back
/// to the same `f64`.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The text form of `value`.
///
/// ## Example
/// ```
/// use exprtree::util::num::format_real;
///
/// assert_eq!(format_real(10.0), "10.0");
/// assert_eq!(format_real(-5.0), "-5.0");
/// assert_eq!(format_real(1.7), "1.7");
/// assert_eq!(format_real(-23.6), "-23.6");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
