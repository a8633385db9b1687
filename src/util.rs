/// Number formatting helpers.
///
/// This module provides the canonical text form of real numbers shared by the
/// token display, the printer and the calculation report.
pub mod num;
