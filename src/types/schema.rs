//! Column names of the GISTEMP table and of the columns derived from it.

/// Name of the calendar year column.
pub const YEAR_COLUMN: &str = "Year";

/// The twelve monthly anomaly columns, in calendar order.
pub const MONTH_COLUMNS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Derived column holding the mean of the twelve monthly values.
pub const ANNUAL_MEAN_COLUMN: &str = "annual-mean";

/// Derived column holding the smoothed annual mean.
pub const SMOOTHED_COLUMN: &str = "annual-mean-lowess";

/// Tokens GISTEMP writes in place of a value that is not available yet.
pub const DEFAULT_NULL_MARKERS: [&str; 2] = ["***", "****"];

/// GISTEMP stores anomalies in hundredths of a degree Celsius.
pub const HUNDREDTHS_PER_DEGREE: f64 = 100.0;

/// Returns the columns a row must have to be kept: the year followed by the months.
pub(crate) fn get_schema_column_names() -> Vec<&'static str> {
    let mut names = Vec::with_capacity(MONTH_COLUMNS.len() + 1);
    names.push(YEAR_COLUMN);
    names.extend(MONTH_COLUMNS);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_starts_with_year_then_months() {
        let names = get_schema_column_names();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "Year");
        assert_eq!(names[1], "Jan");
        assert_eq!(names[12], "Dec");
    }
}
