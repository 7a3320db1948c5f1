use crate::anomaly_data::error::LoadError;
use crate::types::schema::{get_schema_column_names, DEFAULT_NULL_MARKERS, YEAR_COLUMN};
use log::{info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Reads the GISTEMP CSV table and keeps the complete `Year, Jan..Dec` rows.
pub struct AnomalyDataLoader {
    path: PathBuf,
    null_markers: Vec<String>,
}

impl AnomalyDataLoader {
    pub fn new(path: &Path) -> AnomalyDataLoader {
        AnomalyDataLoader {
            path: path.to_path_buf(),
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Replaces the tokens that are read as missing values.
    pub fn with_null_markers(mut self, null_markers: Vec<String>) -> AnomalyDataLoader {
        self.null_markers = null_markers;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the table restricted to the year and month columns.
    ///
    /// Rows with a missing value in any of those thirteen columns are dropped.
    /// Month values are left in the file's unit (hundredths of a degree).
    pub fn load(&self) -> Result<DataFrame, LoadError> {
        let df = self.read_csv()?;
        let schema_names = get_schema_column_names();

        let present = df.get_column_names();
        if let Some(missing) = schema_names
            .iter()
            .find(|name| !present.iter().any(|p| p.as_str() == **name))
        {
            warn!("Column '{}' not found in {:?}", missing, self.path);
            return Err(LoadError::MissingColumn {
                path: self.path.clone(),
                column: missing.to_string(),
            });
        }

        let total_rows = df.height();
        // unparsable cells become null here and are dropped with the missing ones
        let selection: Vec<Expr> = schema_names
            .iter()
            .map(|name| {
                if *name == YEAR_COLUMN {
                    col(*name).cast(DataType::Int64)
                } else {
                    col(*name).cast(DataType::Float64)
                }
            })
            .collect();
        let complete = schema_names
            .iter()
            .fold(lit(true), |acc, name| acc.and(col(*name).is_not_null()));

        let df = df.lazy().select(selection).filter(complete).collect()?;

        info!(
            "Kept {} of {} rows with complete year and month data from {:?}",
            df.height(),
            total_rows,
            self.path
        );
        Ok(df)
    }

    fn read_csv(&self) -> Result<DataFrame, LoadError> {
        // fail early with the I/O error rather than a polars one
        std::fs::metadata(&self.path).map_err(|e| LoadError::CsvReadIo {
            path: self.path.clone(),
            source: e,
        })?;

        let null_values = NullValues::AllColumns(
            self.null_markers
                .iter()
                .map(|m| PlSmallStr::from_str(m))
                .collect(),
        );

        info!("Reading GISTEMP table from {:?}", self.path);
        CsvReadOptions::default()
            .with_has_header(true)
            .map_parse_options(|opts| opts.with_null_values(Some(null_values.clone())))
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| LoadError::CsvReadPolars {
                path: self.path.clone(),
                source: e,
            })?
            .finish()
            .map_err(|e| LoadError::CsvReadPolars {
                path: self.path.clone(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,J-D,D-N,DJF,MAM,JJA,SON";

    fn write_csv(rows: &[&str]) -> Result<NamedTempFile, std::io::Error> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        for row in rows {
            writeln!(file, "{}", row)?;
        }
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_keeps_only_year_and_month_columns() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            "1880,-20,-25,-9,-17,-10,-21,-18,-11,-14,-24,-22,-18,-17,***,****,-12,-17,-20",
            "1881,-20,-15,3,5,6,-19,1,-4,-16,-22,-19,-7,-9,-10,-17,5,-7,-19",
        ])?;

        let df = AnomalyDataLoader::new(file.path()).load()?;

        let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
        let expected: Vec<String> = get_schema_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, expected);
        // markers outside the month columns do not drop the row
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("Year")?.dtype(), &DataType::Int64);
        Ok(())
    }

    #[test]
    fn test_load_drops_rows_with_missing_month() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            "2022,91,89,105,83,84,92,93,95,89,97,73,80,89,90,87,91,93,86",
            "2023,87,97,120,100,93,108,***,119,148,134,146,137,117,111,94,104,115,143",
            "2024,124,144,****,***,***,***,***,***,***,***,***,***,****,****,****,****,****,****",
        ])?;

        let df = AnomalyDataLoader::new(file.path()).load()?;

        assert_eq!(df.height(), 1);
        let years: Vec<i64> = df.column("Year")?.i64()?.into_iter().flatten().collect();
        assert_eq!(years, vec![2022]);
        Ok(())
    }

    #[test]
    fn test_load_drops_rows_with_missing_year() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            "1990,1,2,3,4,5,6,7,8,9,10,11,12,6,6,6,6,6,6",
            ",1,2,3,4,5,6,7,8,9,10,11,12,6,6,6,6,6,6",
        ])?;

        let df = AnomalyDataLoader::new(file.path()).load()?;

        assert_eq!(df.height(), 1);
        Ok(())
    }

    #[test]
    fn test_custom_null_markers() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(&[
            "1990,1,2,3,4,5,6,7,8,9,10,11,12,6,6,6,6,6,6",
            "1991,NA,2,3,4,5,6,7,8,9,10,11,12,6,6,6,6,6,6",
        ])?;

        let df = AnomalyDataLoader::new(file.path())
            .with_null_markers(vec!["NA".to_string()])
            .load()?;

        assert_eq!(df.height(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Year,Jan,Feb,Mar,Apr,May,Jun,Aug,Sep,Oct,Nov,Dec")?;
        writeln!(file, "1990,1,2,3,4,5,6,8,9,10,11,12")?;
        file.flush()?;

        let result = AnomalyDataLoader::new(file.path()).load();

        match result {
            Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "Jul"),
            other => panic!("expected a missing column error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = AnomalyDataLoader::new(Path::new("does/not/exist.csv")).load();
        assert!(matches!(result, Err(LoadError::CsvReadIo { .. })));
    }
}
