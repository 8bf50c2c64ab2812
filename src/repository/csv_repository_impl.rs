use crate::common::*;

use crate::errors::dashboard_error::*;
use crate::model::metric::metric_row::*;
use crate::traits::repository_traits::metric_repository::*;

#[derive(Debug, Clone, new)]
pub struct CsvRepositoryImpl {
    csv_path: String,
}

impl CsvRepositoryImpl {
    #[doc = "
        Parse metric rows out of any reader. Factored over `io::Read` so
        tests can feed in-memory bytes instead of touching the filesystem.
    "]
    pub fn parse_metric_rows<R: Read>(reader: R, source: &str) -> anyhow::Result<Vec<MetricRow>> {
        let mut csv_reader: csv::Reader<R> = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: csv::StringRecord = csv_reader
            .headers()
            .map_err(|e| DashboardError::Load {
                path: source.to_string(),
                reason: format!("unreadable header row: {}", e),
            })?
            .clone();

        let metric_idx: usize = Self::required_column(&headers, "metric", source)?;
        let value_idx: usize = Self::required_column(&headers, "value", source)?;

        let mut rows: Vec<MetricRow> = Vec::new();

        for (record_num, result) in csv_reader.records().enumerate() {
            /* File line number: header is line 1, first data row is line 2. */
            let line: usize = record_num + 2;

            let record: csv::StringRecord = result.map_err(|e| DashboardError::Load {
                path: source.to_string(),
                reason: format!("malformed record at line {}: {}", line, e),
            })?;

            let metric: String = record.get(metric_idx).unwrap_or("").to_string();
            let raw_value: &str = record.get(value_idx).unwrap_or("");

            let value: f64 = raw_value.parse::<f64>().map_err(|_| DashboardError::Parse {
                row: line,
                metric: metric.clone(),
                raw: raw_value.to_string(),
            })?;

            rows.push(MetricRow::new(metric, value));
        }

        Ok(rows)
    }

    fn required_column(
        headers: &csv::StringRecord,
        name: &str,
        source: &str,
    ) -> anyhow::Result<usize> {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| {
                DashboardError::Load {
                    path: source.to_string(),
                    reason: format!("required column '{}' is missing", name),
                }
                .into()
            })
    }
}

#[async_trait]
impl MetricRepository for CsvRepositoryImpl {
    async fn fetch_metric_rows(&self) -> anyhow::Result<Vec<MetricRow>> {
        let bytes: Vec<u8> =
            tokio::fs::read(&self.csv_path)
                .await
                .map_err(|e| DashboardError::Load {
                    path: self.csv_path.clone(),
                    reason: e.to_string(),
                })?;

        let rows: Vec<MetricRow> = Self::parse_metric_rows(bytes.as_slice(), &self.csv_path)?;

        info!(
            "[CsvRepositoryImpl->fetch_metric_rows] Loaded {} metric rows from '{}'",
            rows.len(),
            self.csv_path
        );

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_csv() {
        let csv_data: &str = "metric,value\nRetention,100\nExpansion,200.5\n";

        let rows: Vec<MetricRow> =
            CsvRepositoryImpl::parse_metric_rows(csv_data.as_bytes(), "inline").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].metric, "Retention");
        assert_eq!(rows[0].value, 100.0);
        assert_eq!(rows[1].value, 200.5);
    }

    #[test]
    fn missing_value_column_is_a_load_error() {
        let csv_data: &str = "metric,amount\nRetention,100\n";

        let err = CsvRepositoryImpl::parse_metric_rows(csv_data.as_bytes(), "inline").unwrap_err();

        match err.downcast_ref::<DashboardError>() {
            Some(DashboardError::Load { reason, .. }) => {
                assert!(reason.contains("value"));
            }
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_cell_names_the_offending_row() {
        let csv_data: &str = "metric,value\nRetention,100\nExpansion,abc\n";

        let err = CsvRepositoryImpl::parse_metric_rows(csv_data.as_bytes(), "inline").unwrap_err();

        match err.downcast_ref::<DashboardError>() {
            Some(DashboardError::Parse { row, metric, raw }) => {
                assert_eq!(*row, 3);
                assert_eq!(metric, "Expansion");
                assert_eq!(raw, "abc");
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let repository: CsvRepositoryImpl =
            CsvRepositoryImpl::new("does/not/exist.csv".to_string());

        let err = repository.fetch_metric_rows().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::Load { .. })
        ));
    }
}
