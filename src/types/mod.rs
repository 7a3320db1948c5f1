pub mod annual_anomalies;
pub mod schema;
pub mod smoothing_method;
