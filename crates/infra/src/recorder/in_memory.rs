use std::sync::RwLock;

use super::{PersistenceError, SubmissionRecord, SubmissionRecorder};

/// In-memory recorder for tests/dev (used when no database is configured).
#[derive(Debug, Default)]
pub struct InMemorySubmissionRecorder {
    inner: RwLock<Vec<SubmissionRecord>>,
}

impl InMemorySubmissionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record, in insertion order.
    pub fn all(&self) -> Vec<SubmissionRecord> {
        match self.inner.read() {
            Ok(rows) => rows.clone(),
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl SubmissionRecorder for InMemorySubmissionRecorder {
    async fn record(&self, record: &SubmissionRecord) -> Result<(), PersistenceError> {
        let mut rows = self
            .inner
            .write()
            .map_err(|_| PersistenceError::Unavailable("in-memory store poisoned".to_string()))?;
        rows.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropguide_ai::{ClusterId, CropCatalog, Classification};
    use cropguide_core::MeasurementVector;

    fn classification(cluster: i64) -> Classification {
        Classification {
            measurements: MeasurementVector::new([90.0, 42.0, 43.0, 20.9, 82.0, 6.5, 202.9]).unwrap(),
            cluster_id: ClusterId::new(cluster),
            crops: CropCatalog::builtin().lookup(ClusterId::new(cluster)),
        }
    }

    #[tokio::test]
    async fn records_are_appended_in_order() {
        let recorder = InMemorySubmissionRecorder::new();
        assert!(recorder.is_empty());

        let first = SubmissionRecord::from_classification(&classification(4));
        let second = SubmissionRecord::from_classification(&classification(6));
        recorder.record(&first).await.unwrap();
        recorder.record(&second).await.unwrap();

        let rows = recorder.all();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].crop, "Rice, Pigeonpeas, Papaya, Coconut, Jute, Coffee");
        assert_eq!(rows[1].crop, "Watermelon, Muskmelon");
        assert_ne!(rows[0].id, rows[1].id);
    }

    #[tokio::test]
    async fn unknown_cluster_records_sentinel_name() {
        let recorder = InMemorySubmissionRecorder::new();
        let record = SubmissionRecord::from_classification(&classification(99));
        recorder.record(&record).await.unwrap();
        assert_eq!(recorder.all()[0].crop, "Unknown");
        assert_eq!(recorder.all()[0].measurements.as_array()[6], 202.9);
    }
}
