//! RecommendTasksHandler - Query handler for tasks by age and AQI.

use std::sync::Arc;

use crate::domain::player::ProgressionError;
use crate::domain::progression::{ProgressionEngine, TaskRecommendation};

/// Query for tasks suited to an age under an AQI reading.
#[derive(Debug, Clone, Default)]
pub struct RecommendTasksQuery {
    pub age: Option<i64>,
    pub aqi: Option<i64>,
}

/// Handler for task recommendations from raw age and AQI.
pub struct RecommendTasksHandler {
    engine: Arc<ProgressionEngine>,
}

impl RecommendTasksHandler {
    pub fn new(engine: Arc<ProgressionEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, query: RecommendTasksQuery) -> Result<TaskRecommendation, ProgressionError> {
        let age = non_negative("age", query.age)?;
        let aqi = non_negative("aqi", query.aqi)?;

        let recommendation = self.engine.recommend_tasks(age, aqi);
        tracing::debug!(
            age_group = %recommendation.age_group,
            bracket = %recommendation.bracket,
            count = recommendation.tasks.len(),
            "Recommended tasks"
        );
        Ok(recommendation)
    }
}

fn non_negative(field: &str, value: Option<i64>) -> Result<u32, ProgressionError> {
    let value = value.ok_or_else(|| ProgressionError::missing(field))?;
    u32::try_from(value).map_err(|_| {
        ProgressionError::invalid_input(field, format!("must be non-negative, got {}", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::engine;
    use crate::domain::catalog::{AgeGroup, AqiBracket};

    #[test]
    fn maps_age_and_aqi_to_catalog_entry() {
        let rec = RecommendTasksHandler::new(engine())
            .handle(RecommendTasksQuery {
                age: Some(16),
                aqi: Some(301),
            })
            .unwrap();
        assert_eq!(rec.age_group, AgeGroup::Teenagers);
        assert_eq!(rec.bracket, AqiBracket::Hazardous);
        assert_eq!(rec.tasks.len(), 3);
    }

    #[test]
    fn negative_aqi_is_invalid() {
        let err = RecommendTasksHandler::new(engine())
            .handle(RecommendTasksQuery {
                age: Some(16),
                aqi: Some(-3),
            })
            .unwrap_err();
        assert!(matches!(err, ProgressionError::InvalidInput { ref field, .. } if field == "aqi"));
    }

    #[test]
    fn missing_age_is_invalid() {
        let err = RecommendTasksHandler::new(engine())
            .handle(RecommendTasksQuery {
                age: None,
                aqi: Some(10),
            })
            .unwrap_err();
        assert_eq!(err, ProgressionError::missing("age"));
    }
}
