//! RecommendForUserHandler - Query handler for tasks matching a user's age and city.

use std::sync::Arc;

use crate::application::PopulationTransaction;
use crate::domain::air_quality::AqiReading;
use crate::domain::player::{population, ProgressionError};
use crate::domain::progression::{require_email, ProgressionEngine, TaskRecommendation};
use crate::ports::AirQualityProvider;

/// Query for a user's recommended tasks.
#[derive(Debug, Clone, Default)]
pub struct RecommendForUserQuery {
    pub email: Option<String>,
}

/// Recommendation together with the reading it was based on.
#[derive(Debug, Clone)]
pub struct RecommendForUserResult {
    pub reading: AqiReading,
    pub recommendation: TaskRecommendation,
}

/// Handler resolving the user's age and current city AQI into tasks.
pub struct RecommendForUserHandler {
    transaction: PopulationTransaction,
    air_quality: Arc<dyn AirQualityProvider>,
    engine: Arc<ProgressionEngine>,
}

impl RecommendForUserHandler {
    pub fn new(
        transaction: PopulationTransaction,
        air_quality: Arc<dyn AirQualityProvider>,
        engine: Arc<ProgressionEngine>,
    ) -> Self {
        Self {
            transaction,
            air_quality,
            engine,
        }
    }

    pub async fn handle(
        &self,
        query: RecommendForUserQuery,
    ) -> Result<RecommendForUserResult, ProgressionError> {
        let email = require_email("email", query.email.as_deref())?;
        let users = self.transaction.read().await?;
        let user = population::find(&users, &email)?;

        let city = match user.city() {
            Some(city) if !city.trim().is_empty() => city,
            _ => {
                return Err(ProgressionError::invalid_input(
                    "city",
                    "user has not selected a city",
                ))
            }
        };

        let reading = self.air_quality.current(city).await?;
        let recommendation = self.engine.recommend_tasks(user.age(), reading.aqi);

        tracing::debug!(
            email = %email,
            city = %reading.city,
            aqi = reading.aqi,
            bracket = %recommendation.bracket,
            "Recommended tasks for user"
        );
        Ok(RecommendForUserResult {
            reading,
            recommendation,
        })
    }
}
