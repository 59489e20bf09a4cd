use model::{
    journey::{JourneyPlan, JourneyPlanRequest, JourneyRequest},
    poi::{self, PointOfInterest, UNKNOWN_NAME},
    story::{Story, StoryPrompt},
};

use crate::{ApiError, ProviderClient};

/// Upper bound of POI names put into one prompt; small text models lose the
/// thread on long enumerations.
pub const MAX_PROMPT_POIS: usize = 20;

/// Named, distinct POIs worth mentioning in a story.
pub fn story_poi_names(pois: &[PointOfInterest]) -> Vec<String> {
    poi::unique_names(pois)
        .into_iter()
        .filter(|name| name != UNKNOWN_NAME)
        .take(MAX_PROMPT_POIS)
        .collect()
}

fn check_locations(request: &JourneyRequest) -> Result<(), ApiError> {
    if request.source.name.trim().is_empty() || request.destination.name.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "source or destination name is missing".to_owned(),
        ));
    }
    Ok(())
}

impl ProviderClient {
    /// Writes a story for a journey along the given POIs.
    pub async fn write_story(
        &self,
        request: &JourneyRequest,
        pois: &[PointOfInterest],
    ) -> Result<Story, ApiError> {
        check_locations(request)?;
        let names = story_poi_names(pois);
        if names.is_empty() {
            return Err(ApiError::NoPointsOfInterest);
        }
        let prompt = StoryPrompt::new(request, names.clone());
        let story = self.generate_text(&prompt.text()).await?;
        Ok(Story {
            story,
            pois: names,
        })
    }

    /// Fetches POIs around the journey first, then writes its story.
    pub async fn story_for(
        &self,
        request: &JourneyRequest,
        proximity_km: f64,
    ) -> Result<Story, ApiError> {
        check_locations(request)?;
        let pois = self
            .fetch_pois(&request.source, &request.destination, proximity_km)
            .await;
        self.write_story(request, &pois).await
    }

    /// Runs the whole flow for two place names, one provider after another.
    ///
    /// Geocoding and routing failures abort the plan. Missing POIs or a failed
    /// story only leave the respective parts empty.
    pub async fn plan_journey(
        &self,
        request: JourneyPlanRequest,
    ) -> Result<JourneyPlan, ApiError> {
        let source = self.geocode(&request.source).await?;
        let destination = self.geocode(&request.destination).await?;

        let routes = self.fetch_decoded_routes(&source, &destination).await?;
        let pois = self
            .fetch_pois(&source, &destination, request.proximity_km)
            .await;
        let heat_points = poi::heat_points(&pois);

        let journey = JourneyRequest {
            source: source.clone(),
            destination: destination.clone(),
            mood: request.mood,
            preferred_stops: request.preferred_stops,
        };
        let story = match self.write_story(&journey, &pois).await {
            Ok(story) => Some(story.story),
            Err(why) => {
                log::warn!("Error generating story: {}", why);
                None
            }
        };

        Ok(JourneyPlan {
            straight_line_km: source.distance_km_to(&destination),
            source,
            destination,
            routes,
            pois,
            heat_points,
            story,
        })
    }
}

#[cfg(test)]
mod tests {
    use model::{place::Location, ExampleData};

    use super::*;

    fn poi(name: &str) -> PointOfInterest {
        PointOfInterest {
            name: name.to_owned(),
            category: "park".to_owned(),
            location: Location { lat: 0.0, lon: 0.0 },
        }
    }

    #[test]
    fn unknown_and_duplicate_names_are_dropped() {
        let pois = [poi("A"), poi(UNKNOWN_NAME), poi("B"), poi("A")];
        assert_eq!(story_poi_names(&pois), vec!["A", "B"]);
    }

    #[test]
    fn prompt_names_are_capped() {
        let pois = (0..50).map(|i| poi(&format!("Stop {i}"))).collect::<Vec<_>>();
        assert_eq!(story_poi_names(&pois).len(), MAX_PROMPT_POIS);
    }

    #[tokio::test]
    async fn story_needs_pois() {
        let client = ProviderClient::new(Default::default()).unwrap();
        let request = JourneyRequest::example_data();
        let result = client.write_story(&request, &[poi(UNKNOWN_NAME)]).await;
        assert!(matches!(result, Err(ApiError::NoPointsOfInterest)));
    }

    #[tokio::test]
    async fn story_needs_location_names() {
        let client = ProviderClient::new(Default::default()).unwrap();
        let mut request = JourneyRequest::example_data();
        request.destination.name = " ".to_owned();
        let result = client.write_story(&request, &[poi("A")]).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }
}
