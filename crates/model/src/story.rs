use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{journey::JourneyRequest, ExampleData};

/// Prompt handed to the text generation model.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryPrompt {
    pub mood: String,
    pub source: String,
    pub destination: String,
    pub preferred_stops: Vec<String>,
    pub poi_names: Vec<String>,
}

impl StoryPrompt {
    pub fn new(request: &JourneyRequest, poi_names: Vec<String>) -> Self {
        Self {
            mood: request.mood.clone(),
            source: request.source.name.clone(),
            destination: request.destination.name.clone(),
            preferred_stops: request.preferred_stops.clone(),
            poi_names,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "Create a personalized journey story for a {} trip from {} to {}. \
             The traveler prefers to stop at places like {}. \
             Along the way, they will encounter stops like {}. \
             Describe the journey in an exciting way, focusing on these stops \
             and the beauty of the route.",
            self.mood,
            self.source,
            self.destination,
            self.preferred_stops.join(", "),
            self.poi_names.join(", "),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Story {
    pub story: String,
    pub pois: Vec<String>,
}

impl ExampleData for Story {
    fn example_data() -> Self {
        Story {
            story: "The road north out of Minneapolis...".to_owned(),
            pois: vec!["Gooseberry Falls State Park".to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_everything() {
        let request = JourneyRequest::example_data();
        let prompt = StoryPrompt::new(
            &request,
            vec!["Betty's Pies".to_owned(), "Split Rock Lodge".to_owned()],
        );
        assert_eq!(
            prompt.text(),
            "Create a personalized journey story for a adventurous trip from \
             Minneapolis to Duluth. The traveler prefers to stop at places like \
             restaurants, motels, parks. Along the way, they will encounter stops \
             like Betty's Pies, Split Rock Lodge. Describe the journey in an \
             exciting way, focusing on these stops and the beauty of the route."
        );
    }
}
