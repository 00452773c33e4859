//! Points-of-interest agent: coordinates to a short list of named
//! attractions, each enriched with a category, a description, a Wikipedia
//! link and an image.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::models::{PoiCategory, PointOfInterest};
use crate::providers::PoiProvider;

/// Hard cap on attractions per query. First five unique names win; the
/// scan stops there, so ordering follows provider discovery order.
pub const MAX_PLACES: usize = 5;

/// Keyword-to-sentence table for descriptions, checked in order. The
/// `{name}` token is substituted with the attraction name.
const DESCRIPTIONS: &[(&str, &str)] = &[
    ("museum", "Explore fascinating exhibits and collections at {name}"),
    ("park", "Enjoy nature and outdoor activities at {name}"),
    ("church", "Visit this beautiful religious site at {name}"),
    ("castle", "Discover history and architecture at {name}"),
    ("palace", "Experience grandeur and royalty at {name}"),
    ("garden", "Wander through beautiful landscapes at {name}"),
    ("monument", "Pay tribute to history at {name}"),
    ("theatre", "Enjoy cultural performances at {name}"),
    ("stadium", "Experience exciting events at {name}"),
    ("zoo", "Meet amazing animals from around the world at {name}"),
    ("aquarium", "Discover marine life at {name}"),
    ("gallery", "Admire artistic masterpieces at {name}"),
    ("temple", "Experience spiritual tranquility at {name}"),
    ("mosque", "Appreciate Islamic architecture at {name}"),
    ("cathedral", "Marvel at Gothic architecture at {name}"),
    ("viewpoint", "Enjoy breathtaking views from {name}"),
    ("beach", "Relax by the sea at {name}"),
    ("lake", "Enjoy peaceful waterside scenery at {name}"),
    ("mountain", "Experience majestic mountain landscapes at {name}"),
];

/// Known names whose canonical Wikipedia article title differs from the
/// map label
const WIKIPEDIA_TITLE_CORRECTIONS: &[(&str, &str)] = &[
    ("Lalbagh", "Lalbagh Botanical Garden"),
    ("Cubbon Park", "Cubbon Park"),
    ("Bangalore Palace", "Bangalore Palace"),
    ("Bannerghatta National Park", "Bannerghatta National Park"),
    (
        "Jawaharlal Nehru Planetarium",
        "Jawaharlal Nehru Planetarium, Bangalore",
    ),
    ("MG Road", "Mahatma Gandhi Road, Bangalore"),
    ("Commercial Street", "Commercial Street, Bangalore"),
    ("Brigade Road", "Brigade Road"),
    ("UB City", "UB City"),
    ("Vidhana Soudha", "Vidhana Soudha"),
    ("Tipu Sultan's Summer Palace", "Tipu Sultan's Summer Palace"),
    ("Bull Temple", "Bull Temple"),
    ("ISKCON Temple", "ISKCON Temple Bangalore"),
    ("St. Mary's Basilica", "St. Mary's Basilica, Bangalore"),
    ("Bangalore Fort", "Bangalore Fort"),
    ("Lalbagh Glasshouse", "Lalbagh Botanical Garden"),
];

/// Finds attractions near a point through a POI provider.
pub struct PlacesAgent {
    provider: Arc<dyn PoiProvider>,
}

impl PlacesAgent {
    pub fn new(provider: Arc<dyn PoiProvider>) -> Self {
        Self { provider }
    }

    /// Fetch up to [`MAX_PLACES`] uniquely-named attractions within the
    /// radius. Returns `None` when the provider call fails.
    pub async fn fetch(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: u32,
    ) -> Option<Vec<PointOfInterest>> {
        debug!(
            "Searching attractions within {}m of ({}, {})",
            radius_meters, lat, lon
        );

        let elements = match self.provider.search(lat, lon, radius_meters).await {
            Ok(elements) => elements,
            Err(e) => {
                error!("POI lookup failed for ({}, {}): {}", lat, lon, e);
                return None;
            }
        };

        let mut places = Vec::new();
        let mut seen_names: HashSet<String> = HashSet::new();

        for element in &elements {
            let Some(name) = element.tags.get("name") else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() || seen_names.contains(name) {
                continue;
            }

            places.push(PointOfInterest {
                name: name.to_string(),
                category: categorize(&element.tags),
                description: describe(&element.tags, name),
                wikipedia_url: wikipedia_url(name, &element.tags),
                image_url: image_url(&element.tags, name),
            });
            seen_names.insert(name.to_string());

            if places.len() >= MAX_PLACES {
                break;
            }
        }

        info!("Found {} named attractions", places.len());
        Some(places)
    }
}

/// Derive a category from provider tags, most specific tag family first.
#[must_use]
pub fn categorize(tags: &HashMap<String, String>) -> PoiCategory {
    if let Some(tourism) = tags.get("tourism") {
        match tourism.as_str() {
            "museum" | "gallery" => return PoiCategory::MuseumGallery,
            "attraction" | "theme_park" | "amusement_park" => {
                return PoiCategory::AttractionEntertainment;
            }
            "zoo" | "aquarium" => return PoiCategory::WildlifeNature,
            "viewpoint" | "artwork" | "monument" => return PoiCategory::LandmarkViewpoint,
            _ => {}
        }
    }

    if tags.contains_key("historic") {
        return PoiCategory::HistoricSite;
    }

    if let Some(amenity) = tags.get("amenity") {
        match amenity.as_str() {
            "theatre" | "cinema" | "concert_hall" => return PoiCategory::ArtsCulture,
            "restaurant" | "cafe" => return PoiCategory::FoodDining,
            _ => {}
        }
    }

    if let Some(leisure) = tags.get("leisure") {
        match leisure.as_str() {
            "park" | "garden" | "nature_reserve" => return PoiCategory::ParkNature,
            "stadium" | "sports_centre" | "arena" => return PoiCategory::SportsRecreation,
            _ => {}
        }
    }

    if let Some(building) = tags.get("building") {
        if matches!(building.as_str(), "church" | "cathedral" | "temple" | "mosque") {
            return PoiCategory::ReligiousSite;
        }
    }

    PoiCategory::TouristAttraction
}

/// Build a one-line description from the keyword table, falling back to
/// progressively more generic sentences.
#[must_use]
pub fn describe(tags: &HashMap<String, String>, name: &str) -> String {
    let matches_keyword = |keyword: &str| {
        tags.contains_key(keyword)
            || tags.get("tourism").is_some_and(|v| v == keyword)
            || tags.get("leisure").is_some_and(|v| v == keyword)
            || tags.get("historic").is_some_and(|v| v == keyword)
    };

    for (keyword, template) in DESCRIPTIONS {
        if matches_keyword(keyword) {
            return template.replace("{name}", name);
        }
    }

    if tags.contains_key("wikipedia") {
        return format!("Learn more about this notable destination: {name}");
    }

    if tags.contains_key("tourism") {
        "A popular tourist destination worth visiting".to_string()
    } else if tags.contains_key("historic") {
        "A historic site with cultural significance".to_string()
    } else if tags.contains_key("leisure") {
        "A great place for recreation and leisure".to_string()
    } else {
        "An interesting place to explore and discover".to_string()
    }
}

/// Build a Wikipedia link for a place.
///
/// An explicit `wikipedia` tag wins and may carry a language prefix
/// (`lang:Article`). Otherwise the name goes through the title-correction
/// table and becomes an English Wikipedia URL.
#[must_use]
pub fn wikipedia_url(name: &str, tags: &HashMap<String, String>) -> String {
    if let Some(tag) = tags.get("wikipedia") {
        if let Some((lang, article)) = tag.split_once(':') {
            return format!(
                "https://{lang}.wikipedia.org/wiki/{}",
                urlencoding::encode(&article.replace(' ', "_"))
            );
        }
        return format!(
            "https://en.wikipedia.org/wiki/{}",
            urlencoding::encode(&tag.replace(' ', "_"))
        );
    }

    let clean_name = name.trim();
    let title = WIKIPEDIA_TITLE_CORRECTIONS
        .iter()
        .find(|(known, _)| *known == clean_name)
        .map_or(clean_name, |(_, corrected)| *corrected);

    format!(
        "https://en.wikipedia.org/wiki/{}",
        urlencoding::encode(&title.replace(' ', "_"))
    )
}

/// Image for a place: the provider's `image` tag when present, otherwise a
/// deterministic placeholder seeded by the encoded name.
#[must_use]
pub fn image_url(tags: &HashMap<String, String>, name: &str) -> String {
    if let Some(image) = tags.get("image") {
        return image.clone();
    }
    format!(
        "https://picsum.photos/seed/{}/400/300.jpg",
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, WayfarerError};
    use crate::providers::PoiElement;
    use async_trait::async_trait;
    use rstest::rstest;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn named_element(name: &str) -> PoiElement {
        PoiElement {
            tags: tags(&[("name", name), ("tourism", "attraction")]),
        }
    }

    struct FixedProvider(Vec<PoiElement>);

    #[async_trait]
    impl PoiProvider for FixedProvider {
        async fn search(&self, _lat: f64, _lon: f64, _radius: u32) -> Result<Vec<PoiElement>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl PoiProvider for FailingProvider {
        async fn search(&self, _lat: f64, _lon: f64, _radius: u32) -> Result<Vec<PoiElement>> {
            Err(WayfarerError::NetworkError("timed out".to_string()))
        }
    }

    #[rstest]
    #[case(&[("tourism", "museum")], PoiCategory::MuseumGallery)]
    #[case(&[("tourism", "theme_park")], PoiCategory::AttractionEntertainment)]
    #[case(&[("tourism", "zoo")], PoiCategory::WildlifeNature)]
    #[case(&[("tourism", "viewpoint")], PoiCategory::LandmarkViewpoint)]
    #[case(&[("historic", "fort")], PoiCategory::HistoricSite)]
    #[case(&[("amenity", "cinema")], PoiCategory::ArtsCulture)]
    #[case(&[("amenity", "cafe")], PoiCategory::FoodDining)]
    #[case(&[("leisure", "nature_reserve")], PoiCategory::ParkNature)]
    #[case(&[("leisure", "stadium")], PoiCategory::SportsRecreation)]
    #[case(&[("building", "mosque")], PoiCategory::ReligiousSite)]
    #[case(&[("shop", "mall")], PoiCategory::TouristAttraction)]
    fn test_categorize(#[case] pairs: &[(&str, &str)], #[case] expected: PoiCategory) {
        assert_eq!(categorize(&tags(pairs)), expected);
    }

    #[test]
    fn test_tourism_tag_outranks_historic() {
        let category = categorize(&tags(&[("tourism", "museum"), ("historic", "castle")]));
        assert_eq!(category, PoiCategory::MuseumGallery);
    }

    #[test]
    fn test_unmapped_tourism_value_falls_through_to_historic() {
        let category = categorize(&tags(&[("tourism", "hotel"), ("historic", "castle")]));
        assert_eq!(category, PoiCategory::HistoricSite);
    }

    #[test]
    fn test_describe_uses_keyword_table_in_order() {
        // "museum" precedes "park" in the table, so a museum inside a park
        // is described as a museum
        let description = describe(
            &tags(&[("tourism", "museum"), ("leisure", "park")]),
            "City Museum",
        );
        assert_eq!(
            description,
            "Explore fascinating exhibits and collections at City Museum"
        );
    }

    #[test]
    fn test_describe_wikipedia_fallback() {
        let description = describe(
            &tags(&[("wikipedia", "en:Somewhere"), ("tourism", "hotel")]),
            "Somewhere",
        );
        assert_eq!(
            description,
            "Learn more about this notable destination: Somewhere"
        );
    }

    #[test]
    fn test_describe_coarse_fallbacks() {
        assert_eq!(
            describe(&tags(&[("tourism", "hotel")]), "X"),
            "A popular tourist destination worth visiting"
        );
        assert_eq!(
            describe(&tags(&[("historic", "yes")]), "X"),
            "A historic site with cultural significance"
        );
        assert_eq!(
            describe(&tags(&[("leisure", "marina")]), "X"),
            "A great place for recreation and leisure"
        );
        assert_eq!(
            describe(&tags(&[]), "X"),
            "An interesting place to explore and discover"
        );
    }

    #[test]
    fn test_wikipedia_tag_with_language_prefix() {
        let url = wikipedia_url("Tour Eiffel", &tags(&[("wikipedia", "fr:Tour Eiffel")]));
        assert_eq!(url, "https://fr.wikipedia.org/wiki/Tour_Eiffel");
    }

    #[test]
    fn test_wikipedia_tag_without_prefix() {
        let url = wikipedia_url("Eiffel Tower", &tags(&[("wikipedia", "Eiffel Tower")]));
        assert_eq!(url, "https://en.wikipedia.org/wiki/Eiffel_Tower");
    }

    #[test]
    fn test_wikipedia_title_correction() {
        let url = wikipedia_url("MG Road", &tags(&[]));
        assert_eq!(
            url,
            "https://en.wikipedia.org/wiki/Mahatma_Gandhi_Road%2C_Bangalore"
        );
    }

    #[test]
    fn test_wikipedia_from_raw_name() {
        let url = wikipedia_url("Eiffel Tower", &tags(&[]));
        assert_eq!(url, "https://en.wikipedia.org/wiki/Eiffel_Tower");
    }

    #[test]
    fn test_image_prefers_provider_tag() {
        let url = image_url(
            &tags(&[("image", "https://example.com/photo.jpg")]),
            "Anything",
        );
        assert_eq!(url, "https://example.com/photo.jpg");
    }

    #[test]
    fn test_image_placeholder_is_deterministic() {
        let a = image_url(&tags(&[]), "Cubbon Park");
        let b = image_url(&tags(&[]), "Cubbon Park");
        assert_eq!(a, b);
        assert_eq!(a, "https://picsum.photos/seed/Cubbon%20Park/400/300.jpg");
    }

    #[tokio::test]
    async fn test_fetch_caps_at_five() {
        let elements = (1..=8).map(|i| named_element(&format!("Spot {i}"))).collect();
        let agent = PlacesAgent::new(Arc::new(FixedProvider(elements)));

        let places = agent.fetch(0.0, 0.0, 10_000).await.unwrap();
        assert_eq!(places.len(), MAX_PLACES);
        assert_eq!(places[0].name, "Spot 1");
        assert_eq!(places[4].name, "Spot 5");
    }

    #[tokio::test]
    async fn test_fetch_deduplicates_on_trimmed_name() {
        let elements = vec![
            named_element("Eiffel Tower"),
            named_element("  Eiffel Tower "),
            named_element("Louvre"),
        ];
        let agent = PlacesAgent::new(Arc::new(FixedProvider(elements)));

        let places = agent.fetch(0.0, 0.0, 10_000).await.unwrap();
        let names: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Eiffel Tower", "Louvre"]);
    }

    #[tokio::test]
    async fn test_fetch_skips_unnamed_elements() {
        let elements = vec![
            PoiElement {
                tags: tags(&[("tourism", "viewpoint")]),
            },
            named_element("Named Spot"),
        ];
        let agent = PlacesAgent::new(Arc::new(FixedProvider(elements)));

        let places = agent.fetch(0.0, 0.0, 10_000).await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Named Spot");
    }

    #[tokio::test]
    async fn test_provider_failure_yields_none() {
        let agent = PlacesAgent::new(Arc::new(FailingProvider));
        assert!(agent.fetch(0.0, 0.0, 10_000).await.is_none());
    }
}
