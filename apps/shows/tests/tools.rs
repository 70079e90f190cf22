//! Tests for the show MCP tools.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, RawContent},
};
use std::sync::Arc;
use zcore::{Catalog, Show};
use zootour_shows::{GetShowDetails, GetShowsByAnimal, ShowService};

fn show(name: &str, description: &str, animal: Option<&str>) -> Show {
    Show {
        name: name.into(),
        description: description.into(),
        animal: animal.map(Into::into),
        time: Some("13:00".into()),
        location: None,
    }
}

fn service() -> ShowService {
    ShowService::new(Arc::new(Catalog::new(vec![
        show(
            "Penguin Parade",
            "Waddle along with the colony to the diving pool.",
            Some("penguin"),
        ),
        show(
            "Big Cat Feeding",
            "Watch our lions at lunch.",
            Some("lion"),
        ),
        show(
            "Twilight Safari",
            "An evening walk past the tiger forest.",
            None,
        ),
    ])))
}

/// Decode the JSON payload out of a tool result's text content.
fn payload(result: &CallToolResult) -> serde_json::Value {
    let text: String = result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect();
    serde_json::from_str(&text).unwrap()
}

#[tokio::test]
async fn details_by_name() {
    let result = service()
        .get_show_details(Parameters(GetShowDetails {
            name: "penguin parade".into(),
        }))
        .await
        .unwrap();

    let value = payload(&result);
    assert_eq!(value["name"], "Penguin Parade");
    assert_eq!(value["animal"], "penguin");
}

#[tokio::test]
async fn details_unknown_name_is_null() {
    let result = service()
        .get_show_details(Parameters(GetShowDetails {
            name: "midnight circus".into(),
        }))
        .await
        .unwrap();

    assert!(payload(&result).is_null());
}

#[tokio::test]
async fn shows_by_animal_scans_descriptions() {
    // "tiger" appears only in Twilight Safari's description; the show
    // has no `animal` field at all.
    let result = service()
        .get_shows_by_animal(Parameters(GetShowsByAnimal {
            animal_name: "tiger".into(),
        }))
        .await
        .unwrap();

    let value = payload(&result);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["name"], "Twilight Safari");
}

#[tokio::test]
async fn shows_by_animal_matches_titles() {
    let result = service()
        .get_shows_by_animal(Parameters(GetShowsByAnimal {
            animal_name: "PENGUIN".into(),
        }))
        .await
        .unwrap();

    let value = payload(&result);
    assert_eq!(value[0]["name"], "Penguin Parade");
}

#[tokio::test]
async fn shows_by_animal_no_match_is_empty_array() {
    let result = service()
        .get_shows_by_animal(Parameters(GetShowsByAnimal {
            animal_name: "giraffe".into(),
        }))
        .await
        .unwrap();

    assert_eq!(payload(&result), serde_json::json!([]));
}

#[tokio::test]
async fn show_names_sorted() {
    let result = service().get_all_show_names().await.unwrap();
    assert_eq!(
        payload(&result),
        serde_json::json!(["Big Cat Feeding", "Penguin Parade", "Twilight Safari"])
    );
}

#[tokio::test]
async fn featured_animals_skip_unlabeled_shows() {
    let result = service().get_featured_animals().await.unwrap();
    assert_eq!(payload(&result), serde_json::json!(["lion", "penguin"]));
}
