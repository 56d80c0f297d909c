mod common;

use common::TestApp;
use mongodb::bson::{doc, oid::ObjectId};
use recipe_service::dtos::RecipeResponse;
use serde_json::json;

#[tokio::test]
async fn empty_collection_returns_empty_list() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!([]));

    app.cleanup().await;
}

#[tokio::test]
async fn stored_recipe_round_trips_with_string_id() {
    let app = TestApp::spawn().await;

    let inserted = app
        .raw_recipes()
        .insert_one(
            doc! {
                "title": "Borscht",
                "subtitle": "Ukrainian beet soup",
                "category": "soup",
                "servings": "6",
                "cook_time": "2 h",
                "difficulty": "medium",
                "image": "/img/borscht.jpg",
                "ingredients": [
                    { "group": "Broth", "items": [
                        { "amount": "500 g", "name": "beef" },
                        { "amount": "2 l", "name": "water", "description": "cold" },
                    ]},
                    { "group": "Vegetables", "items": [
                        { "amount": "2", "name": "beets" },
                    ]},
                ],
                "steps": [
                    { "number": 1, "title": "Broth", "description": "Simmer the beef." },
                    { "number": 2, "title": "Beets", "description": "Grate the beets.", "image": "/img/beets.jpg" },
                ],
                "tips": ["Serve with smetana"],
            },
            None,
        )
        .await
        .expect("Failed to seed recipe");
    let oid: ObjectId = inserted.inserted_id.as_object_id().expect("ObjectId");

    let response = app
        .client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let recipes = body.as_array().expect("array body");
    assert_eq!(recipes.len(), 1);

    let recipe = &recipes[0];
    assert_eq!(recipe["id"], json!(oid.to_hex()));
    assert!(recipe.get("_id").is_none());
    assert_eq!(recipe["title"], "Borscht");
    assert_eq!(recipe["subtitle"], "Ukrainian beet soup");
    assert!(recipe["description"].is_null());
    assert_eq!(recipe["ingredients"][0]["group"], "Broth");
    assert_eq!(recipe["ingredients"][0]["items"][1]["description"], "cold");
    assert!(recipe["ingredients"][1]["items"][0]["description"].is_null());
    assert_eq!(recipe["steps"][1]["number"], 2);
    assert_eq!(recipe["steps"][1]["image"], "/img/beets.jpg");
    assert_eq!(recipe["tips"], json!(["Serve with smetana"]));

    let typed: RecipeResponse = serde_json::from_value(recipe.clone()).unwrap();
    assert_eq!(typed.ingredients.len(), 2);
    assert_eq!(typed.steps.len(), 2);

    app.cleanup().await;
}

#[tokio::test]
async fn every_stored_recipe_is_listed() {
    let app = TestApp::spawn().await;

    let docs = (0..3).map(|i| {
        doc! {
            "title": format!("Recipe {}", i),
            "ingredients": [],
            "steps": [],
        }
    });
    let inserted = app
        .raw_recipes()
        .insert_many(docs, None)
        .await
        .expect("Failed to seed recipes");

    let recipes: Vec<RecipeResponse> = app
        .client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(recipes.len(), 3);
    for id in inserted.inserted_ids.values() {
        let hex = id.as_object_id().unwrap().to_hex();
        assert!(recipes.iter().any(|r| r.id == hex));
    }
    assert!(recipes.iter().all(|r| r.tips.is_none()));

    app.cleanup().await;
}

#[tokio::test]
async fn non_object_id_is_stringified() {
    let app = TestApp::spawn().await;

    app.raw_recipes()
        .insert_one(
            doc! { "_id": 42, "title": "Kasha", "ingredients": [], "steps": [] },
            None,
        )
        .await
        .expect("Failed to seed recipe");

    let body: serde_json::Value = app
        .client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(body[0]["id"], "42");

    app.cleanup().await;
}

#[tokio::test]
async fn malformed_stored_recipe_is_a_server_error() {
    let app = TestApp::spawn().await;

    app.raw_recipes()
        .insert_one(doc! { "subtitle": "no title", "ingredients": [], "steps": [] }, None)
        .await
        .expect("Failed to seed recipe");

    let response = app
        .client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Database error");

    app.cleanup().await;
}
