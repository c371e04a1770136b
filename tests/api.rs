use std::sync::atomic::Ordering;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use yeschef_mealplan::{CUSTOM_RECIPES_KEY, MEAL_PLANS_KEY};
use yeschef_recipe::PREFERENCES_KEY;

mod helpers;

use helpers::{recipe, send, setup_test_state};

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, body) = send(&state.app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&state.app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    Ok(())
}

#[tokio::test]
async fn test_current_week_starts_empty() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, body) = send(&state.app, Method::GET, "/api/plan", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offset"], 0);
    assert_eq!(body["weekKey"], "2025-W3-0");
    assert_eq!(body["locked"], false);
    assert_eq!(body["plan"].as_object().unwrap().len(), 7);
    assert_eq!(body["plan"]["Monday"], json!({}));

    Ok(())
}

#[tokio::test]
async fn test_add_meal_persists() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, body) = send(
        &state.app,
        Method::PUT,
        "/api/plan/monday/lunch",
        Some(json!({ "id": "r1", "name": "Shakshuka" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["Monday"]["lunch"]["name"], "Shakshuka");

    let raw = state.storage.raw(MEAL_PLANS_KEY).unwrap();
    let stored: Value = serde_json::from_str(&raw)?;
    assert_eq!(stored["2025-W3-0"]["Monday"]["lunch"]["id"], "r1");

    Ok(())
}

#[tokio::test]
async fn test_unknown_slot_is_bad_request() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, body) = send(
        &state.app,
        Method::PUT,
        "/api/plan/someday/lunch",
        Some(json!({ "id": "r1", "name": "Shakshuka" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown day: someday");

    let (status, _) = send(&state.app, Method::DELETE, "/api/plan/Monday/brunch", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_locked_week_rejects_slot_changes() -> anyhow::Result<()> {
    let state = setup_test_state().await?;
    state
        .store
        .lock()
        .await
        .add_meal_to_plan(
            yeschef_shared::mealplan::Day::Monday,
            yeschef_shared::mealplan::MealType::Lunch,
            recipe("r0", "Chicken Bowl"),
        )
        .await;

    let (_, body) = send(&state.app, Method::POST, "/api/plan/lock", None).await;
    assert_eq!(body["locked"], true);

    let (status, _) = send(&state.app, Method::POST, "/api/drag/Monday/lunch", None).await;
    assert_eq!(status, StatusCode::LOCKED);
    let (_, drag) = send(&state.app, Method::GET, "/api/drag", None).await;
    assert!(drag["recipe"].is_null());
    assert!(drag["source"].is_null());

    let meal = Some(json!({ "id": "r1", "name": "Ramen" }));
    let (status, _) = send(&state.app, Method::PUT, "/api/plan/Friday/dinner", meal.clone()).await;
    assert_eq!(status, StatusCode::LOCKED);

    let (status, _) = send(&state.app, Method::DELETE, "/api/plan", None).await;
    assert_eq!(status, StatusCode::LOCKED);

    send(&state.app, Method::POST, "/api/plan/unlock", None).await;
    let (status, body) = send(&state.app, Method::PUT, "/api/plan/Friday/dinner", meal).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["Friday"]["dinner"]["name"], "Ramen");

    Ok(())
}

#[tokio::test]
async fn test_update_and_move_meals() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, _) = send(
        &state.app,
        Method::PATCH,
        "/api/plan/Tuesday/lunch",
        Some(json!({ "calories": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    {
        let mut store = state.store.lock().await;
        store
            .add_meal_to_plan(
                yeschef_shared::mealplan::Day::Tuesday,
                yeschef_shared::mealplan::MealType::Lunch,
                recipe("a", "Tacos"),
            )
            .await;
        store
            .add_meal_to_plan(
                yeschef_shared::mealplan::Day::Wednesday,
                yeschef_shared::mealplan::MealType::Dinner,
                recipe("b", "Curry"),
            )
            .await;
    }

    let (status, body) = send(
        &state.app,
        Method::PATCH,
        "/api/plan/Tuesday/lunch",
        Some(json!({ "calories": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["Tuesday"]["lunch"]["calories"], 500);
    assert_eq!(body["plan"]["Tuesday"]["lunch"]["name"], "Tacos");

    let (status, body) = send(
        &state.app,
        Method::POST,
        "/api/plan/move",
        Some(json!({
            "from": { "day": "Tuesday", "mealType": "lunch" },
            "to": { "day": "Wednesday", "mealType": "dinner" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan"]["Tuesday"]["lunch"]["name"], "Curry");
    assert_eq!(body["plan"]["Wednesday"]["dinner"]["name"], "Tacos");

    Ok(())
}

#[tokio::test]
async fn test_rename_going_out_meal() -> anyhow::Result<()> {
    let state = setup_test_state().await?;
    let template = yeschef_mealplan::going_out_templates().remove(0);

    send(
        &state.app,
        Method::PUT,
        "/api/plan/Saturday/lunch",
        Some(serde_json::to_value(&template)?),
    )
    .await;

    let (status, body) = send(
        &state.app,
        Method::PUT,
        "/api/plan/Saturday/lunch/restaurant",
        Some(json!({ "name": " Nopa " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let meal = &body["plan"]["Saturday"]["lunch"];
    assert_eq!(meal["name"], "Lunch Out (Nopa)");
    assert_eq!(meal["restaurantName"], "Nopa");
    assert_eq!(meal["isGoingOut"], true);

    Ok(())
}

#[tokio::test]
async fn test_rename_regular_meal_is_not_found() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    send(
        &state.app,
        Method::PUT,
        "/api/plan/Monday/lunch",
        Some(serde_json::to_value(recipe("r1", "Chicken Bowl"))?),
    )
    .await;

    let (status, _) = send(
        &state.app,
        Method::PUT,
        "/api/plan/Monday/lunch/restaurant",
        Some(json!({ "name": "Nopa" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&state.app, Method::GET, "/api/plan", None).await;
    let meal = &body["plan"]["Monday"]["lunch"];
    assert_eq!(meal["name"], "Chicken Bowl");
    assert!(meal.get("restaurantName").is_none());

    Ok(())
}

#[tokio::test]
async fn test_week_offset_switches_plans() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    send(
        &state.app,
        Method::PUT,
        "/api/plan/Monday/dinner",
        Some(json!({ "id": "r1", "name": "Pho" })),
    )
    .await;

    let (_, body) = send(
        &state.app,
        Method::PUT,
        "/api/plan/offset",
        Some(json!({ "offset": 1 })),
    )
    .await;
    assert_eq!(body["weekKey"], "2025-W4-0");
    assert_eq!(body["plan"]["Monday"], json!({}));

    let (_, body) = send(
        &state.app,
        Method::PUT,
        "/api/plan/offset",
        Some(json!({ "offset": 0 })),
    )
    .await;
    assert_eq!(body["plan"]["Monday"]["dinner"]["name"], "Pho");

    let (_, body) = send(&state.app, Method::DELETE, "/api/plan/all", None).await;
    assert_eq!(body["plan"]["Monday"], json!({}));

    Ok(())
}

#[tokio::test]
async fn test_drag_and_drop() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, _) = send(&state.app, Method::POST, "/api/drag/Monday/lunch", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        &state.app,
        Method::PUT,
        "/api/drag",
        Some(json!({ "recipe": { "id": "r9", "name": "Gnocchi" } })),
    )
    .await;
    assert_eq!(body["recipe"]["name"], "Gnocchi");

    let (status, body) = send(
        &state.app,
        Method::POST,
        "/api/drag/drop",
        Some(json!({ "day": "Friday", "mealType": "dinner" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["placed"], true);

    let (_, body) = send(&state.app, Method::GET, "/api/drag", None).await;
    assert_eq!(body["recipe"], Value::Null);

    let (_, body) = send(&state.app, Method::POST, "/api/drag/Friday/dinner", None).await;
    assert_eq!(body["source"], json!({ "day": "Friday", "mealType": "dinner" }));

    let (_, body) = send(
        &state.app,
        Method::POST,
        "/api/drag/drop",
        Some(json!({ "day": "Sunday", "mealType": "lunch" })),
    )
    .await;
    assert_eq!(body["placed"], true);

    let (_, body) = send(&state.app, Method::GET, "/api/plan", None).await;
    assert_eq!(body["plan"]["Friday"], json!({}));
    assert_eq!(body["plan"]["Sunday"]["lunch"]["name"], "Gnocchi");

    let (_, body) = send(
        &state.app,
        Method::POST,
        "/api/drag/drop",
        Some(json!({ "day": "Sunday", "mealType": "dinner" })),
    )
    .await;
    assert_eq!(body["placed"], false);

    Ok(())
}

#[tokio::test]
async fn test_rotation() -> anyhow::Result<()> {
    let state = setup_test_state().await?;
    let favorite = json!({ "id": "r1", "name": "Lasagna" });

    let (status, body) = send(&state.app, Method::POST, "/api/rotation", Some(favorite.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&state.app, Method::POST, "/api/rotation", Some(favorite)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&state.app, Method::GET, "/api/rotation/r1", None).await;
    assert_eq!(body["inRotation"], true);

    let (status, _) = send(&state.app, Method::DELETE, "/api/rotation/r1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&state.app, Method::GET, "/api/rotation/r1", None).await;
    assert_eq!(body["inRotation"], false);

    Ok(())
}

#[tokio::test]
async fn test_custom_recipes() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, _) = send(&state.app, Method::POST, "/api/custom", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &state.app,
        Method::POST,
        "/api/custom",
        Some(json!({ "name": "Family Chili", "calories": 650 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "custom-1737536400000");

    let (status, body) = send(
        &state.app,
        Method::PATCH,
        "/api/custom/custom-1737536400000",
        Some(json!({ "name": "Weeknight Chili" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Weeknight Chili");
    assert_eq!(body["calories"], 650);
    assert!(state.storage.raw(CUSTOM_RECIPES_KEY).unwrap().contains("Weeknight Chili"));

    let (status, _) = send(
        &state.app,
        Method::PATCH,
        "/api/custom/custom-1",
        Some(json!({ "name": "Nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&state.app, Method::DELETE, "/api/custom/custom-1737536400000", None).await;
    let (_, body) = send(&state.app, Method::GET, "/api/custom", None).await;
    assert_eq!(body, json!([]));

    Ok(())
}

#[tokio::test]
async fn test_generate_merges_candidates() -> anyhow::Result<()> {
    let state = setup_test_state().await?;
    *state.generator.recipes.lock().unwrap() =
        vec![recipe("x", "Tofu Stir Fry"), recipe("y", "Family Chili")];

    send(
        &state.app,
        Method::POST,
        "/api/custom",
        Some(json!({ "name": "Family Chili" })),
    )
    .await;

    let (status, body) = send(&state.app, Method::POST, "/api/recipes/generate", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids = body
        .as_array()
        .unwrap()
        .iter()
        .map(|recipe| recipe["id"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        [
            "lunch-out",
            "dinner-out",
            "ai-1737536400000-0",
            "custom-1737536400000"
        ]
    );

    let store = state.store.lock().await;
    assert_eq!(store.available_recipes().len(), 4);
    assert!(!store.is_generating());
    assert_eq!(state.generator.seen_preferences.lock().unwrap()[0], None);

    Ok(())
}

#[tokio::test]
async fn test_generate_full_round_keeps_names_unique() -> anyhow::Result<()> {
    let state = setup_test_state().await?;
    let names = [
        "Tofu Stir Fry",
        "  family   CHILI ",
        "Miso Salmon",
        "beef tacos",
        "Shrimp Pad Thai",
        "miso  salmon",
        "Chicken Tikka Masala",
        "Mushroom Risotto",
        "Greek Salad Bowl",
        "Pork Carnitas",
        "Lentil Soup",
        "BBQ Chicken Pizza",
        "Veggie Lasagna",
        "Teriyaki Chicken",
    ];
    *state.generator.recipes.lock().unwrap() = names
        .iter()
        .enumerate()
        .map(|(index, name)| recipe(&format!("g{index}"), name))
        .collect();

    send(
        &state.app,
        Method::POST,
        "/api/custom",
        Some(json!({ "name": "Family Chili" })),
    )
    .await;
    for favorite in [recipe("r1", "Beef Tacos"), recipe("r2", "Sunday Roast")] {
        send(
            &state.app,
            Method::POST,
            "/api/rotation",
            Some(serde_json::to_value(favorite)?),
        )
        .await;
    }

    let (status, body) = send(&state.app, Method::POST, "/api/recipes/generate", None).await;
    assert_eq!(status, StatusCode::OK);

    let merged = body.as_array().unwrap();
    let normalized = merged
        .iter()
        .map(|recipe| yeschef_shared::recipe::normalize_name(recipe["name"].as_str().unwrap()))
        .collect::<Vec<_>>();
    let unique = normalized.iter().collect::<std::collections::HashSet<_>>();
    assert_eq!(unique.len(), normalized.len());

    let generated = merged
        .iter()
        .filter(|recipe| recipe["id"].as_str().unwrap().starts_with("ai-"))
        .count();
    assert_eq!(generated, 11);
    assert_eq!(merged.len(), 16);
    assert!(merged.iter().any(|recipe| recipe["id"] == "r1"));
    assert_eq!(merged.last().unwrap()["name"], "Family Chili");

    Ok(())
}

#[tokio::test]
async fn test_generate_uses_saved_preferences() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, body) = send(&state.app, Method::GET, "/api/preferences", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (_, body) = send(
        &state.app,
        Method::PUT,
        "/api/preferences",
        Some(json!({ "likedProteins": ["Salmon"], "location": "Denver, CO" })),
    )
    .await;
    assert_eq!(body["likedProteins"], json!(["Salmon"]));
    assert_eq!(body["healthGoals"], "maintain_weight");
    assert!(state.storage.raw(PREFERENCES_KEY).is_some());

    send(
        &state.app,
        Method::POST,
        "/api/recipes/generate",
        Some(json!({ "count": 4 })),
    )
    .await;

    let seen = state.generator.seen_preferences.lock().unwrap();
    let preferences = seen[0].as_ref().unwrap();
    assert_eq!(preferences.liked_proteins, ["Salmon"]);
    assert_eq!(preferences.location(), Some("Denver, CO"));

    Ok(())
}

#[tokio::test]
async fn test_generate_failure_leaves_candidates() -> anyhow::Result<()> {
    let state = setup_test_state().await?;
    state
        .store
        .lock()
        .await
        .set_available_recipes(vec![recipe("r1", "Kept")]);
    state.generator.fail.store(true, Ordering::SeqCst);

    let (status, body) = send(&state.app, Method::POST, "/api/recipes/generate", None).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "service unavailable");

    let store = state.store.lock().await;
    assert_eq!(store.available_recipes().len(), 1);
    assert!(!store.is_generating());

    Ok(())
}

#[tokio::test]
async fn test_autofill_and_steps() -> anyhow::Result<()> {
    let state = setup_test_state().await?;

    let (status, body) = send(
        &state.app,
        Method::POST,
        "/api/recipes/autofill",
        Some(json!({ "title": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Recipe title is required");

    let (status, body) = send(
        &state.app,
        Method::POST,
        "/api/recipes/autofill",
        Some(json!({ "title": "Paella" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Paella");

    let (status, _) = send(&state.app, Method::POST, "/api/recipes/steps", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(
        &state.app,
        Method::POST,
        "/api/recipes/steps",
        Some(json!({ "recipe": { "id": "r1", "name": "Paella" } })),
    )
    .await;
    assert_eq!(body["steps"], json!(["Cook Paella.", "Serve."]));

    Ok(())
}
