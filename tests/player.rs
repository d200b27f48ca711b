mod utils;

use utils::prelude::*;

#[tokio::test]
async fn search_needs_subscription() {
    let app = App::new().await;
    let coach = app.coach().await;

    let res = app.get("/v1/players").user(&coach).send().await;

    assert_error!(res, error::SUBSCRIPTION_REQUIRED);
}

#[tokio::test]
async fn players_cannot_search() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;

    let res = app.get("/v1/players").user(&player).send().await;

    assert_error!(res, error::FORBIDDEN_ROLE);
}

#[tokio::test]
async fn search_filters_and_pages() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let other_college = app.njcaa_college().await;
    let coach = app.subscribed_coach().await;

    for _ in 0..3 {
        let player = app.player(college).await;
        app.set_visible(&player, true).await;
    }

    let elsewhere = app.player(other_college).await;
    app.set_visible(&elsewhere, true).await;

    app.player(college).await;

    let res = app
        .get("/v1/players")
        .user(&coach)
        .query(&[("college_id", college.to_string()), ("per_page", "2".to_owned())])
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let search: Value = res.json().await;
    assert_eq!(search["total"], json!(3));
    assert_eq!(search["per_page"], json!(2));
    assert_eq!(search["players"].as_array().unwrap().len(), 2);

    let res = app
        .get("/v1/players")
        .user(&coach)
        .query(&[
            ("college_id", college.to_string()),
            ("per_page", "2".to_owned()),
            ("page", "2".to_owned()),
        ])
        .send()
        .await;

    let search: Value = res.json().await;
    assert_eq!(search["page"], json!(2));
    assert_eq!(search["players"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn per_page_is_bounded() {
    let app = App::new().await;
    let coach = app.subscribed_coach().await;

    let res = app
        .get("/v1/players")
        .user(&coach)
        .query(&[("per_page", "500")])
        .send()
        .await;

    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
async fn page_is_bounded() {
    let app = App::new().await;
    let coach = app.subscribed_coach().await;

    let res = app
        .get("/v1/players")
        .user(&coach)
        .query(&[("per_page", "100"), ("page", "184467440737095517")])
        .send()
        .await;

    assert_error!(res, error::JSON_VALIDATE_INVALID);

    let res = app
        .get("/v1/players")
        .user(&coach)
        .query(&[("per_page", "100"), ("page", "10000")])
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await["players"], json!([]));
}

#[tokio::test]
async fn hidden_player_is_not_found() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;
    let id = app.profile_id(&player).await;
    let coach = app.subscribed_coach().await;

    let res = app
        .get(&format!("/v1/players/{id}"))
        .user(&coach)
        .send()
        .await;
    assert_error!(res, error::PLAYER_NOT_FOUND);

    let res = app
        .get(&format!("/v1/players/{id}"))
        .user(&player)
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let njcaa_coach = app.njcaa_coach(college).await;
    let res = app
        .get(&format!("/v1/players/{id}"))
        .user(&njcaa_coach)
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn visible_player_needs_subscription() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;
    app.set_visible(&player, true).await;
    let id = app.profile_id(&player).await;

    let coach = app.coach().await;

    let res = app
        .get(&format!("/v1/players/{id}"))
        .user(&coach)
        .send()
        .await;
    assert_error!(res, error::SUBSCRIPTION_REQUIRED);

    app.subscribe(&coach).await;

    let res = app
        .get(&format!("/v1/players/{id}"))
        .user(&coach)
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn roster_includes_hidden_players() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let other_college = app.njcaa_college().await;
    let coach = app.njcaa_coach(college).await;

    let visible = app.player(college).await;
    app.set_visible(&visible, true).await;
    app.player(college).await;
    app.player(other_college).await;

    let res = app.get("/v1/njcaa/roster").user(&coach).send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let roster: Vec<Value> = res.json().await;
    assert_eq!(roster.len(), 2);
    assert!(roster
        .iter()
        .all(|player| player["college_id"] == json!(college)));
}
