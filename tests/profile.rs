mod utils;

use utils::prelude::*;

#[tokio::test]
async fn visibility_flow() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;
    let coach = app.subscribed_coach().await;

    let res = app.get("/v1/profile").user(&player).send().await;
    let profile: Value = res.json().await;
    assert_eq!(profile["is_visible"], json!(false));

    let res = app.get("/v1/players").user(&coach).send().await;
    let search: Value = res.json().await;
    assert_eq!(search["total"], json!(0));

    let res = app
        .put("/v1/profile/visibility")
        .user(&player)
        .json(&json!({ "is_visible": true }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await;
    assert_json_eq!(body, json!({ "is_visible": true }));

    let res = app.get("/v1/players").user(&coach).send().await;
    let search: Value = res.json().await;
    assert_eq!(search["total"], json!(1));
    assert_eq!(search["players"][0]["id"], profile["id"]);
    assert_eq!(search["players"][0]["college"]["id"], json!(college));
}

#[tokio::test]
async fn only_players_set_visibility() {
    let app = App::new().await;
    let coach = app.coach().await;

    let res = app
        .put("/v1/profile/visibility")
        .user(&coach)
        .json(&json!({ "is_visible": true }))
        .send()
        .await;

    assert_error!(res, error::FORBIDDEN_ROLE);
}

#[tokio::test]
async fn update_player_profile() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;

    let res = app
        .patch("/v1/profile")
        .user(&player)
        .json(&json!({
            "height_cm": 180,
            "gpa": 3.5,
            "preferred_foot": "left",
            "bio": "Box-to-box midfielder",
            "goals": 12,
        }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let profile: Value = res.json().await;
    assert_json_include!(
        actual: profile,
        expected: json!({
            "height_cm": 180,
            "gpa": 3.5,
            "preferred_foot": "left",
            "bio": "Box-to-box midfielder",
            "goals": 12,
            "position": "midfielder",
        })
    );

    let res = app
        .patch("/v1/profile")
        .user(&player)
        .json(&json!({ "bio": null }))
        .send()
        .await;

    let profile: Value = res.json().await;
    assert_eq!(profile["bio"], Value::Null);
    assert_eq!(profile["height_cm"], json!(180));
}

#[tokio::test]
async fn invalid_profile_values() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;

    for body in [
        json!({ "gpa": 4.5 }),
        json!({ "height_cm": 90 }),
        json!({ "highlight_video_url": "not a url" }),
        json!({ "goals": -1 }),
        json!({ "first_name": "" }),
    ] {
        let res = app.patch("/v1/profile").user(&player).json(&body).send().await;
        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }
}

#[tokio::test]
async fn move_to_unknown_college() {
    let app = App::new().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;

    let res = app
        .patch("/v1/profile")
        .user(&player)
        .json(&json!({ "college_id": Uuid::new_v4() }))
        .send()
        .await;

    assert_error!(res, error::COLLEGE_NOT_FOUND);
}

#[tokio::test]
async fn update_coach_profile() {
    let app = App::new().await;
    let coach = app.coach().await;

    let res = app
        .patch("/v1/profile")
        .user(&coach)
        .json(&json!({ "title": "Head Coach", "phone": "+1 555 0100" }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let profile: Value = res.json().await;
    assert_eq!(profile["title"], json!("Head Coach"));
    assert_eq!(profile["phone"], json!("+1 555 0100"));
}

#[tokio::test]
async fn admin_has_no_profile() {
    let app = App::new().await;
    let admin = app.admin().await;

    let res = app.get("/v1/profile").user(&admin).send().await;

    assert_error!(res, error::PROFILE_NOT_FOUND);
}
