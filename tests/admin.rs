mod utils;

use entity::{player_profiles, users};
use sea_orm::EntityTrait;
use utils::prelude::*;

#[tokio::test]
async fn list_users() {
    let app = App::new().await;
    let admin = app.admin().await;
    let college = app.njcaa_college().await;
    app.player(college).await;
    app.coach().await;

    let res = app.get("/v1/admin/users").user(&admin).send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let users: Vec<Value> = res.json().await;
    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|user| user.get("password_hash").is_none()));

    let res = app
        .get("/v1/admin/users")
        .user(&admin)
        .query(&[("user_type", "player")])
        .send()
        .await;

    let users: Vec<Value> = res.json().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["user_type"], json!("player"));
}

#[tokio::test]
async fn only_admins() {
    let app = App::new().await;
    let coach = app.subscribed_coach().await;

    let res = app.get("/v1/admin/users").user(&coach).send().await;
    assert_error!(res, error::FORBIDDEN_ROLE);

    let res = app.get("/v1/admin/users").send().await;
    assert_error!(res, error::COULD_NOT_GET_CLAIMS);
}

#[tokio::test]
async fn delete_user_cascades() {
    let app = App::new().await;
    let admin = app.admin().await;
    let college = app.njcaa_college().await;
    let player = app.player(college).await;
    app.set_visible(&player, true).await;
    let player_id = app.profile_id(&player).await;

    let njcaa_coach = app.njcaa_coach(college).await;
    let res = app
        .post("/v1/evaluations")
        .user(&njcaa_coach)
        .json(&json!({
            "player_id": player_id,
            "technical": 5,
            "tactical": 5,
            "physical": 5,
            "mental": 5,
            "overall_rating": 5,
            "potential": 5,
        }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let coach = app.subscribed_coach().await;
    let res = app
        .post("/v1/favorites")
        .user(&coach)
        .json(&json!({ "player_id": player_id }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app
        .delete(&format!("/v1/admin/users/{}", player.id))
        .user(&admin)
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    assert!(users::Entity::find_by_id(player.id)
        .one(&app.db)
        .await
        .unwrap()
        .is_none());
    assert!(player_profiles::Entity::find_by_id(player_id)
        .one(&app.db)
        .await
        .unwrap()
        .is_none());

    let res = app.get("/v1/favorites").user(&coach).send().await;
    let favorites: Vec<Value> = res.json().await;
    assert!(favorites.is_empty());

    let res = app
        .delete(&format!("/v1/admin/users/{}", player.id))
        .user(&admin)
        .send()
        .await;
    assert_error!(res, error::USER_NOT_FOUND);
}
