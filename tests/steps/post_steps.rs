use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use copydesk::adapters::ContentStore;

use crate::bdd_support::util;
use crate::bdd_world::World;

#[given(regex = r"^there are users$")]
pub async fn given_users(world: &mut World, step: &Step) {
    for row in util::rows_from_table(step) {
        let login = row.get("user_login").expect("user_login column");
        let id: u64 = row
            .get("ID")
            .expect("ID column")
            .parse()
            .expect("numeric ID");
        world.store.add_user(id, login);
    }
}

#[given(regex = r"^there are posts$")]
pub async fn given_posts(world: &mut World, step: &Step) {
    let rows = util::rows_from_table(step);
    world
        .api()
        .insert_posts(&rows)
        .unwrap_or_else(|e| panic!("insert posts: {e}"));
}

#[when(regex = r"^I attempt to add posts$")]
pub async fn when_attempt_posts(world: &mut World, step: &Step) {
    let rows = util::rows_from_table(step);
    let result = world.api().insert_posts(&rows);
    world.capture(result);
}

#[then(regex = r#"^the ([a-z0-9_-]+) "([^"]*)" should have status "([^"]*)"$"#)]
pub async fn then_status(world: &mut World, post_type: String, title: String, status: String) {
    world
        .api()
        .assert_status(&post_type, &title, &status)
        .unwrap_or_else(|e| panic!("{e}"));
}

#[then(regex = r#"^the ([a-z0-9_-]+) "([^"]*)" was created by user (\d+)$"#)]
pub async fn then_author(world: &mut World, post_type: String, title: String, author: u64) {
    let post = world
        .store
        .post_by_title(&post_type, &title)
        .expect("store read")
        .unwrap_or_else(|| panic!("{post_type} \"{title}\" not found"));
    assert_eq!(post.author, Some(author), "author of \"{title}\"");
}

#[then(regex = r#"^no ([a-z0-9_-]+) "([^"]*)" exists$"#)]
pub async fn then_no_post(world: &mut World, post_type: String, title: String) {
    let post = world
        .store
        .post_by_title(&post_type, &title)
        .expect("store read");
    assert!(post.is_none(), "{post_type} \"{title}\" should not exist");
}
