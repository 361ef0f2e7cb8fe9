use cucumber::gherkin::Step;
use cucumber::{given, then};

use copydesk::adapters::ContentStore;

use crate::bdd_support::util;
use crate::bdd_world::World;

#[given(regex = r#"^the ([a-z0-9_-]+) "([^"]*)" has meta data$"#)]
pub async fn given_meta(world: &mut World, step: &Step, post_type: String, title: String) {
    let entries = util::meta_from_table(step);
    world
        .api()
        .add_meta(&post_type, &title, &entries)
        .unwrap_or_else(|e| panic!("add meta: {e}"));
}

// Primes the store's read cache so freshness of later assertions is
// meaningful.
#[given(regex = r#"^the ([a-z0-9_-]+) "([^"]*)" meta has been read$"#)]
pub async fn given_meta_read(world: &mut World, post_type: String, title: String) {
    let post = world
        .store
        .post_by_title(&post_type, &title)
        .expect("store read")
        .unwrap_or_else(|| panic!("{post_type} \"{title}\" not found"));
    let _ = world.store.meta_values(post.id, "any").expect("meta read");
}

#[then(regex = r#"^the ([a-z0-9_-]+) "([^"]*)" should have the value "([^"]*)" for the key "([^"]*)"$"#)]
pub async fn then_meta_value(
    world: &mut World,
    post_type: String,
    title: String,
    value: String,
    key: String,
) {
    world
        .api()
        .assert_meta_value(&post_type, &title, &key, &value)
        .unwrap_or_else(|e| panic!("{e}"));
}

#[then(regex = r#"^the ([a-z0-9_-]+) "([^"]*)" should not have the value "([^"]*)" for the key "([^"]*)"$"#)]
pub async fn then_not_meta_value(
    world: &mut World,
    post_type: String,
    title: String,
    value: String,
    key: String,
) {
    world
        .api()
        .assert_not_meta_value(&post_type, &title, &key, &value)
        .unwrap_or_else(|e| panic!("{e}"));
}
