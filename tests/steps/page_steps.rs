use cucumber::{given, then, when};

use crate::bdd_world::World;

#[given(regex = r#"^the post type "([^"]*)" is registered with edit label "([^"]*)"$"#)]
pub async fn given_type_label(world: &mut World, post_type: String, label: String) {
    world.store.register_type(&post_type, &label);
}

#[given(regex = r#"^the admin screen for post (\d+) responds with heading "([^"]*)"$"#)]
pub async fn given_admin_screen(world: &mut World, id: u64, heading: String) {
    world.browser.route(&world.edit_url(id), 200, &[heading.as_str()]);
}

#[given(regex = r"^the admin screen for post (\d+) responds with status (\d+)$")]
pub async fn given_admin_status(world: &mut World, id: u64, status: u16) {
    world.browser.route(&world.edit_url(id), status, &[]);
}

#[when(regex = r#"^I open the edit screen for the ([a-z0-9_-]+) "([^"]*)"$"#)]
pub async fn when_open_edit(world: &mut World, post_type: String, title: String) {
    let result = world.api().open_edit_screen(&post_type, &title);
    match result {
        Ok(opened) => {
            world.opened = Some(opened);
            world.last_error = None;
        }
        Err(e) => world.last_error = Some(e),
    }
}

#[then(regex = r#"^the edit screen is open at "([^"]*)"$"#)]
pub async fn then_open_at(world: &mut World, url: String) {
    let opened = world.opened.as_ref().expect("no edit screen was opened");
    assert_eq!(opened.url, url);
}
