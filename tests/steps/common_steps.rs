use cucumber::then;

use crate::bdd_support::{facts, schema};
use crate::bdd_world::World;

#[then(regex = r#"^the step fails with "([^"]*)"$"#)]
pub async fn then_fails_with(world: &mut World, needle: String) {
    let err = world
        .last_error
        .as_ref()
        .expect("expected a captured failure");
    let msg = err.to_string();
    assert!(
        msg.contains(&needle),
        "error \"{msg}\" does not contain \"{needle}\""
    );
}

#[then(regex = r#"^a successful "([^"]*)" fact is emitted$"#)]
pub async fn then_success_fact(world: &mut World, stage: String) {
    let matched = facts::filter_by_stage(world.all_facts(), &[&stage]);
    assert!(
        matched.iter().any(|f| f["decision"] == "success"),
        "no successful {stage} fact"
    );
}

#[then(regex = r#"^a failure fact with error_id "([^"]*)" is emitted$"#)]
pub async fn then_failure_fact(world: &mut World, id: String) {
    assert!(
        facts::has_error_id(world.all_facts(), &id),
        "no fact with error_id {id}"
    );
}

#[then(regex = r"^every emitted fact matches the fact schema$")]
pub async fn then_schema_valid(world: &mut World) {
    schema::assert_valid(&world.all_facts());
}
