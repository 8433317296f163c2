use super::*;

#[test]
fn returns_scripted_answers_in_order() {
    let prompt = ScriptedPrompt::new([true, false]);
    assert!(confirm_action(&prompt, "Delete board?"));
    assert!(!confirm_action(&prompt, "Really?"));
    assert_eq!(prompt.asked(), vec!["Delete board?".to_owned(), "Really?".to_owned()]);
}

#[test]
fn exhausted_script_declines() {
    let prompt = ScriptedPrompt::default();
    assert!(!confirm_action(&prompt, "Anything?"));
}

#[test]
fn works_through_trait_objects() {
    let prompt = ScriptedPrompt::new([true]);
    let dyn_prompt: &dyn Prompt = &prompt;
    assert!(confirm_action(dyn_prompt, "Proceed?"));
}
