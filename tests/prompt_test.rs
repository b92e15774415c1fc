use recapd::application::services::build_summary_prompt;

#[test]
fn given_transcript_when_building_prompt_then_it_is_embedded_verbatim() {
    let transcript = "Alice will send the report by Friday.";
    let prompt = build_summary_prompt(transcript);

    assert!(prompt.contains(transcript));
}

#[test]
fn given_any_transcript_when_building_prompt_then_delimiters_bound_it() {
    let prompt = build_summary_prompt("some transcript");

    assert!(prompt.starts_with("<think>\n"));
    assert!(prompt.ends_with("</think>\n<response>\n"));

    let think_close = prompt.find("</think>").unwrap();
    let transcript_pos = prompt.find("some transcript").unwrap();
    assert!(transcript_pos < think_close);
}

#[test]
fn given_prompt_then_it_asks_for_key_points_and_action_items() {
    let prompt = build_summary_prompt("t");

    assert!(prompt.contains("key points"));
    assert!(prompt.contains("action items"));
    assert!(prompt.contains("deadlines and owners"));
}
